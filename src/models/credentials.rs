use zeroize::Zeroizing;

/// Operator credentials supplied with each request.
///
/// The password and MFA code are wiped from memory on drop. Nothing in here
/// is ever persisted or logged; the processor account is the only place
/// these are checked.
pub struct Credentials {
    pub username: String,
    pub password: Zeroizing<String>,
    pub mfa_code: Option<Zeroizing<String>>,
}

impl Credentials {
    pub fn new(username: String, password: String, mfa_code: Option<String>) -> Self {
        Self {
            username,
            password: Zeroizing::new(password),
            mfa_code: mfa_code.map(Zeroizing::new),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("mfa_code", &self.mfa_code.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = Credentials::new(
            "operator".into(),
            "hunter2".into(),
            Some("123456".into()),
        );
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("operator"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("123456"));
    }
}
