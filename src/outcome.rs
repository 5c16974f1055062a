//! Flow outcomes of the key-generation pipeline.
//!
//! Every branch ends in exactly one of these variants. The response table
//! lives in the `IntoResponse` impl so handlers never assemble status codes
//! or body shapes by hand, and so each branch can be asserted on directly
//! in tests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::apikey::ProfileSummary;

#[derive(Debug)]
pub enum KeyGenOutcome {
    /// Username or password missing from the form.
    Validation,
    /// Account wants an MFA code; the client should resubmit with one.
    MfaRequired,
    /// Account has MFA enforced but never set it up.
    MfaSetupNeeded,
    PasswordExpired,
    CredentialsInvalid,
    /// Operator must pick one of these profiles and resubmit.
    ProfileSelectionNeeded(Vec<ProfileSummary>),
    NoProfileAccess,
    /// Processor rejected the key request; payload is its verbiage.
    KeyCreationFailed(String),
    /// Raw key payload from the processor, passed through untouched.
    Success(serde_json::Value),
}

impl IntoResponse for KeyGenOutcome {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            KeyGenOutcome::Validation => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": 0,
                    "message": "Username and password must be provided."
                }),
            ),
            KeyGenOutcome::MfaRequired => (
                StatusCode::OK,
                json!({
                    "success": 0,
                    "message": "Please enter your multi-factor authentication code.",
                    "next_step": "enter_mfa_code"
                }),
            ),
            KeyGenOutcome::MfaSetupNeeded => (
                StatusCode::FORBIDDEN,
                json!({
                    "success": 0,
                    "message": "Multi-factor authentication must be set up before a key can be generated."
                }),
            ),
            KeyGenOutcome::PasswordExpired => (
                StatusCode::FORBIDDEN,
                json!({
                    "success": 0,
                    "message": "Your password has expired. It must be changed before a key can be generated."
                }),
            ),
            KeyGenOutcome::CredentialsInvalid => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "success": 0,
                    "message": "Credentials are incorrect."
                }),
            ),
            KeyGenOutcome::ProfileSelectionNeeded(profiles) => (
                StatusCode::OK,
                json!({
                    "success": 0,
                    "message": "Profile must be selected.",
                    "next_step": "select_profile",
                    "data": { "profiles": profiles }
                }),
            ),
            KeyGenOutcome::NoProfileAccess => (
                StatusCode::FORBIDDEN,
                json!({
                    "success": 0,
                    "message": "User does not have profile access."
                }),
            ),
            KeyGenOutcome::KeyCreationFailed(verbiage) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": 0,
                    "message": verbiage
                }),
            ),
            KeyGenOutcome::Success(payload) => (
                StatusCode::OK,
                json!({
                    "success": 1,
                    "data": payload
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(outcome: KeyGenOutcome) -> StatusCode {
        outcome.into_response().status()
    }

    #[test]
    fn outcomes_map_to_their_statuses() {
        assert_eq!(status_of(KeyGenOutcome::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(KeyGenOutcome::MfaRequired), StatusCode::OK);
        assert_eq!(
            status_of(KeyGenOutcome::MfaSetupNeeded),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(KeyGenOutcome::PasswordExpired),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(KeyGenOutcome::CredentialsInvalid),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(KeyGenOutcome::ProfileSelectionNeeded(Vec::new())),
            StatusCode::OK
        );
        assert_eq!(
            status_of(KeyGenOutcome::NoProfileAccess),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(KeyGenOutcome::KeyCreationFailed("denied".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(KeyGenOutcome::Success(serde_json::json!({}))),
            StatusCode::OK
        );
    }
}
