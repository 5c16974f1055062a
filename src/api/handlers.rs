use std::sync::Arc;

use axum::{extract::State, Form};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::apikey::{ApiKeyOptions, ProfileSummary};
use crate::models::credentials::Credentials;
use crate::outcome::KeyGenOutcome;
use crate::processor::types::{SOFT_MFA_GENERATE, SOFT_MFA_REQUIRED, SOFT_PASS_EXPIRED};
use crate::store;
use crate::AppState;

// ── Request DTO ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateKeyForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub mfa_code: Option<String>,
    pub profile_id: Option<String>,
}

// ── Handler ──────────────────────────────────────────────────

/// POST /api/v1/apikey/generate — authenticate the operator against the
/// processor, resolve a profile, provision a profile-scoped API key, and
/// purge the legacy stored credentials.
pub async fn generate_api_key(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateKeyForm>,
) -> Result<KeyGenOutcome, AppError> {
    run_key_generation(&state, form).await
}

/// The linear pipeline behind the handler, split out so every branch can be
/// exercised directly.
pub async fn run_key_generation(
    state: &AppState,
    form: GenerateKeyForm,
) -> Result<KeyGenOutcome, AppError> {
    if form.username.is_empty() || form.password.is_empty() {
        return Ok(KeyGenOutcome::Validation);
    }

    let creds = Credentials::new(form.username, form.password, form.mfa_code);

    // A profile_id submitted with the form skips the identity lookup
    // entirely; the operator already went through profile selection.
    let profile_id = match form.profile_id.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => match resolve_profile(state, &creds).await? {
            ProfileResolution::Resolved(id) => id,
            ProfileResolution::Interrupted(outcome) => return Ok(outcome),
        },
    };

    let options = ApiKeyOptions::for_profile(profile_id);
    let key_data = state.processor.create_api_key(&creds, &options).await?;

    if !key_data.is_authenticated() {
        return Ok(KeyGenOutcome::KeyCreationFailed(key_data.failure_message()));
    }

    store::purge_legacy_credentials(state.config_store.as_ref()).await?;

    tracing::info!(username = %creds.username, "generated API key and purged legacy credentials");

    Ok(KeyGenOutcome::Success(key_data.raw))
}

enum ProfileResolution {
    Resolved(String),
    Interrupted(KeyGenOutcome),
}

/// Identity lookup and profile resolution: map soft auth errors, adopt a
/// bound profile when the account has one, otherwise offer the boarding
/// listing to accounts allowed to see it.
async fn resolve_profile(
    state: &AppState,
    creds: &Credentials,
) -> Result<ProfileResolution, AppError> {
    let user_info = state.processor.user_permissions(creds).await?;

    if !user_info.is_authenticated() {
        let outcome = match user_info.msoft_code.as_deref() {
            Some(SOFT_MFA_REQUIRED) => KeyGenOutcome::MfaRequired,
            Some(SOFT_MFA_GENERATE) => KeyGenOutcome::MfaSetupNeeded,
            Some(SOFT_PASS_EXPIRED) => KeyGenOutcome::PasswordExpired,
            _ => KeyGenOutcome::CredentialsInvalid,
        };
        return Ok(ProfileResolution::Interrupted(outcome));
    }

    if let Some(id) = &user_info.profile_id {
        return Ok(ProfileResolution::Resolved(id.clone()));
    }

    if user_info.can_list_profiles() {
        let profiles = state.processor.list_profiles(creds).await?;
        let summaries: Vec<ProfileSummary> =
            profiles.iter().map(ProfileSummary::from).collect();
        return Ok(ProfileResolution::Interrupted(
            KeyGenOutcome::ProfileSelectionNeeded(summaries),
        ));
    }

    Ok(ProfileResolution::Interrupted(KeyGenOutcome::NoProfileAccess))
}
