//! HTTP client for the Monetra REST API.
//!
//! One client instance is shared across requests. Every call carries the
//! operator's credentials via Basic auth, with the MFA code in an
//! `X-MFA-Code` header when one was supplied. Bodies are parsed as JSON
//! regardless of HTTP status — the `code` field carries the auth
//! disposition, so only transport failures and undecodable bodies surface
//! as errors. Calls are never retried; a rejected request is final.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{ApiKeyData, ProfileEntry, ProfileListing, UserInfo};
use crate::models::apikey::ApiKeyOptions;
use crate::models::credentials::Credentials;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("undecodable response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone)]
pub struct ProcessorClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProcessorClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Identity and permission lookup for the supplied credentials.
    pub async fn user_permissions(
        &self,
        creds: &Credentials,
    ) -> Result<UserInfo, ProcessorError> {
        const ENDPOINT: &str = "user/permissions";
        self.send(self.request(Method::GET, ENDPOINT, creds), ENDPOINT)
            .await
    }

    /// Profiles visible to the account, from the boarding report.
    pub async fn list_profiles(
        &self,
        creds: &Credentials,
    ) -> Result<Vec<ProfileEntry>, ProcessorError> {
        const ENDPOINT: &str = "boarding/profile";
        let listing: ProfileListing = self
            .send(self.request(Method::GET, ENDPOINT, creds), ENDPOINT)
            .await?;
        Ok(listing.report)
    }

    /// Request creation of an API key with the given options.
    pub async fn create_api_key(
        &self,
        creds: &Credentials,
        options: &ApiKeyOptions,
    ) -> Result<ApiKeyData, ProcessorError> {
        const ENDPOINT: &str = "apikey";
        let raw: serde_json::Value = self
            .send(
                self.request(Method::POST, ENDPOINT, creds).form(options),
                ENDPOINT,
            )
            .await?;
        Ok(ApiKeyData::from_raw(raw))
    }

    fn request(&self, method: Method, endpoint: &str, creds: &Credentials) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut builder = self
            .client
            .request(method, url)
            .basic_auth(&creds.username, Some(creds.password.as_str()));
        if let Some(mfa) = &creds.mfa_code {
            builder = builder.header("X-MFA-Code", mfa.as_str());
        }
        builder
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<T, ProcessorError> {
        let response = request
            .send()
            .await
            .map_err(|source| ProcessorError::Transport { endpoint, source })?;

        tracing::debug!(endpoint, status = %response.status(), "processor call completed");

        response
            .json::<T>()
            .await
            .map_err(|source| ProcessorError::Decode { endpoint, source })
    }
}
