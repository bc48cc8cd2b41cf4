// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, map the response.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{Credentials, LoginRequest, TokenResponse, UserRecord};
use crate::utils::constants::{API_TOKEN_AUTH, API_V1_USERS};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("token rejected by the server")]
    Unauthorized,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote authentication seam (the Session Store only needs this call)
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchanges a credential pair for an opaque session token
    async fn sign_in(&self, credentials: &Credentials) -> Result<String, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /token-auth`
    pub async fn token_auth(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let url = self.endpoint(API_TOKEN_AUTH);
        log::info!("🔐 [API] POST {} as {}", url, credentials.username);

        let response = Request::post(&url)
            .json(&LoginRequest::from(credentials))?
            .send()
            .await?;

        decode(response).await
    }

    /// `GET /v1/users`, authenticated by the session token
    pub async fn list_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.endpoint(API_V1_USERS);
        log::info!("📋 [API] GET {}", url);

        let response = Request::get(&url)
            .header("Authorization", &authorization_header(token))
            .send()
            .await?;

        let users: Vec<UserRecord> = decode(response).await?;
        log::info!("✅ [API] {} users received", users.len());
        Ok(users)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApi for ApiClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<String, ApiError> {
        Ok(self.token_auth(credentials).await?.token)
    }
}

pub fn authorization_header(token: &str) -> String {
    format!("Token {}", token)
}

fn status_error(status: u16) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        other => ApiError::Status(other),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
