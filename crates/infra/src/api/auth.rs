//! Bearer token storage and refresh against the user management service
//!
//! [`TokenHolder`] is the single place the current access and refresh tokens
//! live. Every resource client reads the access token from it on each call, so
//! a refresh performed by one in-flight operation is seen by the next attempt
//! of every other one.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use authz_core::{AccessTokenProvider, TokenRefresher};
use authz_domain::constants::USER_REFRESH_TOKEN_PATH;
use authz_domain::{Result, SystemError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::client::parse_base_url;
use crate::errors::invalid_url;
use crate::http::HttpClient;

/// Shared access/refresh token pair
#[derive(Default)]
pub struct TokenHolder {
    access_token: RwLock<Option<String>>,
    refresh_token: RwLock<Option<String>>,
}

impl TokenHolder {
    pub fn new(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self { access_token: RwLock::new(access_token), refresh_token: RwLock::new(refresh_token) }
    }

    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = Some(token.into());
    }

    pub async fn set_refresh_token(&self, token: impl Into<String>) {
        *self.refresh_token.write().await = Some(token.into());
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.refresh_token.read().await.clone()
    }

    /// Forget both tokens (logout)
    pub async fn clear(&self) {
        *self.access_token.write().await = None;
        *self.refresh_token.write().await = None;
    }
}

impl fmt::Debug for TokenHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenHolder").finish_non_exhaustive()
    }
}

#[async_trait]
impl AccessTokenProvider for TokenHolder {
    async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }
}

/// Exchanges the stored refresh token for a new access token
///
/// `POST {user_management}/user/refresh` with the refresh token as a
/// plain-text body. A 2xx response body is the new access token.
pub struct UserTokenRefresher {
    http: HttpClient,
    endpoint: Url,
    tokens: Arc<TokenHolder>,
}

impl UserTokenRefresher {
    /// # Errors
    /// Returns `SystemError::Config` if `user_management_url` is malformed.
    pub fn new(http: HttpClient, user_management_url: &str, tokens: Arc<TokenHolder>) -> Result<Self> {
        let base = parse_base_url(user_management_url)?;
        let endpoint = base
            .join(USER_REFRESH_TOKEN_PATH)
            .map_err(|err| invalid_url(user_management_url, err))?;

        Ok(Self { http, endpoint, tokens })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for UserTokenRefresher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserTokenRefresher").field("endpoint", &self.endpoint.as_str()).finish()
    }
}

#[async_trait]
impl TokenRefresher for UserTokenRefresher {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn refresh_token(&self) -> Result<()> {
        let refresh_token = self
            .tokens
            .refresh_token()
            .await
            .ok_or_else(|| SystemError::token_refresh("no refresh token available"))?;

        let request = self
            .http
            .request(Method::POST, self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain")
            .header(ACCEPT, "text/plain")
            .body(refresh_token);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| SystemError::token_refresh(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "refresh endpoint rejected the refresh token");
            return Err(SystemError::token_refresh(format!(
                "refresh endpoint returned status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| SystemError::token_refresh(format!("unreadable refresh response: {err}")))?;

        // Some deployments answer with a JSON string instead of plain text.
        let token = body.trim().trim_matches('"');
        if token.is_empty() {
            return Err(SystemError::token_refresh("refresh endpoint returned an empty token"));
        }

        debug!(token_len = token.len(), "storing refreshed access token");
        self.tokens.set_access_token(token).await;
        info!("access token refreshed");
        Ok(())
    }
}
