//! Port interfaces for talking to the remote authorization services
//!
//! These traits are the boundary between the service clients and whatever
//! transport performs the calls. Infrastructure provides the HTTP versions;
//! tests provide scripted ones.

use std::sync::Arc;

use async_trait::async_trait;
use authz_domain::{RemoteError, Result};

use super::request::{RemoteRequest, RemoteResponse};

/// Performs single remote calls against one bound base URL
///
/// Implementations attach the current credentials to every call and map the
/// statuses 400, 401, 404 and 500 onto [`RemoteError`]. Any other status is
/// returned as a [`RemoteResponse`].
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn execute(
        &self,
        request: RemoteRequest,
    ) -> std::result::Result<RemoteResponse, RemoteError>;
}

/// Builds resource clients bound to a base URL
pub trait ResourceClientFactory: Send + Sync {
    /// # Errors
    /// Returns `SystemError::Config` for a malformed base URL.
    fn resource_client(&self, base_url: &str) -> Result<Arc<dyn ResourceClient>>;
}

/// Obtains a fresh access token after the remote reported expiry
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// # Errors
    /// Returns `SystemError::TokenRefresh` when no new token could be obtained.
    async fn refresh_token(&self) -> Result<()>;
}

/// Source of the bearer token attached to outgoing calls
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, `None` when the caller is anonymous
    async fn access_token(&self) -> Option<String>;
}
