//! Shared execution path of every service client operation

use std::fmt;
use std::sync::Arc;

use authz_domain::{RemoteError, Result};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::outcome::{self, Attempt};
use super::ports::{ResourceClientFactory, TokenRefresher};
use super::request::RemoteRequest;
use super::retry::execute_with_retry;

/// Binds one remote service base URL to its collaborators
///
/// Every call builds a resource client through the factory, then runs the
/// request under the token-expiry retry with the given result shape.
#[derive(Clone)]
pub struct ServiceGateway {
    base_url: String,
    factory: Arc<dyn ResourceClientFactory>,
    refresher: Arc<dyn TokenRefresher>,
}

impl ServiceGateway {
    /// Gateway for the service rooted at `base_url`
    ///
    /// The URL is only validated when the first call builds its resource
    /// client.
    pub fn new(
        base_url: impl Into<String>,
        factory: Arc<dyn ResourceClientFactory>,
        refresher: Arc<dyn TokenRefresher>,
    ) -> Self {
        Self { base_url: base_url.into(), factory, refresher }
    }

    /// Base URL every request path is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs `request` and classifies each attempt with `shape`
    ///
    /// # Errors
    /// `SystemError::Config` when the base URL is malformed, otherwise
    /// whatever the retry escalates.
    #[instrument(
        skip(self, request, shape),
        fields(base_url = %self.base_url, method = %request.method, path = %request.path)
    )]
    pub async fn execute<T, F>(&self, request: RemoteRequest, shape: F) -> Result<T>
    where
        F: Fn(Attempt) -> std::result::Result<T, RemoteError> + Send + Sync,
        T: Send,
    {
        let client = self.factory.resource_client(&self.base_url)?;
        let shape = &shape;

        execute_with_retry(self.refresher.as_ref(), || {
            let client = Arc::clone(&client);
            let request = request.clone();
            async move { shape(client.execute(request).await) }
        })
        .await
    }

    /// Decodes the 2xx body as `T`
    ///
    /// # Errors
    /// Any classified remote failure, including not found, plus
    /// `RemoteError::Processing` when the body does not decode, surfaced as
    /// `SystemError::Remote`. Token failures follow [`Self::execute`].
    pub async fn fetch<T>(&self, request: RemoteRequest) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.execute(request, outcome::decode::<T>).await
    }

    /// Decodes a list body, `Some` only when it holds exactly one element
    ///
    /// # Errors
    /// Same as [`Self::fetch`].
    pub async fn fetch_single<T>(&self, request: RemoteRequest) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.execute(request, outcome::single_or_absent::<T>).await
    }

    /// Decodes the body as `T`, with not found mapped to `None`
    ///
    /// # Errors
    /// Same as [`Self::fetch`] except for not found.
    pub async fn fetch_optional<T>(&self, request: RemoteRequest) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.execute(request, outcome::absent_on_not_found::<T>).await
    }

    /// Writes where any 2xx is `true` and an unmapped status is `false`
    ///
    /// # Errors
    /// Statuses that classify (400, 401, 404, 500) still fail, as do the
    /// token failures of [`Self::execute`].
    pub async fn mutate(&self, request: RemoteRequest) -> Result<bool> {
        self.execute(request, outcome::mutation).await
    }

    /// Existence check where not found is `false`
    ///
    /// A 2xx answers with its boolean body, or `true` when the body is empty.
    ///
    /// # Errors
    /// Classified failures other than not found, and the token failures of
    /// [`Self::execute`].
    pub async fn exists(&self, request: RemoteRequest) -> Result<bool> {
        self.execute(request, outcome::existence).await
    }
}

impl fmt::Debug for ServiceGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceGateway").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}
