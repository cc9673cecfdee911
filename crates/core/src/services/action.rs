//! Client for the action resource

use authz_domain::{Action, Page, PageRequest, Result, SearchOptions};
use tracing::instrument;

use super::require_id;
use crate::client::ServiceGateway;
use crate::endpoints::action as endpoint;

/// Operations on actions, the verbs a permission pairs with a resource
#[derive(Debug, Clone)]
pub struct ActionServiceClient {
    gateway: ServiceGateway,
}

impl ActionServiceClient {
    /// `gateway` must be bound to the permission management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// One page of actions, optionally filtered by a name fragment
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(&self, search: Option<&str>, page: &PageRequest) -> Result<Page<Action>> {
        self.gateway.fetch(endpoint::get_all(search, page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_action_by_id(&self, id: i64) -> Result<Option<Action>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// Exact-name lookup; absent unless exactly one action matches
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch_single`].
    #[instrument(skip(self))]
    pub async fn get_action_by_name(&self, name: &str) -> Result<Option<Action>> {
        let request = endpoint::find(Some(name), &[], SearchOptions::default());
        self.gateway.fetch_single(request).await
    }

    /// Actions with the given ids; an empty slice makes no call
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_actions_by_ids(&self, ids: &[i64]) -> Result<Vec<Action>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.gateway.fetch(endpoint::find(None, ids, SearchOptions::default())).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn create(&self, action: &Action) -> Result<bool> {
        self.gateway.mutate(endpoint::create(action)?).await
    }

    /// # Errors
    /// `SystemError::InvalidArgument` when `action.id` is unset, before any call.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn update(&self, action: &Action) -> Result<bool> {
        let id = require_id(action.id, "action")?;
        self.gateway.mutate(endpoint::update(id, action)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }
}
