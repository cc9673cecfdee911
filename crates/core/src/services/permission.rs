//! Client for the permission resource

use authz_domain::{Page, PageRequest, Permission, PermissionFilter, Result};
use tracing::instrument;

use super::require_id;
use crate::client::ServiceGateway;
use crate::endpoints::permission as endpoint;

/// Operations on permissions, each an action over a resource
#[derive(Debug, Clone)]
pub struct PermissionServiceClient {
    gateway: ServiceGateway,
}

impl PermissionServiceClient {
    /// `gateway` must be bound to the permission management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// One page of permissions
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<Page<Permission>> {
        self.gateway.fetch(endpoint::get_all(search, page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_permission_by_id(&self, id: i64) -> Result<Option<Permission>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// Exact-name lookup; absent unless exactly one permission matches
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch_single`].
    pub async fn get_permission_by_name(&self, name: &str) -> Result<Option<Permission>> {
        let filter = PermissionFilter { name: Some(name.to_string()), ..PermissionFilter::default() };
        self.gateway.fetch_single(endpoint::find(&filter)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_permissions(&self, filter: &PermissionFilter) -> Result<Vec<Permission>> {
        self.gateway.fetch(endpoint::find(filter)).await
    }

    /// Id of the permission for an action over a resource, both given by name
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    #[instrument(skip(self))]
    pub async fn get_permission_id(&self, resource: &str, action: &str) -> Result<Option<i64>> {
        let request = endpoint::get_id_by_resource_and_action(resource, action);
        self.gateway.fetch_optional(request).await
    }

    /// Whether a permission matches `id` or `name`, whichever are given
    ///
    /// # Errors
    /// As [`ServiceGateway::exists`].
    pub async fn exists(&self, id: Option<i64>, name: Option<&str>) -> Result<bool> {
        self.gateway.exists(endpoint::exists(id, name)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_total_records_count(&self) -> Result<i64> {
        self.gateway.fetch(endpoint::count()).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn create(&self, permission: &Permission) -> Result<bool> {
        self.gateway.mutate(endpoint::create(permission)?).await
    }

    /// # Errors
    /// `SystemError::InvalidArgument` when `permission.id` is unset, before any call.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn update(&self, permission: &Permission) -> Result<bool> {
        let id = require_id(permission.id, "permission")?;
        self.gateway.mutate(endpoint::update(id, permission)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }
}
