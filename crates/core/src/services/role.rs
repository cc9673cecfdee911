//! Client for the role resource

use authz_domain::{Page, PageRequest, Result, Role, RoleFilter, SearchOptions};

use super::require_id;
use crate::client::ServiceGateway;
use crate::endpoints::role as endpoint;

/// Operations on roles
#[derive(Debug, Clone)]
pub struct RoleServiceClient {
    gateway: ServiceGateway,
}

impl RoleServiceClient {
    /// `gateway` must be bound to the role management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// One page of roles, optionally filtered by a name fragment
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(&self, search: Option<&str>, page: &PageRequest) -> Result<Page<Role>> {
        self.gateway.fetch(endpoint::get_all(search, page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_role_by_id(&self, id: i64) -> Result<Option<Role>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// Exact-name lookup; absent unless exactly one role matches
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch_single`].
    pub async fn get_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let filter = RoleFilter { name: Some(name.to_string()), ..RoleFilter::default() };
        self.gateway.fetch_single(endpoint::find(&filter)).await
    }

    /// Partial description match, any role whose description contains `description`
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_roles_by_description(&self, description: &str) -> Result<Vec<Role>> {
        let filter = RoleFilter {
            description: Some(description.to_string()),
            options: SearchOptions::loose(),
            ..RoleFilter::default()
        };
        self.gateway.fetch(endpoint::find(&filter)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`]. An empty slice returns an empty list without calling.
    pub async fn get_roles_by_ids(&self, ids: &[i64]) -> Result<Vec<Role>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let filter = RoleFilter { ids: ids.to_vec(), ..RoleFilter::default() };
        self.gateway.fetch(endpoint::find(&filter)).await
    }

    /// Roles matching every criterion set on `filter`
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_roles(&self, filter: &RoleFilter) -> Result<Vec<Role>> {
        self.gateway.fetch(endpoint::find(filter)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_total_records_count(&self) -> Result<i64> {
        self.gateway.fetch(endpoint::count()).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn create(&self, role: &Role) -> Result<bool> {
        self.gateway.mutate(endpoint::create(role)?).await
    }

    /// # Errors
    /// `SystemError::InvalidArgument` when `role.id` is unset, before any call.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn update(&self, role: &Role) -> Result<bool> {
        let id = require_id(role.id, "role")?;
        self.gateway.mutate(endpoint::update(id, role)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }
}
