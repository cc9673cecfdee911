//! Client for user assignments to tenant roles

use authz_domain::{Page, PageRequest, Result, Role, Tenant, TenantRoleUser};

use super::require_id;
use crate::client::ServiceGateway;
use crate::endpoints::tenant_role_user as endpoint;

/// Operations on users assigned to tenant roles
#[derive(Debug, Clone)]
pub struct TenantRoleUserServiceClient {
    gateway: ServiceGateway,
}

impl TenantRoleUserServiceClient {
    /// `gateway` must be bound to the role management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(
        &self,
        tenant_role_id: Option<i64>,
        user_id: Option<i64>,
        page: &PageRequest,
    ) -> Result<Page<TenantRoleUser>> {
        self.gateway.fetch(endpoint::get_all(tenant_role_id, user_id, page)).await
    }

    /// Ids of the users holding the role inside the tenant
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_user_ids(
        &self,
        tenant_id: i64,
        role_id: i64,
        page: &PageRequest,
    ) -> Result<Page<i64>> {
        self.gateway.fetch(endpoint::get_user_ids(tenant_id, role_id, page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_tenant_role_users(
        &self,
        tenant_role_id: Option<i64>,
        user_id: Option<i64>,
        is_logical_conjunction: bool,
    ) -> Result<Vec<TenantRoleUser>> {
        let request = endpoint::find(tenant_role_id, user_id, is_logical_conjunction);
        self.gateway.fetch(request).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_tenant_role_user_by_id(&self, id: i64) -> Result<Option<TenantRoleUser>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn assign_user(&self, assignment: &TenantRoleUser) -> Result<bool> {
        self.gateway.mutate(endpoint::assign(assignment)?).await
    }

    /// Only audit fields change; the tenant role and user stay as created.
    ///
    /// # Errors
    /// `SystemError::InvalidArgument` when `assignment.id` is unset, before any call.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn update(&self, assignment: &TenantRoleUser) -> Result<bool> {
        let id = require_id(assignment.id, "tenant role user")?;
        self.gateway.mutate(endpoint::update(id, assignment)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }

    /// Removes the user from each of `role_ids` inside the tenant
    ///
    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn unassign_user(&self, tenant_id: i64, role_ids: &[i64], user_id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::unassign(tenant_id, role_ids, user_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_roles_for_user_tenant(
        &self,
        user_id: i64,
        tenant_id: Option<i64>,
    ) -> Result<Vec<Role>> {
        self.gateway.fetch(endpoint::get_roles(user_id, tenant_id)).await
    }

    /// Tenants the user belongs to, narrowed to one role when given
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_tenants(&self, user_id: i64, role_id: Option<i64>) -> Result<Vec<Tenant>> {
        self.gateway.fetch(endpoint::get_tenants(user_id, role_id)).await
    }
}
