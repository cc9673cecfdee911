//! Client for tenant roles and the memberships hanging off them

use authz_domain::{Page, PageRequest, Permission, Result, Role, Tenant, TenantRole};
use tracing::instrument;

use crate::client::ServiceGateway;
use crate::endpoints::tenant_role as endpoint;

/// Operations on tenant roles and their user and permission assignments
#[derive(Debug, Clone)]
pub struct TenantRoleServiceClient {
    gateway: ServiceGateway,
}

impl TenantRoleServiceClient {
    /// `gateway` must be bound to the role management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(&self, page: &PageRequest) -> Result<Page<TenantRole>> {
        self.gateway.fetch(endpoint::get_all(page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_tenant_role_by_id(&self, id: i64) -> Result<Option<TenantRole>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// Tenant roles matching both ids, or either when `is_logical_conjunction` is false
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_tenant_roles(
        &self,
        tenant_id: Option<i64>,
        role_id: Option<i64>,
        is_logical_conjunction: bool,
    ) -> Result<Vec<TenantRole>> {
        self.gateway.fetch(endpoint::find(tenant_id, role_id, is_logical_conjunction)).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn save(&self, tenant_role: &TenantRole) -> Result<bool> {
        self.gateway.mutate(endpoint::save(tenant_role)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::exists`].
    pub async fn exists(&self, tenant_id: i64, role_id: i64) -> Result<bool> {
        self.gateway.exists(endpoint::exists(tenant_id, role_id)).await
    }

    /// Id of the tenant role linking `tenant_id` and `role_id`
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_tenant_role_id(&self, tenant_id: i64, role_id: i64) -> Result<Option<i64>> {
        self.gateway.fetch_optional(endpoint::get_id(tenant_id, role_id)).await
    }

    /// Permissions of the tenant role, optionally narrowed to one member
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_permissions(
        &self,
        tenant_id: i64,
        role_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Permission>> {
        self.gateway.fetch(endpoint::get_permissions(tenant_id, role_id, user_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_roles(&self, user_id: i64, tenant_id: Option<i64>) -> Result<Vec<Role>> {
        self.gateway.fetch(endpoint::get_roles(user_id, tenant_id)).await
    }

    /// Tenants the user belongs to, narrowed to one role when given
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_tenants(&self, user_id: i64, role_id: Option<i64>) -> Result<Vec<Tenant>> {
        self.gateway.fetch(endpoint::get_tenants(user_id, role_id)).await
    }

    /// Whether the user holds the role named `role_name`
    ///
    /// # Errors
    /// As [`ServiceGateway::exists`].
    #[instrument(skip(self))]
    pub async fn is_role_existent_for_user(
        &self,
        user_id: i64,
        role_name: &str,
        tenant_id: Option<i64>,
    ) -> Result<bool> {
        self.gateway.exists(endpoint::role_exists_for_user(user_id, role_name, tenant_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::exists`].
    pub async fn is_permission_existent_for_user(
        &self,
        user_id: i64,
        permission_id: i64,
        tenant_id: Option<i64>,
    ) -> Result<bool> {
        let request = endpoint::permission_exists_for_user(user_id, permission_id, tenant_id);
        self.gateway.exists(request).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn assign_user(&self, tenant_id: i64, role_id: i64, user_id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::assign_user(tenant_id, role_id, user_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn unassign_user(&self, tenant_id: i64, role_id: i64, user_id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::unassign_user(tenant_id, role_id, user_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn assign_permission(
        &self,
        tenant_id: i64,
        role_id: i64,
        permission_id: i64,
    ) -> Result<bool> {
        self.gateway.mutate(endpoint::assign_permission(tenant_id, role_id, permission_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn unassign_permission(
        &self,
        tenant_id: i64,
        role_id: i64,
        permission_id: i64,
    ) -> Result<bool> {
        self.gateway.mutate(endpoint::unassign_permission(tenant_id, role_id, permission_id)).await
    }
}
