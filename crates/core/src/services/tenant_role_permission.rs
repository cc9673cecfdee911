//! Client for permissions granted to tenant roles

use authz_domain::{Page, PageRequest, Permission, Result, TenantRolePermission};

use super::require_id;
use crate::client::ServiceGateway;
use crate::endpoints::tenant_role_permission as endpoint;

/// Operations on permissions granted to tenant roles
#[derive(Debug, Clone)]
pub struct TenantRolePermissionServiceClient {
    gateway: ServiceGateway,
}

impl TenantRolePermissionServiceClient {
    /// `gateway` must be bound to the role management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(
        &self,
        tenant_role_id: Option<i64>,
        permission_id: Option<i64>,
        page: &PageRequest,
    ) -> Result<Page<TenantRolePermission>> {
        self.gateway.fetch(endpoint::get_all(tenant_role_id, permission_id, page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_tenant_role_permissions(
        &self,
        tenant_role_id: Option<i64>,
        permission_id: Option<i64>,
        is_logical_conjunction: bool,
    ) -> Result<Vec<TenantRolePermission>> {
        let request = endpoint::find(tenant_role_id, permission_id, is_logical_conjunction);
        self.gateway.fetch(request).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_tenant_role_permission_by_id(
        &self,
        id: i64,
    ) -> Result<Option<TenantRolePermission>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn assign_permission(&self, grant: &TenantRolePermission) -> Result<bool> {
        self.gateway.mutate(endpoint::assign(grant)?).await
    }

    /// # Errors
    /// `SystemError::InvalidArgument` when `grant.id` is unset, before any call.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn update(&self, grant: &TenantRolePermission) -> Result<bool> {
        let id = require_id(grant.id, "tenant role permission")?;
        self.gateway.mutate(endpoint::update(id, grant)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn unassign_permission(
        &self,
        tenant_id: i64,
        role_id: i64,
        permission_id: i64,
    ) -> Result<bool> {
        self.gateway.mutate(endpoint::unassign(tenant_id, role_id, permission_id)).await
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
}
