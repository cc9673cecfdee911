//! `tenantrolepermission` endpoints of the role management service

use authz_domain::constants::TENANT_ROLE_PERMISSION_RESOURCE;
use authz_domain::{PageRequest, RemoteError, TenantRolePermission};

use super::{crud, sub_path, with_page};
use crate::client::RemoteRequest;

pub fn get_all(
    tenant_role_id: Option<i64>,
    permission_id: Option<i64>,
    page: &PageRequest,
) -> RemoteRequest {
    let request = RemoteRequest::get(TENANT_ROLE_PERMISSION_RESOURCE)
        .query_opt("tenantRoleId", tenant_role_id)
        .query_opt("permissionId", permission_id);
    with_page(request, page)
}

pub fn find(
    tenant_role_id: Option<i64>,
    permission_id: Option<i64>,
    is_logical_conjunction: bool,
) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_PERMISSION_RESOURCE, "find"))
        .query_opt("tenantRoleId", tenant_role_id)
        .query_opt("permissionId", permission_id)
        .query("isLogicalConjunction", is_logical_conjunction)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(TENANT_ROLE_PERMISSION_RESOURCE, id)
}

pub fn assign(grant: &TenantRolePermission) -> Result<RemoteRequest, RemoteError> {
    crud::create(TENANT_ROLE_PERMISSION_RESOURCE, grant)
}

pub fn update(id: i64, grant: &TenantRolePermission) -> Result<RemoteRequest, RemoteError> {
    crud::update(TENANT_ROLE_PERMISSION_RESOURCE, id, grant)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(TENANT_ROLE_PERMISSION_RESOURCE, id)
}

pub fn unassign(tenant_id: i64, role_id: i64, permission_id: i64) -> RemoteRequest {
    RemoteRequest::delete(TENANT_ROLE_PERMISSION_RESOURCE)
        .query("tenantId", tenant_id)
        .query("roleId", role_id)
        .query("permissionId", permission_id)
}

pub fn get_permissions(tenant_id: i64, role_id: i64, user_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_PERMISSION_RESOURCE, "permissions"))
        .query("tenantId", tenant_id)
        .query("roleId", role_id)
        .query_opt("userId", user_id)
}
