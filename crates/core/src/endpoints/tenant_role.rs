//! `tenantrole` endpoints of the role management service

use authz_domain::constants::TENANT_ROLE_RESOURCE;
use authz_domain::{PageRequest, RemoteError, TenantRole};

use super::{crud, sub_path, with_page_window};
use crate::client::RemoteRequest;

pub fn get_all(page: &PageRequest) -> RemoteRequest {
    with_page_window(RemoteRequest::get(TENANT_ROLE_RESOURCE), page)
}

pub fn find(
    tenant_id: Option<i64>,
    role_id: Option<i64>,
    is_logical_conjunction: bool,
) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_RESOURCE, "find"))
        .query_opt("tenantId", tenant_id)
        .query_opt("roleId", role_id)
        .query("isLogicalConjunction", is_logical_conjunction)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(TENANT_ROLE_RESOURCE, id)
}

pub fn save(tenant_role: &TenantRole) -> Result<RemoteRequest, RemoteError> {
    crud::create(TENANT_ROLE_RESOURCE, tenant_role)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(TENANT_ROLE_RESOURCE, id)
}

pub fn exists(tenant_id: i64, role_id: i64) -> RemoteRequest {
    RemoteRequest::get(format!("{TENANT_ROLE_RESOURCE}/exists/{tenant_id}/{role_id}"))
}

pub fn get_id(tenant_id: i64, role_id: i64) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_RESOURCE, "id"))
        .query("tenantId", tenant_id)
        .query("roleId", role_id)
}

pub fn get_permissions(tenant_id: i64, role_id: i64, user_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(format!("{TENANT_ROLE_RESOURCE}/permissions/tenant/{tenant_id}/role/{role_id}"))
        .query_opt("userId", user_id)
}

/// Tenants in which the user holds any role, or `role_id` when given
pub fn get_tenants(user_id: i64, role_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(format!("{TENANT_ROLE_RESOURCE}/tenants/user/{user_id}"))
        .query_opt("roleId", role_id)
}

pub fn get_roles(user_id: i64, tenant_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_RESOURCE, "roles"))
        .query("userId", user_id)
        .query_opt("tenantId", tenant_id)
}

pub fn role_exists_for_user(user_id: i64, role_name: &str, tenant_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_RESOURCE, "exists/role"))
        .query("userId", user_id)
        .query("roleName", role_name)
        .query_opt("tenantId", tenant_id)
}

pub fn permission_exists_for_user(
    user_id: i64,
    permission_id: i64,
    tenant_id: Option<i64>,
) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_RESOURCE, "exists/permission"))
        .query("userId", user_id)
        .query("permissionId", permission_id)
        .query_opt("tenantId", tenant_id)
}

fn user_assignment_path(tenant_id: i64, role_id: i64, user_id: i64) -> String {
    format!("{TENANT_ROLE_RESOURCE}/tenant/{tenant_id}/role/{role_id}/user/{user_id}")
}

fn permission_assignment_path(tenant_id: i64, role_id: i64, permission_id: i64) -> String {
    format!("{TENANT_ROLE_RESOURCE}/tenant/{tenant_id}/role/{role_id}/permission/{permission_id}")
}

pub fn assign_user(tenant_id: i64, role_id: i64, user_id: i64) -> RemoteRequest {
    RemoteRequest::post(user_assignment_path(tenant_id, role_id, user_id))
}

pub fn unassign_user(tenant_id: i64, role_id: i64, user_id: i64) -> RemoteRequest {
    RemoteRequest::delete(user_assignment_path(tenant_id, role_id, user_id))
}

pub fn assign_permission(tenant_id: i64, role_id: i64, permission_id: i64) -> RemoteRequest {
    RemoteRequest::post(permission_assignment_path(tenant_id, role_id, permission_id))
}

pub fn unassign_permission(tenant_id: i64, role_id: i64, permission_id: i64) -> RemoteRequest {
    RemoteRequest::delete(permission_assignment_path(tenant_id, role_id, permission_id))
}
