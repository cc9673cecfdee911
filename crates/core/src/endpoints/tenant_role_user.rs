//! `tenantroleuser` endpoints of the role management service

use authz_domain::constants::TENANT_ROLE_USER_RESOURCE;
use authz_domain::{PageRequest, RemoteError, TenantRoleUser};

use super::{crud, sub_path, with_page, with_page_window};
use crate::client::RemoteRequest;

pub fn get_all(tenant_role_id: Option<i64>, user_id: Option<i64>, page: &PageRequest) -> RemoteRequest {
    let request = RemoteRequest::get(TENANT_ROLE_USER_RESOURCE)
        .query_opt("tenantRoleId", tenant_role_id)
        .query_opt("userId", user_id);
    with_page(request, page)
}

/// Page of user ids holding the role inside the tenant
pub fn get_user_ids(tenant_id: i64, role_id: i64, page: &PageRequest) -> RemoteRequest {
    let request = RemoteRequest::get(sub_path(TENANT_ROLE_USER_RESOURCE, "users/ids"))
        .query("tenantId", tenant_id)
        .query("roleId", role_id);
    with_page_window(request, page)
}

pub fn find(
    tenant_role_id: Option<i64>,
    user_id: Option<i64>,
    is_logical_conjunction: bool,
) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_USER_RESOURCE, "find"))
        .query_opt("tenantRoleId", tenant_role_id)
        .query_opt("userId", user_id)
        .query("isLogicalConjunction", is_logical_conjunction)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(TENANT_ROLE_USER_RESOURCE, id)
}

pub fn assign(assignment: &TenantRoleUser) -> Result<RemoteRequest, RemoteError> {
    crud::create(TENANT_ROLE_USER_RESOURCE, assignment)
}

pub fn update(id: i64, assignment: &TenantRoleUser) -> Result<RemoteRequest, RemoteError> {
    crud::update(TENANT_ROLE_USER_RESOURCE, id, assignment)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(TENANT_ROLE_USER_RESOURCE, id)
}

pub fn unassign(tenant_id: i64, role_ids: &[i64], user_id: i64) -> RemoteRequest {
    RemoteRequest::delete(TENANT_ROLE_USER_RESOURCE)
        .query("tenantId", tenant_id)
        .query_all("roleIds", role_ids)
        .query("userId", user_id)
}

pub fn get_roles(user_id: i64, tenant_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_USER_RESOURCE, "roles"))
        .query("userId", user_id)
        .query_opt("tenantId", tenant_id)
}

pub fn get_tenants(user_id: i64, role_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(TENANT_ROLE_USER_RESOURCE, "tenants"))
        .query("userId", user_id)
        .query_opt("roleId", role_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassign_repeats_role_ids() {
        let request = unassign(4, &[1, 2, 3], 8);
        assert_eq!(request.path, "tenantroleuser");
        assert_eq!(request.query_values("roleIds"), ["1", "2", "3"]);
        assert_eq!(request.query_value("userId"), Some("8"));
    }

    #[test]
    fn tenants_of_a_user_filter_by_optional_role() {
        let request = get_tenants(8, Some(3));
        assert_eq!(request.path, "tenantroleuser/tenants");
        assert_eq!(request.query_value("userId"), Some("8"));
        assert_eq!(request.query_value("roleId"), Some("3"));
    }
}
