//! `linkedauthorization` endpoints of the role management service

use authz_domain::constants::LINKED_AUTHORIZATION_RESOURCE;
use authz_domain::{LinkedAuthorization, LinkedAuthorizationFilter, PageRequest, RemoteError};

use super::{crud, sub_path, with_page_window};
use crate::client::RemoteRequest;

fn with_filter(request: RemoteRequest, filter: &LinkedAuthorizationFilter) -> RemoteRequest {
    request
        .query_opt("tenantId", filter.tenant_id)
        .query_opt("permissionId", filter.permission_id)
        .query_opt("roleId", filter.role_id)
        .query_opt("userId", filter.user_id)
        .query("isLogicalConjunction", filter.is_logical_conjunction)
}

pub fn get_all(page: &PageRequest) -> RemoteRequest {
    with_page_window(RemoteRequest::get(LINKED_AUTHORIZATION_RESOURCE), page)
}

pub fn find(filter: &LinkedAuthorizationFilter) -> RemoteRequest {
    with_filter(RemoteRequest::get(sub_path(LINKED_AUTHORIZATION_RESOURCE, "find")), filter)
}

pub fn exists(filter: &LinkedAuthorizationFilter) -> RemoteRequest {
    with_filter(RemoteRequest::get(sub_path(LINKED_AUTHORIZATION_RESOURCE, "exists")), filter)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(LINKED_AUTHORIZATION_RESOURCE, id)
}

pub fn save(association: &LinkedAuthorization) -> Result<RemoteRequest, RemoteError> {
    crud::create(LINKED_AUTHORIZATION_RESOURCE, association)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(LINKED_AUTHORIZATION_RESOURCE, id)
}

/// Removes every association of the user inside the tenant
pub fn delete_associations(tenant_id: i64, user_id: i64) -> RemoteRequest {
    RemoteRequest::delete(LINKED_AUTHORIZATION_RESOURCE)
        .query("tenantId", tenant_id)
        .query("userId", user_id)
}

pub fn count() -> RemoteRequest {
    crud::count(LINKED_AUTHORIZATION_RESOURCE)
}

pub fn get_roles(user_id: i64, tenant_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(LINKED_AUTHORIZATION_RESOURCE, "roles"))
        .query("userId", user_id)
        .query_opt("tenantId", tenant_id)
}

pub fn role_exists_for_user(user_id: i64, role_name: &str, tenant_id: Option<i64>) -> RemoteRequest {
    RemoteRequest::get(sub_path(LINKED_AUTHORIZATION_RESOURCE, "exists/role"))
        .query("userId", user_id)
        .query("roleName", role_name)
        .query_opt("tenantId", tenant_id)
}

pub fn check_permissions<S: AsRef<str>>(
    user_id: i64,
    role_names: &[S],
    tenant_id: Option<i64>,
) -> RemoteRequest {
    RemoteRequest::get(sub_path(LINKED_AUTHORIZATION_RESOURCE, "exists/permissions"))
        .query("userId", user_id)
        .query_all("roleNames", role_names.iter().map(|name| name.as_ref()))
        .query_opt("tenantId", tenant_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_omits_absent_links() {
        let request = find(&LinkedAuthorizationFilter::default().role(5));

        assert_eq!(request.query_value("roleId"), Some("5"));
        assert_eq!(request.query_value("tenantId"), None);
        assert_eq!(request.query_value("isLogicalConjunction"), Some("false"));
    }

    #[test]
    fn check_permissions_repeats_role_names() {
        let request = check_permissions(1, &["admin", "auditor"], Some(2));
        assert_eq!(request.path, "linkedauthorization/exists/permissions");
        assert_eq!(request.query_values("roleNames"), ["admin", "auditor"]);
    }
}
