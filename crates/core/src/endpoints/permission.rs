//! `permission` endpoints of the permission management service

use authz_domain::constants::PERMISSION_RESOURCE;
use authz_domain::{PageRequest, Permission, PermissionFilter, RemoteError};

use super::{crud, sub_path, with_search};
use crate::client::RemoteRequest;

pub fn get_all(search: Option<&str>, page: &PageRequest) -> RemoteRequest {
    crud::list(PERMISSION_RESOURCE, search, page)
}

pub fn find(filter: &PermissionFilter) -> RemoteRequest {
    let request = RemoteRequest::get(sub_path(PERMISSION_RESOURCE, "find"))
        .query_opt("name", filter.name.as_deref())
        .query_opt("action", filter.action_id)
        .query_opt("resource", filter.resource_id)
        .query_all("ids", &filter.ids);
    with_search(request, filter.options)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(PERMISSION_RESOURCE, id)
}

/// Id of the permission granting `action` over `resource`, both by name
pub fn get_id_by_resource_and_action(resource: &str, action: &str) -> RemoteRequest {
    RemoteRequest::get(sub_path(PERMISSION_RESOURCE, "id"))
        .query("resource", resource)
        .query("action", action)
}

pub fn exists(id: Option<i64>, name: Option<&str>) -> RemoteRequest {
    RemoteRequest::get(sub_path(PERMISSION_RESOURCE, "exists"))
        .query_opt("id", id)
        .query_opt("name", name)
}

pub fn count() -> RemoteRequest {
    crud::count(PERMISSION_RESOURCE)
}

pub fn create(permission: &Permission) -> Result<RemoteRequest, RemoteError> {
    crud::create(PERMISSION_RESOURCE, permission)
}

pub fn update(id: i64, permission: &Permission) -> Result<RemoteRequest, RemoteError> {
    crud::update(PERMISSION_RESOURCE, id, permission)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(PERMISSION_RESOURCE, id)
}

#[cfg(test)]
mod tests {
    use authz_domain::SearchOptions;

    use super::*;

    #[test]
    fn find_sends_only_present_criteria() {
        let filter = PermissionFilter {
            action_id: Some(3),
            options: SearchOptions::loose(),
            ..PermissionFilter::default()
        };

        let request = find(&filter);

        assert_eq!(request.path, "permission/find");
        assert_eq!(request.query_value("action"), Some("3"));
        assert_eq!(request.query_value("name"), None);
        assert_eq!(request.query_value("isExact"), Some("false"));
    }

    #[test]
    fn id_lookup_uses_resource_and_action_names() {
        let request = get_id_by_resource_and_action("invoice", "add");
        assert_eq!(request.path, "permission/id");
        assert_eq!(request.query, vec![
            ("resource".to_string(), "invoice".to_string()),
            ("action".to_string(), "add".to_string()),
        ]);
    }
}
