//! `role` endpoints of the role management service

use authz_domain::constants::ROLE_RESOURCE;
use authz_domain::{PageRequest, RemoteError, Role, RoleFilter};

use super::{crud, sub_path, with_search};
use crate::client::RemoteRequest;

pub fn get_all(search: Option<&str>, page: &PageRequest) -> RemoteRequest {
    crud::list(ROLE_RESOURCE, search, page)
}

pub fn find(filter: &RoleFilter) -> RemoteRequest {
    let request = RemoteRequest::get(sub_path(ROLE_RESOURCE, "find"))
        .query_opt("name", filter.name.as_deref())
        .query_opt("description", filter.description.as_deref())
        .query_all("ids", &filter.ids);
    with_search(request, filter.options)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(ROLE_RESOURCE, id)
}

pub fn count() -> RemoteRequest {
    crud::count(ROLE_RESOURCE)
}

pub fn create(role: &Role) -> Result<RemoteRequest, RemoteError> {
    crud::create(ROLE_RESOURCE, role)
}

pub fn update(id: i64, role: &Role) -> Result<RemoteRequest, RemoteError> {
    crud::update(ROLE_RESOURCE, id, role)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(ROLE_RESOURCE, id)
}
