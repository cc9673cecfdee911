//! `resource` endpoints of the permission management service

use authz_domain::constants::RESOURCE_RESOURCE;
use authz_domain::{PageRequest, RemoteError, Resource, SearchOptions};

use super::{crud, sub_path, with_search};
use crate::client::RemoteRequest;

pub fn get_all(search: Option<&str>, page: &PageRequest) -> RemoteRequest {
    crud::list(RESOURCE_RESOURCE, search, page)
}

pub fn find(name: Option<&str>, ids: &[i64], options: SearchOptions) -> RemoteRequest {
    let request = RemoteRequest::get(sub_path(RESOURCE_RESOURCE, "find"))
        .query_opt("name", name)
        .query_all("ids", ids);
    with_search(request, options)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(RESOURCE_RESOURCE, id)
}

pub fn create(resource: &Resource) -> Result<RemoteRequest, RemoteError> {
    crud::create(RESOURCE_RESOURCE, resource)
}

pub fn update(id: i64, resource: &Resource) -> Result<RemoteRequest, RemoteError> {
    crud::update(RESOURCE_RESOURCE, id, resource)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(RESOURCE_RESOURCE, id)
}
