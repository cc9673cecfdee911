//! `action` endpoints of the permission management service

use authz_domain::constants::ACTION_RESOURCE;
use authz_domain::{Action, PageRequest, RemoteError, SearchOptions};

use super::{crud, sub_path, with_search};
use crate::client::RemoteRequest;

pub fn get_all(search: Option<&str>, page: &PageRequest) -> RemoteRequest {
    crud::list(ACTION_RESOURCE, search, page)
}

pub fn find(name: Option<&str>, ids: &[i64], options: SearchOptions) -> RemoteRequest {
    let request = RemoteRequest::get(sub_path(ACTION_RESOURCE, "find"))
        .query_opt("name", name)
        .query_all("ids", ids);
    with_search(request, options)
}

pub fn get_by_id(id: i64) -> RemoteRequest {
    crud::get_by_id(ACTION_RESOURCE, id)
}

pub fn create(action: &Action) -> Result<RemoteRequest, RemoteError> {
    crud::create(ACTION_RESOURCE, action)
}

pub fn update(id: i64, action: &Action) -> Result<RemoteRequest, RemoteError> {
    crud::update(ACTION_RESOURCE, id, action)
}

pub fn delete(id: i64) -> RemoteRequest {
    crud::delete(ACTION_RESOURCE, id)
}
