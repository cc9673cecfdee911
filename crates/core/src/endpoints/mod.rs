//! Declarative description of the remote endpoints
//!
//! Each submodule builds the [`RemoteRequest`] for one entity family. Paths
//! are relative to the owning service base URL; query parameter names and
//! defaults follow the remote services.

pub mod action;
pub mod linked_authorization;
pub mod permission;
pub mod resource;
pub mod role;
pub mod tenant_role;
pub mod tenant_role_permission;
pub mod tenant_role_user;

use authz_domain::{PageRequest, RemoteError, SearchOptions};
use serde::Serialize;

use crate::client::RemoteRequest;

pub(crate) fn item_path(resource: &str, id: i64) -> String {
    format!("{resource}/{id}")
}

pub(crate) fn sub_path(resource: &str, segment: &str) -> String {
    format!("{resource}/{segment}")
}

pub(crate) fn with_page(request: RemoteRequest, page: &PageRequest) -> RemoteRequest {
    request
        .query("pageNo", page.page_no)
        .query("pageSize", page.page_size)
        .query_all("sortBy", &page.sort_by)
        .query("asc", page.is_ascending)
}

/// Page number and size only, for endpoints without sorting
pub(crate) fn with_page_window(request: RemoteRequest, page: &PageRequest) -> RemoteRequest {
    request.query("pageNo", page.page_no).query("pageSize", page.page_size)
}

pub(crate) fn with_search(request: RemoteRequest, options: SearchOptions) -> RemoteRequest {
    request
        .query("isExact", options.is_exact)
        .query("isLogicalConjunction", options.is_logical_conjunction)
}

pub(crate) fn with_body<T: Serialize>(
    request: RemoteRequest,
    entity: &T,
) -> Result<RemoteRequest, RemoteError> {
    Ok(request.json(serde_json::to_value(entity)?))
}

/// Standard list / by-id / create / update / delete set shared by most
/// resources
pub(crate) mod crud {
    use authz_domain::{PageRequest, RemoteError};
    use serde::Serialize;

    use super::{item_path, with_body, with_page};
    use crate::client::RemoteRequest;

    pub fn list(resource: &str, search: Option<&str>, page: &PageRequest) -> RemoteRequest {
        with_page(RemoteRequest::get(resource).query_opt("search", search), page)
    }

    pub fn get_by_id(resource: &str, id: i64) -> RemoteRequest {
        RemoteRequest::get(item_path(resource, id))
    }

    pub fn create<T: Serialize>(resource: &str, entity: &T) -> Result<RemoteRequest, RemoteError> {
        with_body(RemoteRequest::post(resource), entity)
    }

    pub fn update<T: Serialize>(
        resource: &str,
        id: i64,
        entity: &T,
    ) -> Result<RemoteRequest, RemoteError> {
        with_body(RemoteRequest::put(item_path(resource, id)), entity)
    }

    pub fn delete(resource: &str, id: i64) -> RemoteRequest {
        RemoteRequest::delete(item_path(resource, id))
    }

    pub fn count(resource: &str) -> RemoteRequest {
        RemoteRequest::get(super::sub_path(resource, "count"))
    }
}
