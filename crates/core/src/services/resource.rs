//! Client for the resource resource

use authz_domain::{Page, PageRequest, Resource, Result, SearchOptions};

use super::require_id;
use crate::client::ServiceGateway;
use crate::endpoints::resource as endpoint;

/// Operations on resources, the objects a permission protects
#[derive(Debug, Clone)]
pub struct ResourceServiceClient {
    gateway: ServiceGateway,
}

impl ResourceServiceClient {
    /// `gateway` must be bound to the permission management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// One page of resources, optionally filtered by a name fragment
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(&self, search: Option<&str>, page: &PageRequest) -> Result<Page<Resource>> {
        self.gateway.fetch(endpoint::get_all(search, page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_resource_by_id(&self, id: i64) -> Result<Option<Resource>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// Exact-name lookup; absent unless exactly one resource matches
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch_single`].
    pub async fn get_resource_by_name(&self, name: &str) -> Result<Option<Resource>> {
        let request = endpoint::find(Some(name), &[], SearchOptions::default());
        self.gateway.fetch_single(request).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`]. An empty slice returns an empty list without calling.
    pub async fn get_resources_by_ids(&self, ids: &[i64]) -> Result<Vec<Resource>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.gateway.fetch(endpoint::find(None, ids, SearchOptions::default())).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn create(&self, resource: &Resource) -> Result<bool> {
        self.gateway.mutate(endpoint::create(resource)?).await
    }

    /// # Errors
    /// `SystemError::InvalidArgument` when `resource.id` is unset, before any call.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn update(&self, resource: &Resource) -> Result<bool> {
        let id = require_id(resource.id, "resource")?;
        self.gateway.mutate(endpoint::update(id, resource)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }
}
