//! Client for linked authorizations

use authz_domain::{
    LinkedAuthorization, LinkedAuthorizationFilter, Page, PageRequest, Result, Role,
};
use tracing::instrument;

use crate::client::ServiceGateway;
use crate::endpoints::linked_authorization as endpoint;

/// Operations on linked authorizations, the user, tenant and role associations
#[derive(Debug, Clone)]
pub struct LinkedAuthorizationServiceClient {
    gateway: ServiceGateway,
}

impl LinkedAuthorizationServiceClient {
    /// `gateway` must be bound to the role management service.
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_all(&self, page: &PageRequest) -> Result<Page<LinkedAuthorization>> {
        self.gateway.fetch(endpoint::get_all(page)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch_optional`].
    pub async fn get_linked_authorization_by_id(
        &self,
        id: i64,
    ) -> Result<Option<LinkedAuthorization>> {
        self.gateway.fetch_optional(endpoint::get_by_id(id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_linked_authorizations(
        &self,
        filter: &LinkedAuthorizationFilter,
    ) -> Result<Vec<LinkedAuthorization>> {
        self.gateway.fetch(endpoint::find(filter)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_linked_authorizations_by_role_id(
        &self,
        role_id: i64,
    ) -> Result<Vec<LinkedAuthorization>> {
        let filter = LinkedAuthorizationFilter::default().role(role_id);
        self.gateway.fetch(endpoint::find(&filter)).await
    }

    /// # Errors
    /// `SystemError::Serialization` when the body cannot be encoded.
    /// Otherwise as [`ServiceGateway::mutate`].
    pub async fn create(&self, association: &LinkedAuthorization) -> Result<bool> {
        self.gateway.mutate(endpoint::save(association)?).await
    }

    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete(id)).await
    }

    /// Removes every association of the user inside the tenant
    ///
    /// # Errors
    /// As [`ServiceGateway::mutate`].
    pub async fn delete_associations(&self, tenant_id: i64, user_id: i64) -> Result<bool> {
        self.gateway.mutate(endpoint::delete_associations(tenant_id, user_id)).await
    }

    /// Not found on the remote side means no such association
    ///
    /// # Errors
    /// As [`ServiceGateway::exists`].
    pub async fn check_if_linked_authorization_exists(
        &self,
        filter: &LinkedAuthorizationFilter,
    ) -> Result<bool> {
        self.gateway.exists(endpoint::exists(filter)).await
    }

    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_total_records_count(&self) -> Result<i64> {
        self.gateway.fetch(endpoint::count()).await
    }

    /// Roles the user holds, across tenants unless `tenant_id` is given
    ///
    /// # Errors
    /// As [`ServiceGateway::fetch`].
    pub async fn get_roles_by_user_and_tenant(
        &self,
        user_id: i64,
        tenant_id: Option<i64>,
    ) -> Result<Vec<Role>> {
        self.gateway.fetch(endpoint::get_roles(user_id, tenant_id)).await
    }

    /// # Errors
    /// As [`ServiceGateway::exists`].
    #[instrument(skip(self))]
    pub async fn is_role_existent_for_user(
        &self,
        user_id: i64,
        role_name: &str,
        tenant_id: Option<i64>,
    ) -> Result<bool> {
        self.gateway.exists(endpoint::role_exists_for_user(user_id, role_name, tenant_id)).await
    }

    /// Whether the user holds any of `role_names` inside the tenant
    ///
    /// # Errors
    /// As [`ServiceGateway::exists`].
    pub async fn check_permissions<S>(
        &self,
        user_id: i64,
        role_names: &[S],
        tenant_id: Option<i64>,
    ) -> Result<bool>
    where
        S: AsRef<str> + Sync,
    {
        self.gateway.exists(endpoint::check_permissions(user_id, role_names, tenant_id)).await
    }
}
