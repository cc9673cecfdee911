//! Wiring of every service client from one configuration

use std::sync::Arc;

use authz_core::{
    ActionServiceClient, LinkedAuthorizationServiceClient, PermissionServiceClient,
    ResourceClientFactory, ResourceServiceClient, RoleServiceClient, ServiceGateway,
    TenantRolePermissionServiceClient, TenantRoleServiceClient, TenantRoleUserServiceClient,
    TokenRefresher,
};
use authz_domain::{Config, EndpointConfig, Result};
use tracing::info;

use super::auth::{TokenHolder, UserTokenRefresher};
use super::client::HttpResourceClientFactory;
use crate::http::HttpClient;

/// All service clients, bound to their management services
///
/// Actions, permissions and resources talk to the permission management
/// service; everything role related talks to the role management service.
#[derive(Debug, Clone)]
pub struct AuthzClients {
    pub actions: ActionServiceClient,
    pub permissions: PermissionServiceClient,
    pub resources: ResourceServiceClient,
    pub roles: RoleServiceClient,
    pub tenant_roles: TenantRoleServiceClient,
    pub tenant_role_users: TenantRoleUserServiceClient,
    pub tenant_role_permissions: TenantRolePermissionServiceClient,
    pub linked_authorizations: LinkedAuthorizationServiceClient,
}

impl AuthzClients {
    /// Build the HTTP stack and every client from `config`
    ///
    /// Service base URLs are validated lazily on each call; only the user
    /// management URL is parsed here.
    ///
    /// # Errors
    /// Returns `SystemError::Config` if the HTTP client cannot be built or the
    /// user management URL is malformed.
    pub fn from_config(config: &Config, tokens: Arc<TokenHolder>) -> Result<Self> {
        let http = HttpClient::from_config(&config.http)?;

        let refresher: Arc<dyn TokenRefresher> = Arc::new(UserTokenRefresher::new(
            http.clone(),
            &config.endpoints.user_management,
            Arc::clone(&tokens),
        )?);
        let factory: Arc<dyn ResourceClientFactory> =
            Arc::new(HttpResourceClientFactory::new(http, tokens));

        info!(
            permission_management = %config.endpoints.permission_management,
            role_management = %config.endpoints.role_management,
            "authorization service clients configured"
        );

        Ok(Self::with_ports(&config.endpoints, factory, refresher))
    }

    /// Build every client on caller-supplied transport collaborators
    pub fn with_ports(
        endpoints: &EndpointConfig,
        factory: Arc<dyn ResourceClientFactory>,
        refresher: Arc<dyn TokenRefresher>,
    ) -> Self {
        let permission_management = ServiceGateway::new(
            endpoints.permission_management.clone(),
            Arc::clone(&factory),
            Arc::clone(&refresher),
        );
        let role_management =
            ServiceGateway::new(endpoints.role_management.clone(), factory, refresher);

        Self {
            actions: ActionServiceClient::new(permission_management.clone()),
            permissions: PermissionServiceClient::new(permission_management.clone()),
            resources: ResourceServiceClient::new(permission_management),
            roles: RoleServiceClient::new(role_management.clone()),
            tenant_roles: TenantRoleServiceClient::new(role_management.clone()),
            tenant_role_users: TenantRoleUserServiceClient::new(role_management.clone()),
            tenant_role_permissions: TenantRolePermissionServiceClient::new(role_management.clone()),
            linked_authorizations: LinkedAuthorizationServiceClient::new(role_management),
        }
    }
}
