//! Service clients, one per entity family
//!
//! Every operation is a thin wrapper: build the endpoint request, then hand
//! it to the [`ServiceGateway`](crate::client::ServiceGateway) with the
//! result shape its contract requires.

pub mod action;
pub mod linked_authorization;
pub mod permission;
pub mod resource;
pub mod role;
pub mod tenant_role;
pub mod tenant_role_permission;
pub mod tenant_role_user;

use authz_domain::{Result, SystemError};

pub use action::ActionServiceClient;
pub use linked_authorization::LinkedAuthorizationServiceClient;
pub use permission::PermissionServiceClient;
pub use resource::ResourceServiceClient;
pub use role::RoleServiceClient;
pub use tenant_role::TenantRoleServiceClient;
pub use tenant_role_permission::TenantRolePermissionServiceClient;
pub use tenant_role_user::TenantRoleUserServiceClient;

/// Updates address an existing record, so the id must be present
pub(crate) fn require_id(id: Option<i64>, entity: &str) -> Result<i64> {
    id.ok_or_else(|| SystemError::invalid_argument(format!("{entity} id is required for update")))
}
