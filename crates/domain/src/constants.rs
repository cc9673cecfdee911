//! Domain-level constants shared by the authorization clients

// Wire format
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Paging defaults
pub const DEFAULT_PAGE_NO: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;

// Token recovery
pub const UNRECOVERABLE_TOKEN_MESSAGE: &str = "Unable to recover expiredToken.";
pub const USER_REFRESH_TOKEN_PATH: &str = "user/refresh";

// Resource paths, relative to the owning service base URL
pub const ACTION_RESOURCE: &str = "action";
pub const PERMISSION_RESOURCE: &str = "permission";
pub const RESOURCE_RESOURCE: &str = "resource";
pub const ROLE_RESOURCE: &str = "role";
pub const TENANT_ROLE_RESOURCE: &str = "tenantrole";
pub const TENANT_ROLE_USER_RESOURCE: &str = "tenantroleuser";
pub const TENANT_ROLE_PERMISSION_RESOURCE: &str = "tenantrolepermission";
pub const LINKED_AUTHORIZATION_RESOURCE: &str = "linkedauthorization";

// Role defaults
pub const DEFAULT_ROLE_TERMINATION_DATE: &str = "2030-12-12T00:00:00";
