//! Authorization entities and the shapes they travel in

pub mod action;
pub mod linked_authorization;
pub mod page;
pub mod permission;
pub mod query;
pub mod resource;
pub mod role;
pub mod tenant;
pub mod tenant_role;
pub mod tenant_role_permission;
pub mod tenant_role_user;

use chrono::NaiveDateTime;

pub use action::Action;
pub use linked_authorization::LinkedAuthorization;
pub use page::Page;
pub use permission::Permission;
pub use query::{LinkedAuthorizationFilter, PageRequest, PermissionFilter, RoleFilter, SearchOptions};
pub use resource::Resource;
pub use role::Role;
pub use tenant::Tenant;
pub use tenant_role::TenantRole;
pub use tenant_role_permission::TenantRolePermission;
pub use tenant_role_user::TenantRoleUser;

/// Audit metadata common to every persisted entity
pub trait Audited {
    /// Server-assigned identifier, `None` until persisted
    fn id(&self) -> Option<i64>;

    fn create_user(&self) -> Option<i64>;

    fn create_date(&self) -> Option<NaiveDateTime>;

    fn last_update(&self) -> Option<NaiveDateTime>;

    /// Stamp an update: sets the last update user and time, nothing else.
    fn mark_updated(&mut self, user: Option<i64>);
}

crate::impl_audited!(
    Action,
    LinkedAuthorization,
    Permission,
    Resource,
    Role,
    Tenant,
    TenantRole,
    TenantRolePermission,
    TenantRoleUser,
);
