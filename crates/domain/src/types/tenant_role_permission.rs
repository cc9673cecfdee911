//! TenantRolePermission: a permission granted to a tenant role

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantRolePermission {
    pub id: Option<i64>,
    pub tenant_role_id: Option<i64>,
    pub permission_id: Option<i64>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

impl TenantRolePermission {
    pub fn create(tenant_role_id: i64, permission_id: i64, create_user: Option<i64>) -> Self {
        let now = date_format::now();
        Self {
            tenant_role_id: Some(tenant_role_id),
            permission_id: Some(permission_id),
            create_user,
            create_date: Some(now),
            last_update: Some(now),
            ..Self::default()
        }
    }
}
