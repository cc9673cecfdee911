//! TenantRole: a role made available inside one tenant

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantRole {
    pub id: Option<i64>,
    pub tenant_id: Option<i64>,
    pub role_id: Option<i64>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

impl TenantRole {
    pub fn create(tenant_id: i64, role_id: i64, create_user: Option<i64>) -> Self {
        let now = date_format::now();
        Self {
            tenant_id: Some(tenant_id),
            role_id: Some(role_id),
            create_user,
            create_date: Some(now),
            last_update: Some(now),
            ..Self::default()
        }
    }
}
