//! Tenant: the organisational scope roles and permissions are granted in
//!
//! Tenants are owned by the tenant management service; the role management
//! service only reports which tenants a user belongs to.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tenant {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::json::JsonEntity;

    #[test]
    fn decodes_a_tenant_list() {
        let tenants = Tenant::list_from_json(&json!([
            {"id": 1, "name": "acme", "createDate": "2024-01-01T00:00:00"},
            {"id": 2, "name": "globex"}
        ]))
        .unwrap();

        assert_eq!(tenants.len(), 2);
        assert_eq!(tenants[1].name.as_deref(), Some("globex"));
        assert!(tenants[0].create_date.is_some());
    }
}
