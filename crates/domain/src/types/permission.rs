//! Permission: an action granted over a resource

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Permission {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub action_id: Option<i64>,
    pub resource_id: Option<i64>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

impl Permission {
    pub fn create(
        name: impl Into<String>,
        action_id: i64,
        resource_id: i64,
        create_user: Option<i64>,
    ) -> Self {
        let now = date_format::now();
        Self {
            name: Some(name.into()),
            action_id: Some(action_id),
            resource_id: Some(resource_id),
            create_user,
            create_date: Some(now),
            last_update: Some(now),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::json::JsonEntity;

    #[test]
    fn foreign_keys_use_camel_case() {
        let permission = Permission {
            name: Some("invoice:add".into()),
            action_id: Some(1),
            resource_id: Some(2),
            ..Permission::default()
        };

        assert_eq!(
            permission.to_json().unwrap(),
            json!({"name": "invoice:add", "actionId": 1, "resourceId": 2})
        );
    }

    #[test]
    fn create_links_action_and_resource() {
        let permission = Permission::create("invoice:add", 4, 5, None);
        assert_eq!((permission.action_id, permission.resource_id), (Some(4), Some(5)));
        assert_eq!(permission.create_user, None);
        assert!(permission.last_update.is_some());
    }
}
