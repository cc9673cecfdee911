//! Action: the verb a permission grants, e.g. `add` or `delete`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

impl Action {
    /// New, not yet persisted action stamped with the current time
    pub fn create(name: impl Into<String>, create_user: Option<i64>) -> Self {
        let now = date_format::now();
        Self {
            name: Some(name.into()),
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
    use crate::types::Audited;
    use crate::utils::json::JsonEntity;

    #[test]
    fn create_stamps_both_dates_with_same_instant() {
        let action = Action::create("add", Some(42));

        assert_eq!(action.id, None);
        assert_eq!(action.name.as_deref(), Some("add"));
        assert_eq!(action.create_user, Some(42));
        assert!(action.create_date.is_some());
        assert_eq!(action.create_date, action.last_update);
    }

    #[test]
    fn encodes_camel_case_and_omits_absent_fields() {
        let mut action = Action::create("delete", Some(7));
        action.create_date = date_format::parse("2020-01-02T03:04:05").ok();
        action.last_update = action.create_date;

        let json = action.to_json().unwrap();

        assert_eq!(
            json,
            json!({
                "name": "delete",
                "createUser": 7,
                "createDate": "2020-01-02T03:04:05",
                "lastUpdate": "2020-01-02T03:04:05"
            })
        );
    }

    #[test]
    fn decodes_full_document() {
        let json = json!({
            "id": 3,
            "name": "update",
            "createUser": 1,
            "lastUpdateUser": 2,
            "createDate": "2019-05-01T10:00:00",
            "lastUpdate": "2019-06-01T11:30:00"
        });

        let action = Action::from_json(&json).unwrap();

        assert_eq!(action.id, Some(3));
        assert_eq!(action.last_update_user, Some(2));
        assert_eq!(action.last_update.map(|d| date_format::format(&d)).as_deref(), Some("2019-06-01T11:30:00"));
    }

    #[test]
    fn invalid_date_is_a_decoding_error() {
        let json = json!({"name": "add", "createDate": "yesterday"});
        assert!(Action::from_json(&json).is_err());
    }

    #[test]
    fn mark_updated_touches_only_update_audit() {
        let mut action = Action::create("add", Some(1));
        action.create_date = date_format::parse("2001-01-01T00:00:00").ok();
        let created = action.create_date;

        action.mark_updated(Some(9));

        assert_eq!(action.last_update_user, Some(9));
        assert_eq!(action.create_user, Some(1));
        assert_eq!(action.create_date, created);
        assert_ne!(action.last_update, created);
    }

    #[test]
    fn list_from_json_requires_array() {
        let list = Action::list_from_json(&json!([{"name": "a"}, {"name": "b"}])).unwrap();
        assert_eq!(list.len(), 2);
        assert!(Action::list_from_json(&json!({"name": "a"})).is_err());
    }
}
