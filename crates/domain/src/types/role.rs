//! Role: a named bundle of permissions with a termination date

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::constants::DEFAULT_ROLE_TERMINATION_DATE;
use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(with = "date_format::option")]
    pub termination_date: Option<NaiveDateTime>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

impl Role {
    /// New role terminating on the default termination date
    pub fn create(
        name: impl Into<String>,
        description: Option<String>,
        create_user: Option<i64>,
    ) -> Self {
        let now = date_format::now();
        Self {
            name: Some(name.into()),
            description,
            termination_date: date_format::parse(DEFAULT_ROLE_TERMINATION_DATE).ok(),
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
    fn create_uses_default_termination_date() {
        let role = Role::create("admin", Some("Administrators".into()), Some(1));

        let json = role.to_json().unwrap();
        assert_eq!(json["terminationDate"], json!("2030-12-12T00:00:00"));
        assert_eq!(json["description"], json!("Administrators"));
    }

    #[test]
    fn decodes_without_termination_date() {
        let role = Role::from_json(&json!({"id": 8, "name": "viewer"})).unwrap();
        assert_eq!(role.termination_date, None);
        assert_eq!(role.description, None);
    }
}
