//! Resource: the object a permission applies to, e.g. `invoice`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::date_format;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub create_user: Option<i64>,
    pub last_update_user: Option<i64>,
    #[serde(with = "date_format::option")]
    pub create_date: Option<NaiveDateTime>,
    #[serde(with = "date_format::option")]
    pub last_update: Option<NaiveDateTime>,
}

impl Resource {
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
