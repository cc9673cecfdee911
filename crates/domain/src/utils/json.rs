//! JSON factory functions shared by every entity type

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Page;

/// Conversions between entities and their camelCase JSON representation
///
/// Absent fields decode to `None` and are omitted on encoding, so entities
/// survive a round trip unchanged. A malformed document is a hard error.
pub trait JsonEntity: Serialize + DeserializeOwned {
    fn from_json(json: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(json)
    }

    fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn list_from_json(json: &Value) -> Result<Vec<Self>, serde_json::Error> {
        Vec::<Self>::deserialize(json)
    }

    fn page_from_json(json: &Value) -> Result<Page<Self>, serde_json::Error> {
        Page::<Self>::deserialize(json)
    }
}

impl<T> JsonEntity for T where T: crate::types::Audited + Serialize + DeserializeOwned {}
