//! `yyyy-MM-dd'T'HH:mm:ss` date handling used on the wire
//!
//! Timestamps carry no zone and no fractional seconds. Anything else is a
//! decoding error.

use chrono::{NaiveDateTime, SubsecRound, Utc};

use crate::constants::DATE_TIME_FORMAT;

/// Current UTC wall time truncated to whole seconds
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

pub fn format(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
}

/// Serde adapter for `Option<NaiveDateTime>` fields
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
