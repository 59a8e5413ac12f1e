use chrono::NaiveDateTime;

// Microsecond precision, no timezone. All timestamps are UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format(time: &NaiveDateTime) -> String {
    time.format(DATE_FORMAT).to_string()
}

pub fn parse(s: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_FORMAT)
}

/// serde adapter for `Option<NaiveDateTime>` fields, used with `#[serde(with = ...)]`.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.serialize_some(&super::format(time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
