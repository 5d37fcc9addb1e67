//! Product entity
//!
//! The sole persisted entity. Its serde form is the public JSON shape:
//! `{id, name, priceCents, stock, created_at}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Random identifier assigned at creation
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "priceCents")]
    pub price_cents: i32,
    pub stock: i32,
    /// Creation time; listings are ordered by this, newest first
    #[serde(with = "rfc3339_seconds")]
    pub created_at: DateTime<Utc>,
}

/// RFC3339 in UTC with whole seconds, e.g. `2024-05-01T12:00:00Z`.
mod rfc3339_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
