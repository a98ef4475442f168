//! Boundary representation of timestamps.
//!
//! Records leave the API with `created_at` as a `YYYY-MM-DD HH:MM:SS`
//! string instead of a native date type. Use the serializers below with
//! `#[serde(serialize_with = "...")]` on model fields.

use serde::Serializer;

use crate::types::Timestamp;

/// `strftime` layout for every timestamp in API responses.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serialize a timestamp using [`TIMESTAMP_FORMAT`].
pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

/// Serialize a nullable timestamp; `None` becomes an explicit `null`.
pub fn serialize_option<S>(ts: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(ts) => serializer.serialize_str(&format_timestamp(ts)),
        None => serializer.serialize_none(),
    }
}
