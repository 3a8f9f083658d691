use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// A server-assigned creation time. Depending on how the backend serialized
/// it, the same instant arrives either as `{seconds, nanos}` or as
/// `{_seconds, _nanoseconds}`, and the sub-second part may be missing
/// entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTimestamp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nanos: Option<i64>,
    #[serde(default, rename = "_seconds", skip_serializing_if = "Option::is_none")]
    pub seconds_alt: Option<i64>,
    #[serde(
        default,
        rename = "_nanoseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub nanos_alt: Option<i64>,
}

/// Normalizes a timestamp to milliseconds since the epoch. The plain field
/// names win when both shapes are present; nanos default to 0. Returns `None`
/// when no seconds value is resolvable, treating malformed input as unknown
/// rather than failing.
pub fn to_millis(ts: Option<&ApiTimestamp>) -> Option<i64> {
    let ts = ts?;
    let seconds = ts.seconds.or(ts.seconds_alt)?;
    let nanos = ts.nanos.or(ts.nanos_alt).unwrap_or(0);
    // Truncate the sub-second remainder toward negative infinity.
    Some(seconds.saturating_mul(1000) + nanos.div_euclid(1_000_000))
}

/// Renders the instant in the viewer's local time, or an empty string when
/// the timestamp is absent or malformed. The exact text varies with the
/// environment's time zone.
pub fn format_date(ts: Option<&ApiTimestamp>) -> String {
    let ms = match to_millis(ts) {
        Some(ms) => ms,
        None => return String::new(),
    };
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => String::new(),
    }
}
