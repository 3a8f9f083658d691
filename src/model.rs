use serde::{Deserialize, Deserializer, Serialize};

use crate::timestamp::ApiTimestamp;

/// One submitted RSVP as served by the backend. Records are created
/// server-side and only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Group numbers are loosely typed on the wire; anything that isn't a
    /// number or a numeric string coerces to NaN and drops out of the
    /// grouped view.
    #[serde(default = "group_number_missing", deserialize_with = "coerce_group_number")]
    pub group_number: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<ApiTimestamp>,
}

/// The body posted to the backend for one submission attempt. Built fresh by
/// validation; never stored client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub group_number: f64,
}

fn group_number_missing() -> f64 {
    f64::NAN
}

fn coerce_group_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::to_millis;

    #[test]
    fn test_record_deserializes_camel_case() {
        let record: RsvpRecord = serde_json::from_str(
            r#"{
                "id": "abc123",
                "name": "Ada",
                "email": "ada@example.com",
                "groupNumber": 3,
                "createdAt": {"_seconds": 10, "_nanoseconds": 0}
            }"#,
        )
        .expect("Failed to parse");
        assert_eq!(record.id, "abc123");
        assert_eq!(record.group_number, 3.0);
        assert_eq!(to_millis(record.created_at.as_ref()), Some(10_000));
    }

    #[test]
    fn test_group_number_coercion() {
        let numeric_string: RsvpRecord =
            serde_json::from_str(r#"{"id": "a", "groupNumber": " 7 "}"#).expect("Failed to parse");
        assert_eq!(numeric_string.group_number, 7.0);

        let garbage: RsvpRecord =
            serde_json::from_str(r#"{"id": "b", "groupNumber": "seven"}"#).expect("Failed to parse");
        assert!(garbage.group_number.is_nan());

        let null: RsvpRecord =
            serde_json::from_str(r#"{"id": "c", "groupNumber": null}"#).expect("Failed to parse");
        assert!(null.group_number.is_nan());

        let missing: RsvpRecord = serde_json::from_str(r#"{"id": "d"}"#).expect("Failed to parse");
        assert!(missing.group_number.is_nan());
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = SubmissionPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            group_number: 3.0,
        };
        let json = serde_json::to_value(&payload).expect("Failed to serialize");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["groupNumber"], 3.0);
    }
}
