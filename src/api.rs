use thiserror::Error;

use crate::config::ConfigError;
use crate::model::RsvpRecord;

/// Everything that can go wrong talking to the RSVP backend. Each variant's
/// message is shown to the user as-is; nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The request completed but the server said no.
    #[error("Error ({status}): {body}")]
    Http { status: u16, body: String },
    /// The request never completed.
    #[error("Network error. Please try again.")]
    Network,
    #[error("Unexpected response format (expected an array).")]
    Format,
}

/// Parses the listing response body. Anything that isn't a JSON array of
/// records is a format error; individual records are tolerant of loose
/// typing (see `RsvpRecord`).
pub fn parse_rsvp_list(body: &str) -> Result<Vec<RsvpRecord>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| ApiError::Format)?;
    if !value.is_array() {
        return Err(ApiError::Format);
    }
    serde_json::from_value(value).map_err(|_| ApiError::Format)
}

#[cfg(feature = "hydrate")]
mod fetch {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::ApiError;
    use crate::config::SiteConfig;
    use crate::model::{RsvpRecord, SubmissionPayload};

    /// Loads the full RSVP listing from the backend.
    pub async fn fetch_rsvps(config: &SiteConfig) -> Result<Vec<RsvpRecord>, ApiError> {
        let base = config.api_base()?;

        let init = web_sys::RequestInit::new();
        init.set_method("GET");

        let (status, body) = run_request(&format!("{}/admin/rsvps", base), &init).await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http { status, body });
        }
        super::parse_rsvp_list(&body)
    }

    /// Posts one submission. Any 2xx status counts as accepted.
    pub async fn save_rsvp(
        config: &SiteConfig,
        payload: &SubmissionPayload,
    ) -> Result<(), ApiError> {
        let base = config.api_base()?;
        let json = serde_json::to_string(payload).map_err(|_| ApiError::Network)?;

        let headers = web_sys::Headers::new().map_err(|_| ApiError::Network)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::Network)?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&json));

        let (status, body) = run_request(&format!("{}/save-rsvp", base), &init).await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http { status, body });
        }
        Ok(())
    }

    // Issues the request through the browser fetch API and returns the status
    // with the raw body text. Any transport-level failure collapses to
    // `Network`.
    async fn run_request(
        url: &str,
        init: &web_sys::RequestInit,
    ) -> Result<(u16, String), ApiError> {
        let request =
            web_sys::Request::new_with_str_and_init(url, init).map_err(|_| ApiError::Network)?;
        let window = web_sys::window().ok_or(ApiError::Network)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|_| ApiError::Network)?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| ApiError::Network)?;

        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(|_| ApiError::Network)?)
            .await
            .map_err(|_| ApiError::Network)?;
        Ok((status, text.as_string().unwrap_or_default()))
    }
}

#[cfg(feature = "hydrate")]
pub use fetch::{fetch_rsvps, save_rsvp};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_listing() {
        let body = r#"[
            {"id": "1", "name": "Ada", "email": "ada@example.com", "groupNumber": 1,
             "createdAt": {"seconds": 100, "nanos": 0}},
            {"id": "2", "name": "Grace", "email": "grace@example.com", "groupNumber": "2"}
        ]"#;
        let records = parse_rsvp_list(body).expect("Failed to parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ada");
        assert_eq!(records[1].group_number, 2.0);
        assert!(records[1].created_at.is_none());
    }

    #[test]
    fn test_parse_empty_listing() {
        assert_eq!(parse_rsvp_list("[]"), Ok(vec![]));
    }

    #[test]
    fn test_non_array_is_format_error() {
        assert_eq!(
            parse_rsvp_list(r#"{"message": "nope"}"#),
            Err(ApiError::Format)
        );
        assert_eq!(parse_rsvp_list("null"), Err(ApiError::Format));
        assert_eq!(parse_rsvp_list("not json at all"), Err(ApiError::Format));
        assert_eq!(
            ApiError::Format.to_string(),
            "Unexpected response format (expected an array)."
        );
    }

    #[test]
    fn test_http_error_message_carries_status_and_body() {
        let err = ApiError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
        assert_eq!(message, "Error (500): boom");
    }

    #[test]
    fn test_network_error_is_distinct_from_http_error() {
        let network = ApiError::Network.to_string();
        assert!(!network.contains("Error ("));
        assert_ne!(
            network,
            ApiError::Http {
                status: 0,
                body: String::new()
            }
            .to_string()
        );
    }
}
