use thiserror::Error;

use crate::api::ApiError;
use crate::model::SubmissionPayload;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your RSVP has been received.";

/// Where a submission attempt stands. `Success` and `Error` are terminal for
/// the attempt; the user may submit again from either.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please fill in all fields.")]
pub struct ValidationError;

/// Builds the payload for one submission attempt. Name and email must be
/// non-empty after trimming and the group field must parse to a finite
/// number; otherwise no network call happens at all.
pub fn validate_submission(
    name: &str,
    email: &str,
    group_number: &str,
) -> Result<SubmissionPayload, ValidationError> {
    let name = name.trim();
    let email = email.trim();
    let group = group_number.trim();
    if name.is_empty() || email.is_empty() || group.is_empty() {
        return Err(ValidationError);
    }

    let group: f64 = group.parse().map_err(|_| ValidationError)?;
    if !group.is_finite() {
        return Err(ValidationError);
    }

    Ok(SubmissionPayload {
        name: name.to_string(),
        email: email.to_string(),
        group_number: group,
    })
}

/// Maps the backend's answer to the status shown to the user.
pub fn submit_outcome(result: Result<(), ApiError>) -> SubmitStatus {
    match result {
        Ok(()) => SubmitStatus::Success(SUCCESS_MESSAGE.to_string()),
        Err(e) => SubmitStatus::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_rejected_before_any_network() {
        assert!(validate_submission("", "ada@example.com", "3").is_err());
        assert!(validate_submission("Ada", "", "3").is_err());
        assert!(validate_submission("Ada", "ada@example.com", "").is_err());

        // Whitespace-only counts as empty.
        assert!(validate_submission("   ", "ada@example.com", "3").is_err());
        assert!(validate_submission("Ada", "\t", "3").is_err());

        let err = validate_submission("", "", "").expect_err("Should fail");
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn test_group_number_must_be_finite() {
        assert!(validate_submission("Ada", "ada@example.com", "three").is_err());
        assert!(validate_submission("Ada", "ada@example.com", "NaN").is_err());
        assert!(validate_submission("Ada", "ada@example.com", "inf").is_err());
        assert!(validate_submission("Ada", "ada@example.com", "3").is_ok());
    }

    #[test]
    fn test_valid_submission_trims_fields() {
        let payload =
            validate_submission("  Ada  ", " ada@example.com ", " 3 ").expect("Should validate");
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.group_number, 3.0);
    }

    #[test]
    fn test_http_failure_surfaces_status_and_body() {
        let status = submit_outcome(Err(ApiError::Http {
            status: 500,
            body: "boom".to_string(),
        }));
        match status {
            SubmitStatus::Error(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("Expected an error status, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let status = submit_outcome(Err(ApiError::Network));
        match status {
            SubmitStatus::Error(message) => {
                assert!(!message.contains("Error ("));
            }
            other => panic!("Expected an error status, got {:?}", other),
        }
    }

    #[test]
    fn test_success_outcome() {
        let status = submit_outcome(Ok(()));
        assert_eq!(status, SubmitStatus::Success(SUCCESS_MESSAGE.to_string()));
        assert!(!status.is_submitting());
        assert!(SubmitStatus::Submitting.is_submitting());
    }
}
