//! Errors surfaced by the dispatcher

use helpdesk_core::ValidationError;
use thiserror::Error;

/// Why a query could not be answered
///
/// Nothing is retried or masked; the caller decides what to do.
#[derive(Debug, Error)]
pub enum SupportError {
    /// A field failed its constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The model-call collaborator failed, or returned something that is not JSON
    #[error("external model call failed: {0}")]
    ExternalCall(#[source] helpdesk_core::Error),
}

impl SupportError {
    /// The validation failure, if this is one
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            SupportError::Validation(err) => Some(err),
            SupportError::ExternalCall(_) => None,
        }
    }

    /// Whether this is a validation failure
    pub fn is_validation(&self) -> bool {
        self.validation().is_some()
    }
}

impl From<helpdesk_core::Error> for SupportError {
    fn from(err: helpdesk_core::Error) -> Self {
        match err {
            helpdesk_core::Error::Validation(v) => SupportError::Validation(v),
            other => SupportError::ExternalCall(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_core_validation_becomes_validation() {
        let err: SupportError =
            helpdesk_core::Error::Validation(ValidationError::single("response_id", "is required"))
                .into();
        assert_eq!(err.validation().unwrap().fields(), vec!["response_id"]);
    }

    #[test]
    fn test_other_core_errors_are_external() {
        let err: SupportError = helpdesk_core::Error::Timeout.into();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "external model call failed: model call timed out");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_http_status_survives_as_source() {
        let err: SupportError = helpdesk_core::Error::Provider {
            provider: "api.openai.com".into(),
            status: Some(503),
            message: "overloaded".into(),
        }
        .into();

        assert!(matches!(err, SupportError::ExternalCall(_)));
        let cause = err
            .source()
            .and_then(|s| s.downcast_ref::<helpdesk_core::Error>())
            .unwrap();
        assert_eq!(cause.status(), Some(503));
        assert_eq!(
            err.to_string(),
            "external model call failed: api.openai.com returned HTTP 503: overloaded"
        );
    }

    #[test]
    fn test_validation_is_not_rewrapped() {
        let original = ValidationError::single("confidence_score", "must be between 0.0 and 1.0");
        let err: SupportError = helpdesk_core::Error::from(original.clone()).into();
        assert_eq!(err.validation(), Some(&original));
        assert_eq!(err.to_string(), original.to_string());
    }

    #[test]
    fn test_validation_display_is_transparent() {
        let err = SupportError::from(ValidationError::single("message", "too short"));
        assert_eq!(err.to_string(), "1 validation error(s): message: too short");
    }
}
