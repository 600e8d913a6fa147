//! Errors raised while calling a model provider
//!
//! A failed call and a bad answer are kept apart: every variant except
//! [`Error::Validation`] means the call itself went wrong, while `Validation`
//! means it returned JSON that breaks a schema.

use crate::validation::ValidationError;
use std::error::Error as StdError;
use std::fmt;

/// Boxed underlying cause
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure of a provider call or of the output it produced
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The HTTP exchange could not be completed
    Network {
        /// What went wrong
        message: String,
        /// Transport error, when there is one
        source: Option<BoxError>,
    },

    /// The provider answered with a failure
    Provider {
        /// Provider that failed, usually its host name
        provider: String,
        /// HTTP status, absent when the failure was in the payload
        status: Option<u16>,
        /// Body or description returned by the provider
        message: String,
    },

    /// Content that had to be JSON was not
    Serialization {
        /// Parser message
        message: String,
        /// Parser error
        source: Option<BoxError>,
    },

    /// Content was JSON but broke a schema
    Validation(ValidationError),

    /// The call did not finish in time
    Timeout,

    /// The provider rejected the credentials
    Authentication(String),

    /// The provider could not be set up
    Configuration(String),

    /// The model stopped early or refused to answer
    ResponseError {
        /// Why the output is unusable
        message: String,
    },
}

impl Error {
    /// HTTP status the provider answered with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Provider { status, .. } => *status,
            _ => None,
        }
    }

    /// The schema failure, if this is one
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network { message, .. } => write!(f, "network error: {}", message),
            Error::Provider {
                provider,
                status: Some(status),
                message,
            } => write!(f, "{} returned HTTP {}: {}", provider, status, message),
            Error::Provider {
                provider, message, ..
            } => write!(f, "{} failed: {}", provider, message),
            Error::Serialization { message, .. } => write!(f, "output is not valid JSON: {}", message),
            // the field list is the whole message
            Error::Validation(err) => fmt::Display::fmt(err, f),
            Error::Timeout => write!(f, "model call timed out"),
            Error::Authentication(msg) => write!(f, "authentication failed: {}", msg),
            Error::Configuration(msg) => write!(f, "invalid configuration: {}", msg),
            Error::ResponseError { message } => write!(f, "unusable model output: {}", message),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Network { source, .. } | Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            Error::Validation(err) => err.source(),
            _ => None,
        }
    }
}

/// Result type alias for provider calls
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}
