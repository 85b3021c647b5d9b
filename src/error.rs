//! Error taxonomy for the operator.
//!
//! Every variant renders with the `[mongodb operator error]` prefix, so callers
//! can grep logs or test membership on the type without matching messages.

use std::time::Duration;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OperatorError>;

/// Failure reported by the driver for a single call.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("deadline of {0:?} elapsed")]
    Timeout(Duration),
}

/// Root error kind for every operator failure.
#[derive(Debug, Error)]
pub enum OperatorError {
    // Validation
    #[error("[mongodb operator error] cannot initialize operator with empty or whitespace database")]
    EmptyDatabase,

    #[error("[mongodb operator error] cannot initialize operator with empty or whitespace connection uri")]
    EmptyUri,

    #[error("[mongodb operator error] empty or whitespace collection name provided")]
    EmptyCollectionName,

    #[error("[mongodb operator error] cannot perform operation with a nil filter")]
    NilFilter,

    #[error("[mongodb operator error] cannot perform operation with a nil payload")]
    NilPayload,

    #[error("[mongodb operator error] provided payload list cannot be empty")]
    EmptyPayload,

    #[error("[mongodb operator error] filter must encode to a document")]
    InvalidFilter,

    #[error("[mongodb operator error] payload must encode to a document")]
    InvalidPayload,

    #[error("[mongodb operator error] failed to encode value to bson; {0}")]
    Encode(#[source] mongodb::bson::ser::Error),

    // Construction
    #[error("[mongodb operator error] failed to initialize MongoDB driver client; {0}")]
    ClientInit(#[source] mongodb::error::Error),

    #[error("[mongodb operator error] failed to connect to MongoDB instance; {0}")]
    Connect(#[source] DriverError),

    // Operations
    #[error("[mongodb operator error] failed to count documents; {0}")]
    Count(#[source] DriverError),

    #[error("[mongodb operator error] failed to find document; {0}")]
    FindOne(#[source] DriverError),

    #[error("[mongodb operator error] failed to find many documents; {0}")]
    FindMany(#[source] DriverError),

    #[error("[mongodb operator error] failed to insert document; {0}")]
    InsertOne(#[source] DriverError),

    #[error("[mongodb operator error] failed to insert many documents; {0}")]
    InsertMany(#[source] DriverError),

    #[error("[mongodb operator error] failed to update document; {0}")]
    UpdateOne(#[source] DriverError),

    #[error("[mongodb operator error] failed to update multiple documents; {0}")]
    UpdateMany(#[source] DriverError),

    #[error("[mongodb operator error] failed to delete document; {0}")]
    DeleteOne(#[source] DriverError),

    #[error("[mongodb operator error] failed to delete multiple documents; {0}")]
    DeleteMany(#[source] DriverError),

    #[error("[mongodb operator error] failed to ping MongoDB instance; {0}")]
    Ping(#[source] DriverError),

    // Decode
    #[error("[mongodb operator error] failed to decode document to target; {0}")]
    Decode(#[source] mongodb::bson::de::Error),
}

impl OperatorError {
    /// The driver-level cause, when this error wraps a driver call.
    pub fn driver_error(&self) -> Option<&DriverError> {
        match self {
            Self::Connect(e)
            | Self::Count(e)
            | Self::FindOne(e)
            | Self::FindMany(e)
            | Self::InsertOne(e)
            | Self::InsertMany(e)
            | Self::UpdateOne(e)
            | Self::UpdateMany(e)
            | Self::DeleteOne(e)
            | Self::DeleteMany(e)
            | Self::Ping(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the call was cut short by the configured deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self.driver_error(), Some(DriverError::Timeout(_)))
    }

    /// Whether the failure was caught before any I/O took place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyDatabase
                | Self::EmptyUri
                | Self::EmptyCollectionName
                | Self::NilFilter
                | Self::NilPayload
                | Self::EmptyPayload
                | Self::InvalidFilter
                | Self::InvalidPayload
                | Self::Encode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "[mongodb operator error]";

    #[test]
    fn test_every_kind_is_prefixed() {
        let timeout = || DriverError::Timeout(Duration::from_millis(10));
        let errors = vec![
            OperatorError::EmptyDatabase,
            OperatorError::EmptyUri,
            OperatorError::EmptyCollectionName,
            OperatorError::NilFilter,
            OperatorError::NilPayload,
            OperatorError::EmptyPayload,
            OperatorError::InvalidFilter,
            OperatorError::InvalidPayload,
            OperatorError::Connect(timeout()),
            OperatorError::Count(timeout()),
            OperatorError::FindOne(timeout()),
            OperatorError::FindMany(timeout()),
            OperatorError::InsertOne(timeout()),
            OperatorError::InsertMany(timeout()),
            OperatorError::UpdateOne(timeout()),
            OperatorError::UpdateMany(timeout()),
            OperatorError::DeleteOne(timeout()),
            OperatorError::DeleteMany(timeout()),
            OperatorError::Ping(timeout()),
        ];

        for err in errors {
            assert!(err.to_string().starts_with(PREFIX), "{err}");
        }
    }

    #[test]
    fn test_timeout_is_preserved_as_source() {
        let err = OperatorError::Count(DriverError::Timeout(Duration::from_secs(10)));

        assert!(err.is_timeout());
        assert!(!err.is_validation());
        assert!(err.to_string().contains("failed to count documents"));

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("deadline of 10s elapsed"));
    }

    #[test]
    fn test_validation_kinds() {
        assert!(OperatorError::NilFilter.is_validation());
        assert!(OperatorError::EmptyPayload.is_validation());
        assert!(OperatorError::NilFilter.driver_error().is_none());
        assert!(!OperatorError::NilPayload.is_timeout());
    }
}
