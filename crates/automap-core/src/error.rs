//! Error types for the automap core library
//!
//! This module defines the error taxonomy of the mapping engine, using
//! thiserror for ergonomic error definitions and anyhow for wrapping
//! failures raised by user callbacks.

use thiserror::Error;

/// Main error type for mapping operations
#[derive(Error, Debug)]
pub enum Error {
    /// No mapping applies to the requested class pair, even after walking
    /// the source and destination class hierarchies
    #[error("No mapping registered for {source_class} -> {destination_class}")]
    UnregisteredMapping {
        source_class: String,
        destination_class: String,
    },

    /// Malformed call: the destination cannot be instantiated, or a value
    /// that must be an object is something else
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        argument: Option<String>,
    },

    /// A destination property could not be written
    #[error("Unable to map property '{property}' of {class}: {message}")]
    UnableToMap {
        class: String,
        property: String,
        message: String,
    },

    /// Invalid mapping configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON conversion errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure raised from inside a user-supplied callback
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unregistered(source_class: &str, destination_class: &str) -> Self {
        Error::UnregisteredMapping {
            source_class: source_class.to_string(),
            destination_class: destination_class.to_string(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>, argument: Option<&str>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
            argument: argument.map(str::to_string),
        }
    }

    pub(crate) fn unable_to_map(class: &str, property: &str, message: impl Into<String>) -> Self {
        Error::UnableToMap {
            class: class.to_string(),
            property: property.to_string(),
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error raised by a callback
    pub fn callback(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Error::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Whether this error reports a missing mapping
    pub fn is_unregistered_mapping(&self) -> bool {
        matches!(self, Error::UnregisteredMapping { .. })
    }
}
