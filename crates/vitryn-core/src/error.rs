//! Error types for the Vitryn content pipeline.

/// Errors that can occur while loading and normalizing content.
///
/// The enum is `#[non_exhaustive]` so new error kinds can be added
/// without breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Content source failure (static feed, filesystem, future API)
    #[error("load error: {message}")]
    Load {
        /// Display message
        message: String,
        /// Underlying cause, when one exists
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Frontmatter or document parse failure
    #[error("parse error: {message}")]
    Parse {
        /// What could not be parsed
        message: String,
    },

    /// Record validation error
    #[error("validation error: {message}")]
    Validation {
        /// Field that failed validation, if known
        field: Option<String>,
        /// Problem description
        message: String,
    },

    /// I/O failure (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Vitryn operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is worth retrying.
    ///
    /// Load and I/O failures are usually transient (a feed being
    /// momentarily unavailable); parse and validation failures are
    /// properties of the data and will not improve on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Load { .. } => true,
            Error::Io(_) => true,
            Error::Parse { .. } => false,
            Error::Validation { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Builds a load error from a message.
    pub fn load<S: Into<String>>(message: S) -> Self {
        Error::Load {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a load error wrapping an underlying cause.
    pub fn load_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Load {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Builds a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Builds a validation error with no field attribution.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Builds a validation error naming the offending field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}
