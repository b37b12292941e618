//! Error types for the showcase catalog
//!
//! Storage failures (`StorageRead`, `StorageWrite`) are recovered locally by the
//! catalog store and only ever show up in the log. Validation and index failures
//! are caller-correctable and are surfaced to the user as blocking messages.
//!
//! Error variants use `#[source]` to preserve error chains for observability.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// A required catalog item field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The item title
    Title,
    /// The primary play link
    PlayUrl,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::PlayUrl => f.write_str("playUrl"),
        }
    }
}

/// Main error type for the showcase catalog
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Persistent store unreadable or holding data that is not a non-empty catalog
    #[error("Failed to read catalog from storage: {0}")]
    StorageRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Persistent store rejected a write
    #[error("Failed to write catalog to storage: {0}")]
    StorageWrite(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An add was attempted without a required field
    #[error("Missing required field: {field}")]
    Validation {
        /// The first required field found empty after trimming
        field: RequiredField,
    },

    /// A remove was attempted with an index outside `[0, len)`
    #[error("Index {index} out of range for catalog of {len} items")]
    Index {
        /// The rejected index
        index: i64,
        /// Catalog length at the time of the request
        len: usize,
    },

    /// The remove index field did not hold an integer
    #[error("Invalid index input {input:?} for catalog of {len} items")]
    InvalidIndexInput {
        /// Raw text of the index field
        input: String,
        /// Catalog length at the time of the request
        len: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShowcaseError {
    /// Whether this error should block the user with a message
    ///
    /// Storage and configuration failures are self-healing and stay in the log.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Index { .. } | Self::InvalidIndexInput { .. }
        )
    }
}

/// Result type alias for showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Convert an error to the message shown to the user
pub fn get_user_friendly_error(error: &ShowcaseError) -> String {
    match error {
        ShowcaseError::Validation { .. } => "Please provide a title and a play URL.".to_string(),
        ShowcaseError::Index { len, .. } | ShowcaseError::InvalidIndexInput { len, .. } => {
            // An empty catalog reads "0–-1"
            let last = i64::try_from(*len).unwrap_or(i64::MAX) - 1;
            format!("Invalid index. Must be 0\u{2013}{last}")
        }
        ShowcaseError::StorageRead(_) => "Saved games could not be read.\n\n\
             The built-in catalog is shown instead."
            .to_string(),
        ShowcaseError::StorageWrite(_) => "Changes could not be saved.\n\n\
             They will be kept until the page is closed."
            .to_string(),
        ShowcaseError::Config(_) => "Failed to load or save configuration.\n\n\
             Default settings will be used."
            .to_string(),
        ShowcaseError::Io(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        ShowcaseError::Json(e) => {
            format!(
                "Stored data is corrupted:\n\n{e}\n\n\
                 The built-in defaults will be used."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let error = ShowcaseError::Validation {
            field: RequiredField::PlayUrl,
        };
        assert_eq!(error.to_string(), "Missing required field: playUrl");
    }

    #[test]
    fn test_validation_user_friendly() {
        let error = ShowcaseError::Validation {
            field: RequiredField::Title,
        };
        assert_eq!(
            get_user_friendly_error(&error),
            "Please provide a title and a play URL."
        );
        assert!(error.is_user_facing());
    }

    #[test]
    fn test_index_user_friendly_names_range() {
        let error = ShowcaseError::Index { index: 7, len: 3 };
        assert_eq!(get_user_friendly_error(&error), "Invalid index. Must be 0–2");
    }

    #[test]
    fn test_invalid_index_input_user_friendly() {
        let error = ShowcaseError::InvalidIndexInput {
            input: "abc".to_string(),
            len: 1,
        };
        assert_eq!(get_user_friendly_error(&error), "Invalid index. Must be 0–0");
    }

    #[test]
    fn test_storage_errors_are_not_user_facing() {
        let read = ShowcaseError::StorageRead(StringError::new("quota"));
        let write = ShowcaseError::StorageWrite(StringError::new("quota"));
        assert!(!read.is_user_facing());
        assert!(!write.is_user_facing());
        assert_eq!(
            write.to_string(),
            "Failed to write catalog to storage: quota"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: ShowcaseError = io_error.into();
        assert!(matches!(error, ShowcaseError::Io(_)));
    }
}
