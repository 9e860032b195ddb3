//! Error types for RenderBoy.
//!
//! Two failure classes reach callers: I/O failures (the project file or
//! directory could not be read or written) and decode failures (the
//! document is malformed or names a node type nobody registered).
//! Missing shots and layers are not errors; lookups return `None`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for RenderBoy operations.
pub type Result<T> = std::result::Result<T, RenderboyError>;

/// Errors that can occur while building, loading or saving a project.
#[derive(Error, Debug)]
pub enum RenderboyError {
    // I/O Errors
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid project path: {path} is not a directory")]
    InvalidProjectPath { path: PathBuf },

    // Decode Errors
    #[error("Malformed project document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node at {at} has no objectType")]
    MissingObjectType { at: String },

    #[error("Unknown objectType: {tag}")]
    UnknownObjectType { tag: String },

    #[error("Node at {at} is a {found}, expected a {expected}")]
    UnexpectedObjectType {
        at: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to decode {at}: {reason}")]
    Decode { at: String, reason: String },
}

impl RenderboyError {
    /// Wrap an `std::io::Error` with the path it happened on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        RenderboyError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Get the error code for this error type.
    pub fn error_code(&self) -> &'static str {
        match self {
            RenderboyError::Io { .. } => "IO_ERROR",
            RenderboyError::InvalidProjectPath { .. } => "INVALID_PROJECT_PATH",
            RenderboyError::Json(_) => "MALFORMED_DOCUMENT",
            RenderboyError::MissingObjectType { .. } => "MISSING_OBJECT_TYPE",
            RenderboyError::UnknownObjectType { .. } => "UNKNOWN_OBJECT_TYPE",
            RenderboyError::UnexpectedObjectType { .. } => "UNEXPECTED_OBJECT_TYPE",
            RenderboyError::Decode { .. } => "DECODE_ERROR",
        }
    }

    /// True for failures reading or writing the filesystem.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            RenderboyError::Io { .. } | RenderboyError::InvalidProjectPath { .. }
        )
    }

    /// True for failures turning a document back into nodes.
    pub fn is_decode_error(&self) -> bool {
        !self.is_io_error()
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            RenderboyError::Io { .. } => Some("Check the file path and its permissions."),
            RenderboyError::InvalidProjectPath { .. } => {
                Some("Point at the directory that holds one folder per shot.")
            }
            RenderboyError::Json(_) => {
                Some("The project file is not valid JSON. Restore it from version control.")
            }
            RenderboyError::UnknownObjectType { .. } => {
                Some("The file was written by a newer RenderBoy. Upgrade and try again.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = RenderboyError::UnknownObjectType {
            tag: "Bogus".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_OBJECT_TYPE");
        assert_eq!(err.to_string(), "Unknown objectType: Bogus");
    }

    #[test]
    fn test_error_classes() {
        let io = RenderboyError::io(
            Path::new("missing.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(io.is_io_error());
        assert!(!io.is_decode_error());
        assert!(io.recovery_suggestion().is_some());

        let decode = RenderboyError::MissingObjectType {
            at: "$".to_string(),
        };
        assert!(decode.is_decode_error());
        assert!(decode.recovery_suggestion().is_none());
    }
}
