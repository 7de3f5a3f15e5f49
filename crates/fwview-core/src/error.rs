//! Error types for the explorer core.
//!
//! Each domain gets its own enum so callers can decide per case whether an
//! error is skipped, shown as a notice, or surfaced as a failed fetch:
//!
//! - [`TreeError`] - Rejected paths while building the display tree
//! - [`SessionError`] - Invalid open/select requests against the session
//! - [`PayloadError`] - Listing documents that cannot be decoded
//! - [`FetchError`] - Transport failures while retrieving the listing

use thiserror::Error;

/// Why a path was rejected by the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Leading, trailing or doubled delimiter (or the empty path).
    EmptySegment,
    /// A segment is needed both as a file and as a directory.
    Conflict,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySegment => write!(f, "zero-length path segment"),
            Self::Conflict => write!(f, "file and directory share a path"),
        }
    }
}

/// Tree construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path cannot be placed in the tree.
    #[error("malformed path '{path}': {reason}")]
    MalformedPath {
        path: String,
        reason: MalformedReason,
    },
}

impl TreeError {
    /// The offending path.
    pub fn path(&self) -> &str {
        match self {
            Self::MalformedPath { path, .. } => path,
        }
    }
}

/// Open-file session errors. Both are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Open was asked for a key the catalog does not know.
    #[error("unknown file: {0}")]
    UnknownKey(String),
    /// Select was asked for a key that is not open.
    #[error("file is not open: {0}")]
    NotOpen(String),
}

/// Listing payload decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The document is not valid JSON or does not match the entry schema.
    #[error("JSON parse error: {0}")]
    Json(String),
    /// Valid JSON, but neither a flat mapping nor a nested listing.
    #[error("unexpected listing shape: {0}")]
    UnexpectedShape(String),
    /// An mtime that is neither epoch milliseconds nor ISO-8601.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// A negative file size.
    #[error("negative size for '{0}'")]
    NegativeSize(String),
    /// The backend reported that it could not list the watched root.
    #[error("listing unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Network/fetch-related errors for the listing request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Body arrived but could not be decoded
    #[error(transparent)]
    Payload(#[from] PayloadError),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_message() {
        let err = TreeError::MalformedPath {
            path: "a//b".to_string(),
            reason: MalformedReason::EmptySegment,
        };
        assert_eq!(err.path(), "a//b");
        assert_eq!(
            err.to_string(),
            "malformed path 'a//b': zero-length path segment"
        );
    }

    #[test]
    fn test_fetch_error_wraps_payload() {
        let err: FetchError = PayloadError::NegativeSize("x".to_string()).into();
        assert_eq!(err.to_string(), "negative size for 'x'");
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
    }
}
