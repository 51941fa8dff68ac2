// ABOUTME: Error types for relay retrieval, including the ErrorCode enum and ClientError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the categories of retrieval failures.
///
/// Extraction itself never fails; only building and performing the relay
/// request can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    Timeout,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Timeout => "timeout",
        };
        write!(f, "{}", s)
    }
}

/// The error type for retrieval operations.
#[derive(Debug, thiserror::Error)]
pub struct ClientError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thaifcd: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ClientError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Timeout,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_url_and_code() {
        let err = ClientError::fetch(
            "https://relay.example/api/search",
            "Search",
            Some(anyhow::anyhow!("HTTP status 502")),
        );
        assert_eq!(
            err.to_string(),
            "thaifcd: Search https://relay.example/api/search: fetch error: HTTP status 502"
        );
    }

    #[test]
    fn display_without_source_stops_at_code() {
        let err = ClientError::invalid_url("nope", "Detail", None);
        assert_eq!(err.to_string(), "thaifcd: Detail nope: invalid URL");
    }

    #[test]
    fn predicates_match_codes() {
        assert!(ClientError::fetch("u", "op", None).is_fetch());
        assert!(ClientError::timeout("u", "op", None).is_timeout());
        assert!(ClientError::invalid_url("u", "op", None).is_invalid_url());
        assert!(!ClientError::fetch("u", "op", None).is_timeout());
    }
}
