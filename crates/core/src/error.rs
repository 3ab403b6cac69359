//! Error types shared by all Veneer adapters.

/// Result type for adapter operations.
pub type VeneerResult<T> = Result<T, VeneerError>;

/// Error types that can occur while dispatching a tool call.
#[derive(Debug, thiserror::Error)]
pub enum VeneerError {
    /// The request never produced an HTTP response (connect/timeout/TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Vendor returned HTTP 429. Never retried locally; the hint is
    /// surfaced to the caller verbatim.
    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimited { retry_after: String },

    /// Vendor returned HTTP 401.
    #[error("Authentication failed - access token may be expired")]
    Authentication,

    /// Any other non-success vendor response, passed through with the
    /// status and whatever message the body carried.
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Tool name absent from the catalog. Raised before any HTTP request.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A path placeholder had no matching argument.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Malformed path template (unbalanced or empty placeholders).
    #[error("Invalid path template {template:?}: {reason}")]
    Template { template: String, reason: String },

    /// Tool arguments were not a JSON object, or a value could not be
    /// rendered into the request.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Invalid adapter configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl VeneerError {
    /// Whether the error was raised before any HTTP request was issued.
    ///
    /// Resolution errors are programmer/config mistakes and surface as
    /// protocol errors; everything else becomes an in-band error result.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_)
                | Self::MissingParameter(_)
                | Self::Template { .. }
                | Self::InvalidArguments(_)
                | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_message_includes_hint() {
        let err = VeneerError::RateLimited {
            retry_after: "30".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded. Retry after 30 seconds"
        );

        let err = VeneerError::RateLimited {
            retry_after: "unknown".to_string(),
        };
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn authentication_message_is_fixed() {
        assert_eq!(
            VeneerError::Authentication.to_string(),
            "Authentication failed - access token may be expired"
        );
    }

    #[test]
    fn unknown_tool_names_the_tool() {
        let err = VeneerError::UnknownTool("gists_frobnicate".to_string());
        assert_eq!(err.to_string(), "Unknown tool: gists_frobnicate");
    }

    #[test]
    fn resolution_errors_are_classified() {
        assert!(VeneerError::UnknownTool("x".into()).is_resolution_error());
        assert!(VeneerError::MissingParameter("owner".into()).is_resolution_error());
        assert!(!VeneerError::Authentication.is_resolution_error());
        assert!(!VeneerError::Api {
            status: 500,
            message: "boom".into()
        }
        .is_resolution_error());
    }
}
