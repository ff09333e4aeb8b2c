use thiserror::Error;

/// Errors returned by the FPL API client.
#[derive(Debug, Error)]
pub enum FplError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The upstream returned a non-success HTTP status.
    #[error("upstream returned {status} for {context}")]
    Status {
        context: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
