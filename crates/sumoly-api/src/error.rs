use thiserror::Error;

/// Top-level error type for the `sumoly-api` crate.
///
/// The first group is local: those errors are raised before any network I/O
/// and are always recoverable by correcting the input. Everything after is a
/// transport- or decode-level failure. Note that a non-2xx HTTP status is
/// *not* an error by itself -- the raw response is returned to the caller,
/// who may opt into [`Error::RemoteApi`] via
/// [`ApiResponse::error_for_status`](crate::ApiResponse::error_for_status).
#[derive(Debug, Error)]
pub enum Error {
    // ── Local (pre-network) ─────────────────────────────────────────
    /// A request payload or query-parameter map failed schema validation.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// An HTTP verb outside the supported set reached the executor.
    /// Unreachable through the endpoint catalog; guards direct
    /// [`Client::request`](crate::Client::request) callers.
    #[error("Invalid request method: {method}")]
    InvalidMethod { method: String },

    /// A name-lookup path parameter contains characters the API rejects
    /// even when URL-encoded (`;`, `/`, `%`, `\`).
    #[error("Invalid name {name:?}: must not contain any of `;` `/` `%` `\\`")]
    InvalidName { name: String },

    // ── Construction ────────────────────────────────────────────────
    /// The regional-endpoint discovery probe failed. The client cannot
    /// be used.
    #[error("Endpoint resolution failed: {message}")]
    EndpointResolution { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON serialization of a request body failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A read-modify-write update fetched a resource whose response
    /// carried no `ETag` header, so no conditional write can be issued.
    #[error("No ETag header on GET {url}; cannot perform conditional update")]
    MissingEtag { url: String },

    // ── Remote (opt-in) ─────────────────────────────────────────────
    /// Non-2xx HTTP status, produced only by
    /// [`ApiResponse::error_for_status`](crate::ApiResponse::error_for_status).
    #[error("Remote API error (HTTP {status}): {body}")]
    RemoteApi { status: u16, body: String },
}

impl Error {
    /// Returns `true` if this error was raised before any network I/O
    /// (fix the input and retry).
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::InvalidMethod { .. } | Self::InvalidName { .. }
        )
    }

    /// Returns `true` if this is a transient transport failure worth
    /// retrying at the caller's discretion.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
