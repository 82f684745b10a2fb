use thiserror::Error;

/// Errors returned by identifier resolution, page fetches, and pagination.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The caller's input could not be turned into a collection id
    /// (malformed URL, video not found, stream not live). No fetch was made.
    #[error("resolution error: {0}")]
    Resolution(String),

    /// The remote API failed: non-2xx status, transport failure or timeout,
    /// or a body that does not match the expected shape. `body` carries the
    /// raw payload (or the transport error text when there is none).
    #[error("upstream error during {context}{}: {body}", fmt_status(.status))]
    Upstream {
        context: String,
        status: Option<u16>,
        body: String,
    },

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The cancellation flag was raised between page fetches.
    #[error("collection cancelled after {pages_fetched} page(s)")]
    Cancelled { pages_fetched: usize },
}

impl IngestError {
    /// Builds an [`IngestError::Upstream`] for a request that never produced
    /// an HTTP status (connect failure, timeout, aborted body read).
    pub(crate) fn transport(context: &str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "request timed out"
        } else {
            "transport failure"
        };
        // Strip the URL: it carries the API key as a query parameter.
        let err = err.without_url();
        Self::Upstream {
            context: context.to_owned(),
            status: None,
            body: format!("{kind}: {err}"),
        }
    }

    /// `true` for failures that came from the remote API side.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// `true` when the caller's identifier could not be resolved.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}

#[allow(clippy::ref_option)]
fn fmt_status(status: &Option<u16>) -> String {
    status.map_or_else(String::new, |s| format!(" (HTTP {s})"))
}
