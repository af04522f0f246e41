//! Wire types for the update-all endpoint.

/// A successful update as seen by the page.
///
/// Only `message` matters to the flow. The per-region counts the server adds
/// are kept when they are non-negative integers and are only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAllResponse {
    pub message: Option<String>,
    pub success_count: Option<u64>,
    pub failed_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Non-success status; holds the server's `error` or a generic fallback.
    #[error("{0}")]
    Server(String),

    /// The response body was not JSON.
    #[error("{0}")]
    Decode(String),
}
