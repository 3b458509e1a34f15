//! Error type shared by all backend calls.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection, timeout, or body decode.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The server answered 2xx but flagged the payload as unsuccessful.
    #[error("backend reported an unsuccessful response")]
    Backend,
}
