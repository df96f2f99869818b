use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the download engine.
///
/// Tiering is positional, not structural: any error from the playlist fetch
/// aborts the run, while the same error from a segment fetch is logged by
/// the session and the loop continues.
#[derive(Debug, Error)]
pub enum GrabError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
