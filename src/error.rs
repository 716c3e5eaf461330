// Error taxonomy for a single fragment load.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FragmentError {
    /// The URL could not be turned into an absolute request URL.
    #[error("invalid fragment url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response (connect refused, DNS, reset).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error status: {status}")]
    HttpStatus { status: u16 },

    /// Status was fine but the body could not be read or decoded as text.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

impl FragmentError {
    /// Numeric status for `HttpStatus`, `None` for every other failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}
