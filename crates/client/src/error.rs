//! Failure classification for the fetch boundary.

use thiserror::Error;

/// Everything that can go wrong between issuing a search request and
/// holding a decoded page of cards.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or completed (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Server { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL is unusable.
    #[error("invalid endpoint URL: {0}")]
    BadEndpoint(String),
}

impl SearchError {
    /// Short message suitable for a non-blocking UI banner.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Network(_) => "Could not reach the card server".to_string(),
            SearchError::Server { status } => format!("Card server error ({status})"),
            SearchError::Decode(_) => "Card server sent an unreadable response".to_string(),
            SearchError::BadEndpoint(url) => format!("Invalid server address: {url}"),
        }
    }
}
