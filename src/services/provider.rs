use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to an external service.
///
/// Every variant collapses into a single failure event on the way back to
/// the update loop, but keeps enough detail to tell the causes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Client misconfigured (missing API key, bad URL).
    Config(String),
    /// Request body could not be built.
    Encode(String),
    /// Connection failure or timeout.
    Network(String),
    /// Service answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// Response body does not have the expected shape.
    Decode(String),
    /// Service answered successfully but reported an error in its payload.
    Service(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Config(msg) => write!(f, "config error: {msg}"),
            ServiceError::Encode(msg) => write!(f, "encode error: {msg}"),
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ServiceError::Decode(msg) => write!(f, "decode error: {msg}"),
            ServiceError::Service(msg) => write!(f, "service error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ServiceError::Decode(e.to_string())
        } else if e.is_builder() {
            ServiceError::Config(e.to_string())
        } else {
            ServiceError::Network(e.to_string())
        }
    }
}

/// Looks up a term in a remote dictionary.
#[async_trait]
pub trait Dictionary: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the raw response body for `term`.
    async fn lookup(&self, term: &str) -> Result<String, ServiceError>;
}

/// Creates flashcards in a study tool.
#[async_trait]
pub trait Flashcards: Send + Sync {
    fn name(&self) -> &str;

    /// Makes sure `deck` exists, creating it if needed.
    async fn prepare_deck(&self, deck: &str) -> Result<(), ServiceError>;

    /// Adds a card and returns the id the service assigned to it.
    async fn create_card(&self, front: &str, back: &str) -> Result<i64, ServiceError>;
}
