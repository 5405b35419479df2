//! # Compliments - a tiny kindness API
//!
//! Stores short compliment messages in SQLite and serves them over HTTP.
//!
//! The service provides:
//! - `GET /` liveness banner
//! - `GET /compliment` the most recently submitted compliment
//! - `POST /compliment` submit a new compliment
//!
//! Handlers hold no database state between requests: each request opens its
//! own connection, uses it, and closes it on the way out.

pub mod compliment;
pub mod config;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use compliment::Compliment;
pub use storage::ComplimentStore;

/// Result type alias for compliments operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for compliments operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
