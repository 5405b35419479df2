//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with one table:
//! - compliments(id, name, compliment, timestamp)

pub mod schema;
pub mod sqlite;

pub use sqlite::ComplimentStore;
