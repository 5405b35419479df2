//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::compliment::Compliment;
use super::schema;

/// SQLite-backed storage for compliments
///
/// Connections are cheap to open and close; callers that serve HTTP traffic
/// open one store per request and drop it when the request completes.
pub struct ComplimentStore {
    conn: Connection,
}

impl ComplimentStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema. Idempotent: safe on every open.
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert a compliment and return its assigned row id
    pub fn insert_compliment(&self, name: &str, compliment: &str, timestamp: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO compliments (name, compliment, timestamp) VALUES (?1, ?2, ?3)",
            params![name, compliment, timestamp],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The most recently submitted compliment, or `None` on an empty store
    ///
    /// Rows sharing a timestamp are broken by highest id, so the later
    /// insert always wins.
    pub fn latest_compliment(&self) -> Result<Option<Compliment>> {
        self.conn
            .query_row(
                "SELECT id, name, compliment, timestamp FROM compliments \
                 ORDER BY timestamp DESC, id DESC LIMIT 1",
                [],
                |row| Self::row_to_compliment(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Count all compliments
    pub fn count_compliments(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM compliments", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Compliment
    fn row_to_compliment(row: &rusqlite::Row) -> rusqlite::Result<Compliment> {
        Ok(Compliment {
            id: row.get(0)?,
            name: row.get(1)?,
            compliment: row.get(2)?,
            timestamp: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliment::current_timestamp;

    #[test]
    fn test_insert_then_latest() {
        let store = ComplimentStore::open_in_memory().unwrap();

        let id = store
            .insert_compliment("Ann", "Great work!", &current_timestamp())
            .unwrap();
        assert!(id > 0);

        let latest = store.latest_compliment().unwrap().unwrap();
        assert_eq!(latest.id, id);
        assert_eq!(latest.name, "Ann");
        assert_eq!(latest.compliment, "Great work!");
    }

    #[test]
    fn test_latest_on_empty_store() {
        let store = ComplimentStore::open_in_memory().unwrap();
        assert!(store.latest_compliment().unwrap().is_none());
    }

    #[test]
    fn test_latest_wins_across_inserts() {
        let store = ComplimentStore::open_in_memory().unwrap();

        for i in 1..=5 {
            store
                .insert_compliment("Ann", &format!("compliment {}", i), &current_timestamp())
                .unwrap();
        }

        let latest = store.latest_compliment().unwrap().unwrap();
        assert_eq!(latest.compliment, "compliment 5");
    }

    #[test]
    fn test_equal_timestamps_break_by_highest_id() {
        let store = ComplimentStore::open_in_memory().unwrap();

        let ts = "2026-08-22T12:00:00.000000Z";
        let first = store.insert_compliment("Ann", "first", ts).unwrap();
        let second = store.insert_compliment("Bea", "second", ts).unwrap();
        assert!(second > first);

        let latest = store.latest_compliment().unwrap().unwrap();
        assert_eq!(latest.id, second);
        assert_eq!(latest.compliment, "second");
    }

    #[test]
    fn test_count_compliments() {
        let store = ComplimentStore::open_in_memory().unwrap();
        assert_eq!(store.count_compliments().unwrap(), 0);

        store
            .insert_compliment("Ann", "one", &current_timestamp())
            .unwrap();
        store
            .insert_compliment("Bea", "two", &current_timestamp())
            .unwrap();
        assert_eq!(store.count_compliments().unwrap(), 2);
    }

    #[test]
    fn test_schema_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compliments.db");

        {
            let store = ComplimentStore::open(&path).unwrap();
            store
                .insert_compliment("Ann", "persists", &current_timestamp())
                .unwrap();
        }

        // Schema statements run again on reopen and must not disturb data.
        let store = ComplimentStore::open(&path).unwrap();
        assert_eq!(store.count_compliments().unwrap(), 1);
        assert_eq!(
            store.latest_compliment().unwrap().unwrap().compliment,
            "persists"
        );
    }
}
