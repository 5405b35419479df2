//! Database schema definitions

/// SQL to create the compliments table
pub const CREATE_COMPLIMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS compliments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    compliment TEXT NOT NULL,
    timestamp TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_compliments_timestamp ON compliments(timestamp)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_COMPLIMENTS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
