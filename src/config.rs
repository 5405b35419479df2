use std::path::{Path, PathBuf};

use crate::Result;

/// Default database file, resolved against the working directory at startup
pub fn default_database_path() -> PathBuf {
    PathBuf::from("compliments.db")
}

/// Create the database file's parent directory if it is missing
pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
