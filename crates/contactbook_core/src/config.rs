//! Contact book location and key configuration.
//!
//! # Responsibility
//! - Resolve where the database and seed document live.
//! - Name the key under which the collection is stored.
//!
//! # Invariants
//! - Relative `seed_path` and `db_file_name` are resolved against `data_dir`.

use crate::seed::{FileSeedSource, DEFAULT_SEED_FILE};
use crate::store::DEFAULT_STORE_KEY;
use std::path::{Path, PathBuf};

/// Default database file name inside the data directory.
pub const DEFAULT_DB_FILE: &str = "contactbook.sqlite3";

/// Runtime configuration for opening a contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Root directory holding the database and, by default, the seed file.
    pub data_dir: PathBuf,
    /// Seed document path; relative paths are joined onto `data_dir`.
    pub seed_path: PathBuf,
    pub db_file_name: String,
    pub store_key: String,
}

impl BookConfig {
    /// Configuration with default file names inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            seed_path: PathBuf::from(DEFAULT_SEED_FILE),
            db_file_name: DEFAULT_DB_FILE.to_string(),
            store_key: DEFAULT_STORE_KEY.to_string(),
        }
    }

    pub fn with_seed_path(mut self, seed_path: impl Into<PathBuf>) -> Self {
        self.seed_path = seed_path.into();
        self
    }

    pub fn with_store_key(mut self, store_key: impl Into<String>) -> Self {
        self.store_key = store_key.into();
        self
    }

    /// Absolute-or-relative path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    /// Seed path resolved against `data_dir`.
    pub fn resolved_seed_path(&self) -> PathBuf {
        resolve_against(&self.data_dir, &self.seed_path)
    }

    pub fn seed_source(&self) -> FileSeedSource {
        FileSeedSource::new(self.resolved_seed_path())
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{BookConfig, DEFAULT_DB_FILE};
    use crate::store::DEFAULT_STORE_KEY;
    use std::path::PathBuf;

    #[test]
    fn defaults_live_inside_data_dir() {
        let config = BookConfig::new("/srv/book");
        assert_eq!(config.db_path(), PathBuf::from("/srv/book").join(DEFAULT_DB_FILE));
        assert_eq!(
            config.resolved_seed_path(),
            PathBuf::from("/srv/book/contacts.json")
        );
        assert_eq!(config.store_key, DEFAULT_STORE_KEY);
    }

    #[test]
    fn absolute_seed_path_is_kept() {
        let config = BookConfig::new("/srv/book").with_seed_path("/opt/seed.json");
        assert_eq!(config.resolved_seed_path(), PathBuf::from("/opt/seed.json"));
    }
}
