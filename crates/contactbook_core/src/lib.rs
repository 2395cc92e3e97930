//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod store;
pub mod view;

pub use config::BookConfig;
pub use db::{DbError, KeyValueStore, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    Contact, ContactField, ContactId, ContactPatch, ContactValidationError, NewContact,
};
pub use repo::contact_repo::{ContactRepository, RepoError, RepoResult};
pub use repo::search::SearchTerm;
pub use seed::{bootstrap, initialize, FileSeedSource, SeedLoadError, SeedSource, StaticSeedSource};
pub use store::{ContactStore, KvContactStore, StoreError, StoreResult};

/// Repository backed by the on-disk SQLite key-value store.
pub type SqliteContactRepository = ContactRepository<KvContactStore<SqliteKvStore>>;

/// Opens the database named by `config` and bootstraps the repository
/// from store-or-seed.
///
/// # Errors
/// - Returns an error only when the database cannot be opened or migrated.
///   Seed problems degrade to an empty book.
pub fn open_contact_book(config: &BookConfig) -> Result<SqliteContactRepository, DbError> {
    let kv = SqliteKvStore::open(config.db_path())?;
    let store = KvContactStore::with_key(kv, config.store_key.as_str());
    Ok(bootstrap(store, &config.seed_source()))
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
