//! Seed loader: first-run population of the contact store.
//!
//! # Responsibility
//! - Read the static seed document of initial contacts.
//! - Decide between persisted state and seed on start-up.
//!
//! # Invariants
//! - A persisted collection always wins over the seed document.
//! - Seeding writes the store at most once; later runs never re-read the seed.
//! - `initialize` never fails. Every failure is logged and degrades to a
//!   usable (possibly empty) collection.

mod source;

pub use source::{FileSeedSource, SeedLoadError, SeedSource, StaticSeedSource, DEFAULT_SEED_FILE};

use crate::model::contact::Contact;
use crate::repo::contact_repo::ContactRepository;
use crate::store::ContactStore;
use log::{error, info, warn};
use std::collections::HashSet;

/// Resolves the start-up collection from store-or-seed.
///
/// # Side effects
/// - Persists the seed contents only when the store reports no value at all.
/// - An unreadable store is never written here; the seed is returned in memory.
/// - Emits `seed_load` logging events; contact fields are never logged.
pub fn initialize(store: &impl ContactStore, seed: &impl SeedSource) -> Vec<Contact> {
    let store_is_empty = match store.load() {
        Ok(Some(contacts)) => {
            info!(
                "event=seed_load module=seed status=skipped source=store count={}",
                contacts.len()
            );
            return contacts;
        }
        Ok(None) => true,
        Err(err) => {
            error!(
                "event=store_load module=seed status=error error_code=store_unreadable error={}",
                err
            );
            false
        }
    };

    let contacts = match seed.fetch() {
        Ok(contacts) => contacts,
        Err(err) => {
            error!(
                "event=seed_load module=seed status=error source={} error_code=seed_unavailable error={}",
                seed.describe(),
                err
            );
            return Vec::new();
        }
    };

    warn_on_duplicate_ids(&contacts);

    if store_is_empty {
        if let Err(err) = store.save(&contacts) {
            error!(
                "event=seed_persist module=seed status=error error_code=store_write_failed error={}",
                err
            );
        }
    }

    info!(
        "event=seed_load module=seed status=ok source={} count={} persisted={}",
        seed.describe(),
        contacts.len(),
        store_is_empty
    );
    contacts
}

/// Builds a repository whose collection comes from [`initialize`].
pub fn bootstrap<S: ContactStore>(store: S, seed: &impl SeedSource) -> ContactRepository<S> {
    let contacts = initialize(&store, seed);
    ContactRepository::new(store, contacts)
}

fn warn_on_duplicate_ids(contacts: &[Contact]) {
    let mut seen = HashSet::with_capacity(contacts.len());
    let duplicates = contacts
        .iter()
        .filter(|contact| !seen.insert(contact.id))
        .count();
    if duplicates > 0 {
        warn!("event=seed_load module=seed status=warn duplicate_ids={duplicates}");
    }
}

#[cfg(test)]
mod tests {
    use super::{bootstrap, initialize, SeedLoadError, SeedSource, StaticSeedSource};
    use crate::db::{DbError, DbResult, KeyValueStore, MemoryKvStore};
    use crate::model::contact::{Contact, NewContact};
    use crate::store::{ContactStore, KvContactStore, DEFAULT_STORE_KEY};
    use std::cell::Cell;

    /// Memory backend whose next `get` can be made to fail once.
    #[derive(Default)]
    struct FlakyReadKv {
        inner: MemoryKvStore,
        fail_next_get: Cell<bool>,
    }

    impl KeyValueStore for FlakyReadKv {
        fn get(&self, key: &str) -> DbResult<Option<String>> {
            if self.fail_next_get.replace(false) {
                return Err(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> DbResult<()> {
            self.inner.set(key, value)
        }
    }

    struct BrokenSeed;

    impl SeedSource for BrokenSeed {
        fn fetch(&self) -> Result<Vec<Contact>, SeedLoadError> {
            Err(SeedLoadError::Parse {
                source_name: "broken".to_string(),
                source: serde_json::from_str::<Vec<Contact>>("[").unwrap_err(),
            })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn seed_doc() -> &'static str {
        r#"[{"id":1,"name":"Anna","email":"anna@example.com","phone":"600111222"},
            {"id":2,"name":"Biel","email":"biel@example.com","phone":"600333444","favorite":true}]"#
    }

    #[test]
    fn empty_store_takes_seed_and_persists_it() {
        let store = KvContactStore::new(MemoryKvStore::new());
        let seed = StaticSeedSource::new(seed_doc());

        let contacts = initialize(&store, &seed);
        assert_eq!(contacts.len(), 2);
        assert_eq!(store.load().unwrap(), Some(contacts));
    }

    #[test]
    fn persisted_value_wins_over_seed() {
        let store = KvContactStore::new(MemoryKvStore::new());
        store.save(&[]).unwrap();

        let contacts = initialize(&store, &StaticSeedSource::new(seed_doc()));
        assert!(contacts.is_empty());
    }

    #[test]
    fn seed_failure_with_empty_store_yields_empty_collection() {
        let kv = MemoryKvStore::new();
        let store = KvContactStore::new(&kv);

        let contacts = initialize(&store, &BrokenSeed);
        assert!(contacts.is_empty());
        assert!(kv.is_empty());
    }

    #[test]
    fn corrupt_store_is_left_untouched() {
        let kv = MemoryKvStore::new();
        kv.set(DEFAULT_STORE_KEY, "not json").unwrap();
        let store = KvContactStore::new(&kv);

        let contacts = initialize(&store, &StaticSeedSource::new(seed_doc()));
        assert_eq!(contacts.len(), 2);
        assert_eq!(
            kv.get(DEFAULT_STORE_KEY).unwrap().as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn failed_store_read_never_overwrites_saved_contacts() {
        let kv = FlakyReadKv::default();
        let seed = StaticSeedSource::new(seed_doc());
        let mut repo = bootstrap(KvContactStore::new(&kv), &seed);
        repo.remove(1).unwrap();
        repo.remove(2).unwrap();
        repo.add(NewContact::new("Carla", "carla@example.com", "933", false))
            .unwrap();

        kv.fail_next_get.set(true);
        let contacts = initialize(&KvContactStore::new(&kv), &seed);
        assert_eq!(contacts.len(), 2);

        let reloaded = initialize(&KvContactStore::new(&kv), &seed);
        let names = reloaded.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Carla"]);
    }
}
