//! `ContactStore` over any `KeyValueStore`.

use super::{ContactStore, StoreError, StoreResult};
use crate::db::KeyValueStore;
use crate::model::contact::Contact;
use log::debug;

/// Key holding the serialized collection when no override is configured.
pub const DEFAULT_STORE_KEY: &str = "contact_book.contacts";

/// Store adapter writing the collection as a JSON array under one key.
pub struct KvContactStore<K: KeyValueStore> {
    kv: K,
    key: String,
}

impl<K: KeyValueStore> KvContactStore<K> {
    /// Uses [`DEFAULT_STORE_KEY`].
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, DEFAULT_STORE_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }
}

impl<K: KeyValueStore> ContactStore for KvContactStore<K> {
    fn load(&self) -> StoreResult<Option<Vec<Contact>>> {
        let Some(raw) = self.kv.get(&self.key)? else {
            return Ok(None);
        };
        let contacts = serde_json::from_str::<Vec<Contact>>(&raw).map_err(|source| {
            StoreError::Corrupt {
                key: self.key.clone(),
                source,
            }
        })?;
        debug!(
            "event=store_load module=store status=ok count={}",
            contacts.len()
        );
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        let raw = serde_json::to_string(contacts).map_err(StoreError::Serialize)?;
        self.kv.set(&self.key, &raw)?;
        debug!(
            "event=store_save module=store status=ok count={} bytes={}",
            contacts.len(),
            raw.len()
        );
        Ok(())
    }
}
