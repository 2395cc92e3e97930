//! Store adapter: the whole contact collection as one serialized blob.
//!
//! # Responsibility
//! - Load and save the full collection under one fixed key.
//! - Keep the serialization format (JSON array) in one place.
//!
//! # Invariants
//! - `load` returns `None` until the first `save` for this key.
//! - `save` overwrites the previous blob in one backend write.
//! - The blob carries no schema version.

mod kv_store;

pub use kv_store::{KvContactStore, DEFAULT_STORE_KEY};

use crate::db::DbError;
use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while reading or writing the persisted collection.
#[derive(Debug)]
pub enum StoreError {
    /// Backend read/write failure.
    Db(DbError),
    /// Collection could not be encoded.
    Serialize(serde_json::Error),
    /// Stored blob is not a valid contact array.
    Corrupt { key: String, source: serde_json::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize contacts: {err}"),
            Self::Corrupt { key, source } => {
                write!(f, "stored value under `{key}` is not a contact list: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Persistence contract for the full contact collection.
pub trait ContactStore {
    /// Reads the persisted collection, or `None` if nothing was saved yet.
    fn load(&self) -> StoreResult<Option<Vec<Contact>>>;
    /// Replaces the persisted collection with `contacts`.
    fn save(&self, contacts: &[Contact]) -> StoreResult<()>;
}

impl<S: ContactStore + ?Sized> ContactStore for &S {
    fn load(&self) -> StoreResult<Option<Vec<Contact>>> {
        (**self).load()
    }

    fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        (**self).save(contacts)
    }
}
