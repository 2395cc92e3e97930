//! Contact repository: ordered in-memory collection with write-through saves.
//!
//! # Responsibility
//! - Provide find/add/update/remove/search over the loaded collection.
//! - Assign ids as `max(existing) + 1`, starting at 1.
//!
//! # Invariants
//! - Insertion order is display order; removal keeps the order of the rest.
//! - `add` validates name -> email -> phone; `update` does not validate.
//! - Validation failures and misses never reach the store.

use crate::model::contact::{Contact, ContactId, ContactPatch, ContactValidationError, NewContact};
use crate::repo::search::SearchTerm;
use crate::store::{ContactStore, StoreError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact mutations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    NotFound(ContactId),
    Store(StoreError),
    /// The largest existing id leaves no room for another.
    IdSpaceExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::IdSpaceExhausted => write!(f, "no contact id left to assign"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) | Self::IdSpaceExhausted => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository owning the collection and the store it persists to.
pub struct ContactRepository<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: ContactStore> ContactRepository<S> {
    /// Wraps an already-initialized collection. Nothing is persisted here.
    pub fn new(store: S, contacts: Vec<Contact>) -> Self {
        Self { store, contacts }
    }

    /// All contacts in display order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// First contact with `id`, if any.
    pub fn find_by_id(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// Id the next `add` would assign.
    pub fn next_id(&self) -> RepoResult<ContactId> {
        match self.contacts.iter().map(|contact| contact.id).max() {
            Some(max) => max.checked_add(1).ok_or(RepoError::IdSpaceExhausted),
            None => Ok(1),
        }
    }

    /// Validates, assigns the next id, appends and persists.
    ///
    /// Text fields are trimmed before validation and stored trimmed.
    ///
    /// # Errors
    /// - `Validation` for the first failing field; nothing is changed.
    /// - `Store` when the save fails; the new record is dropped again.
    pub fn add(&mut self, input: NewContact) -> RepoResult<Contact> {
        let input = input.trimmed();
        if let Err(err) = input.validate() {
            debug!(
                "event=contact_add module=repo status=rejected field={}",
                err.field()
            );
            return Err(err.into());
        }

        let contact = input.into_contact(self.next_id()?);
        self.contacts.push(contact.clone());
        if let Err(err) = self.persist("contact_add") {
            self.contacts.pop();
            return Err(err);
        }

        info!(
            "event=contact_add module=repo status=ok id={} count={}",
            contact.id,
            self.contacts.len()
        );
        Ok(contact)
    }

    /// Merges `patch` into the contact with `id` and persists.
    ///
    /// No validation is applied to edited values.
    pub fn update(&mut self, id: ContactId, patch: ContactPatch) -> RepoResult<Contact> {
        let index = self.position(id)?;
        let previous = self.contacts[index].clone();
        self.contacts[index].apply_patch(patch);

        if let Err(err) = self.persist("contact_update") {
            self.contacts[index] = previous;
            return Err(err);
        }

        info!("event=contact_update module=repo status=ok id={id}");
        Ok(self.contacts[index].clone())
    }

    /// Removes the contact with `id`, keeping the order of the rest.
    ///
    /// Returns the removed record for confirmation messages.
    pub fn remove(&mut self, id: ContactId) -> RepoResult<Contact> {
        let index = self.position(id)?;
        let removed = self.contacts.remove(index);

        if let Err(err) = self.persist("contact_remove") {
            self.contacts.insert(index, removed);
            return Err(err);
        }

        info!(
            "event=contact_remove module=repo status=ok id={} count={}",
            id,
            self.contacts.len()
        );
        Ok(removed)
    }

    /// Contacts matching `term`, in display order.
    pub fn search(&self, term: &SearchTerm) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|contact| term.matches(contact))
            .cloned()
            .collect()
    }

    fn position(&self, id: ContactId) -> RepoResult<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.id == id)
            .ok_or(RepoError::NotFound(id))
    }

    fn persist(&self, event: &'static str) -> RepoResult<()> {
        self.store.save(&self.contacts).map_err(|err| {
            error!(
                "event={} module=repo status=error error_code=store_write_failed error={}",
                event, err
            );
            RepoError::Store(err)
        })
    }
}
