//! Delete confirmation flow.

use crate::model::contact::{Contact, ContactId};
use crate::repo::contact_repo::{ContactRepository, RepoResult};
use crate::store::ContactStore;

/// Result of a confirmed deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: Contact,
    pub message: String,
}

/// Removes the contact the user confirmed.
///
/// # Errors
/// - `RepoError::NotFound` when `id` is no longer present.
pub fn confirm_delete<S: ContactStore>(
    repo: &mut ContactRepository<S>,
    id: ContactId,
) -> RepoResult<DeleteOutcome> {
    let removed = repo.remove(id)?;
    let message = format!("{} was deleted.", removed.name);
    Ok(DeleteOutcome { removed, message })
}
