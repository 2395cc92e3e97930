//! List view with optional search.

use super::detail::DetailQuery;
use crate::model::contact::Contact;
use crate::repo::contact_repo::ContactRepository;
use crate::repo::search::SearchTerm;
use crate::store::ContactStore;

/// One table row with its navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub contact: Contact,
    /// Query string opening the detail view.
    pub view_link: String,
    /// Query string opening the detail view in edit mode.
    pub edit_link: String,
}

impl ContactRow {
    fn new(contact: Contact) -> Self {
        Self {
            view_link: DetailQuery::view(contact.id).to_query_string(),
            edit_link: DetailQuery::edit(contact.id).to_query_string(),
            contact,
        }
    }
}

/// What to show when the list has no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoContacts,
    NoMatches { term: String },
}

impl EmptyState {
    pub fn message(&self) -> String {
        match self {
            Self::NoContacts => "There are no contacts yet.".to_string(),
            Self::NoMatches { term } => format!("No contacts match \"{term}\"."),
        }
    }
}

/// State of the contact list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ContactRow>,
    /// Search term that produced `rows`, if any.
    pub term: Option<SearchTerm>,
    pub empty: Option<EmptyState>,
}

impl ListView {
    /// Builds the list for `raw_query`; blank input lists everything.
    pub fn build<S: ContactStore>(repo: &ContactRepository<S>, raw_query: &str) -> Self {
        match SearchTerm::parse(raw_query) {
            Some(term) => Self::search(repo, term),
            None => Self::all(repo),
        }
    }

    /// Every contact in display order.
    pub fn all<S: ContactStore>(repo: &ContactRepository<S>) -> Self {
        let rows = repo
            .contacts()
            .iter()
            .cloned()
            .map(ContactRow::new)
            .collect::<Vec<_>>();
        let empty = rows.is_empty().then_some(EmptyState::NoContacts);
        Self {
            rows,
            term: None,
            empty,
        }
    }

    pub fn search<S: ContactStore>(repo: &ContactRepository<S>, term: SearchTerm) -> Self {
        let rows = repo
            .search(&term)
            .into_iter()
            .map(ContactRow::new)
            .collect::<Vec<_>>();
        let empty = rows.is_empty().then(|| EmptyState::NoMatches {
            term: term.as_str().to_string(),
        });
        Self {
            rows,
            term: Some(term),
            empty,
        }
    }

    /// Number of rows shown.
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}
