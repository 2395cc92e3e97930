//! Detail view, its navigation parameters, and the inline edit form.

use crate::model::contact::{Contact, ContactId, ContactPatch};
use crate::repo::contact_repo::{ContactRepository, RepoResult};
use crate::store::ContactStore;
use url::form_urlencoded;

const ID_PARAM: &str = "id";
const EDIT_PARAM: &str = "edit";

/// Navigation parameters consumed by the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailQuery {
    /// `None` when `id` is missing, non-numeric, or zero.
    pub id: Option<ContactId>,
    /// `true` only for the literal `edit=true`.
    pub edit: bool,
}

impl DetailQuery {
    pub fn view(id: ContactId) -> Self {
        Self {
            id: Some(id),
            edit: false,
        }
    }

    pub fn edit(id: ContactId) -> Self {
        Self {
            id: Some(id),
            edit: true,
        }
    }

    /// Parses a query string such as `?id=3&edit=true`.
    ///
    /// The first occurrence of each parameter wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut id = None;
        let mut edit = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                ID_PARAM if id.is_none() => id = Some(value.trim().parse::<ContactId>().ok()),
                EDIT_PARAM if edit.is_none() => edit = Some(value == "true"),
                _ => {}
            }
        }
        Self {
            id: id.flatten().filter(|id| *id != 0),
            edit: edit.unwrap_or(false),
        }
    }

    /// Encodes back to `id=N` or `id=N&edit=true`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(id) = self.id {
            serializer.append_pair(ID_PARAM, &id.to_string());
        }
        if self.edit {
            serializer.append_pair(EDIT_PARAM, "true");
        }
        serializer.finish()
    }
}

/// Editable fields, prefilled from the stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl EditForm {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }

    /// The form always submits all three fields.
    pub fn into_patch(self) -> ContactPatch {
        ContactPatch {
            name: Some(self.name),
            email: Some(self.email),
            phone: Some(self.phone),
        }
    }
}

/// State of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// No usable `id` parameter was given.
    MissingId,
    NotFound { id: ContactId },
    Found {
        contact: Contact,
        edit_mode: bool,
        form: EditForm,
    },
}

impl DetailView {
    pub fn load<S: ContactStore>(repo: &ContactRepository<S>, query: &DetailQuery) -> Self {
        let Some(id) = query.id else {
            return Self::MissingId;
        };
        match repo.find_by_id(id) {
            Some(contact) => Self::Found {
                form: EditForm::from_contact(contact),
                contact: contact.clone(),
                edit_mode: query.edit,
            },
            None => Self::NotFound { id },
        }
    }

    /// User-facing message for the non-found states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::MissingId => Some("No contact was specified."),
            Self::NotFound { .. } => Some("The requested contact does not exist."),
            Self::Found { .. } => None,
        }
    }
}

/// Applies a submitted edit form. Values are stored as entered.
pub fn submit_edit<S: ContactStore>(
    repo: &mut ContactRepository<S>,
    id: ContactId,
    form: EditForm,
) -> RepoResult<Contact> {
    repo.update(id, form.into_patch())
}
