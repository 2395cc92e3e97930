//! Add-contact form with live preview.

use crate::model::contact::{Contact, NewContact};
use crate::repo::contact_repo::{ContactRepository, RepoResult};
use crate::store::ContactStore;

const PREVIEW_NAME_PLACEHOLDER: &str = "Contact name";
const PREVIEW_EMAIL_PLACEHOLDER: &str = "email@example.com";
const PREVIEW_PHONE_PLACEHOLDER: &str = "123456789";

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub favorite: bool,
}

/// Preview card text; empty fields show a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPreview {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub contact: Contact,
    pub message: String,
}

impl AddForm {
    pub fn preview(&self) -> ContactPreview {
        ContactPreview {
            name: or_placeholder(&self.name, PREVIEW_NAME_PLACEHOLDER),
            email: or_placeholder(&self.email, PREVIEW_EMAIL_PLACEHOLDER),
            phone: or_placeholder(&self.phone, PREVIEW_PHONE_PLACEHOLDER),
        }
    }

    /// Validates and stores the contact.
    ///
    /// # Errors
    /// - `RepoError::Validation` naming the first invalid field.
    pub fn submit<S: ContactStore>(&self, repo: &mut ContactRepository<S>) -> RepoResult<AddOutcome> {
        let contact = repo.add(NewContact::new(
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.favorite,
        ))?;
        let message = format!("{} was added to your contact book.", contact.name);
        Ok(AddOutcome { contact, message })
    }

    /// Clears every field, as after "add another".
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::AddForm;
    use crate::db::MemoryKvStore;
    use crate::model::contact::ContactField;
    use crate::repo::contact_repo::{ContactRepository, RepoError};
    use crate::store::KvContactStore;

    #[test]
    fn preview_fills_placeholders_for_empty_fields() {
        let form = AddForm {
            name: "Anna".to_string(),
            ..AddForm::default()
        };
        let preview = form.preview();
        assert_eq!(preview.name, "Anna");
        assert_eq!(preview.email, "email@example.com");
        assert_eq!(preview.phone, "123456789");
    }

    #[test]
    fn submit_stores_trimmed_contact_and_confirms() {
        let mut repo =
            ContactRepository::new(KvContactStore::new(MemoryKvStore::new()), Vec::new());
        let mut form = AddForm {
            name: " Anna ".to_string(),
            email: "anna@example.com".to_string(),
            phone: "600111222".to_string(),
            favorite: true,
        };

        let outcome = form.submit(&mut repo).unwrap();
        assert_eq!(outcome.contact.id, 1);
        assert_eq!(outcome.contact.name, "Anna");
        assert_eq!(outcome.contact.favorite, Some(true));
        assert_eq!(outcome.message, "Anna was added to your contact book.");

        form.reset();
        assert_eq!(form, AddForm::default());
    }

    #[test]
    fn submit_surfaces_field_of_validation_error() {
        let mut repo =
            ContactRepository::new(KvContactStore::new(MemoryKvStore::new()), Vec::new());
        let form = AddForm {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: "600-111".to_string(),
            favorite: false,
        };

        match form.submit(&mut repo) {
            Err(RepoError::Validation(err)) => assert_eq!(err.field(), ContactField::Phone),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(repo.is_empty());
    }
}
