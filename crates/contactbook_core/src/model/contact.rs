//! Contact domain model.
//!
//! # Responsibility
//! - Define the stored contact shape shared by seed document and store blob.
//! - Validate creation input in a fixed field order.
//!
//! # Invariants
//! - `id` is never user-supplied; the repository assigns it.
//! - Validation checks run name -> email -> phone and stop at the first failure.
//! - Edits are not validated; only creation input is.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum name length at creation time, in UTF-16 code units.
pub const NAME_MIN_CHARS: usize = 2;

static PHONE_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));

/// Integer identifier, unique within one collection.
pub type ContactId = i64;

/// Stored contact record.
///
/// Serialized field names match the seed document schema
/// `{id, name, email, phone, favorite?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Captured on creation only. Absent and `Some(false)` both read as "not favorite".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl Contact {
    /// Returns whether the contact is flagged as favorite.
    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }

    /// Merges the supplied patch fields into this record.
    ///
    /// `id` and `favorite` are never touched.
    pub fn apply_patch(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}

/// Creation input for a new contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub favorite: bool,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        favorite: bool,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            favorite,
        }
    }

    /// Returns a copy with surrounding whitespace stripped from text fields.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            favorite: self.favorite,
        }
    }

    /// Checks creation constraints in name -> email -> phone order.
    ///
    /// # Errors
    /// - Returns the first violated constraint only.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.encode_utf16().count() < NAME_MIN_CHARS {
            return Err(ContactValidationError::NameTooShort {
                min_chars: NAME_MIN_CHARS,
            });
        }
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err(ContactValidationError::EmailMalformed);
        }
        if !PHONE_DIGITS_RE.is_match(&self.phone) {
            return Err(ContactValidationError::PhoneNotDigits);
        }
        Ok(())
    }

    /// Builds the stored record once an id has been assigned.
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            favorite: Some(self.favorite),
        }
    }
}

/// Partial edit of the user-editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// User-editable contact field, used to name validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creation-time validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    NameTooShort { min_chars: usize },
    EmailMalformed,
    PhoneNotDigits,
}

impl ContactValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> ContactField {
        match self {
            Self::NameTooShort { .. } => ContactField::Name,
            Self::EmailMalformed => ContactField::Email,
            Self::PhoneNotDigits => ContactField::Phone,
        }
    }

    /// User-facing reason text.
    pub fn reason(&self) -> String {
        match self {
            Self::NameTooShort { min_chars } => {
                format!("name must have at least {min_chars} characters")
            }
            Self::EmailMalformed => "please enter a valid email address".to_string(),
            Self::PhoneNotDigits => "phone may only contain digits".to_string(),
        }
    }
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field(), self.reason())
    }
}

impl Error for ContactValidationError {}
