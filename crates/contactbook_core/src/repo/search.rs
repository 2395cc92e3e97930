//! Search term type and matching rules.

use crate::model::contact::Contact;

/// Non-empty, trimmed search term.
///
/// An empty search has no meaning for the repository; callers branch to
/// "show all" before constructing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    lowered: String,
}

impl SearchTerm {
    /// Trims `raw` and returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            lowered: trimmed.to_lowercase(),
        })
    }

    /// The lower-cased term as matched against contacts.
    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Case-insensitive on name and email; phone is compared against the
    /// lower-cased term as-is.
    pub fn matches(&self, contact: &Contact) -> bool {
        contact.name.to_lowercase().contains(&self.lowered)
            || contact.email.to_lowercase().contains(&self.lowered)
            || contact.phone.contains(&self.lowered)
    }
}
