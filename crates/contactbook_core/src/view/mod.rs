//! View controllers: page-level use-cases returning view state.
//!
//! # Responsibility
//! - Turn repository data into list/detail/add/delete view state.
//! - Carry navigation parameters between list and detail views.
//!
//! # Invariants
//! - Controllers never render; callers decide how to present the state.
//! - Blank search input always means "show all" and never reaches the repository.
//! - Not-found is a view state, not an error.

pub mod add;
pub mod delete;
pub mod detail;
pub mod list;

pub use add::{AddForm, AddOutcome, ContactPreview};
pub use delete::{confirm_delete, DeleteOutcome};
pub use detail::{submit_edit, DetailQuery, DetailView, EditForm};
pub use list::{ContactRow, EmptyState, ListView};
