//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the canonical contact record and its creation/edit inputs.
//! - Own the creation-time validation rules.
//!
//! # Invariants
//! - Every contact is identified by a repository-assigned `ContactId`.
//! - The ordered collection of contacts is the unit of persistence.

pub mod contact;
