//! Repository layer over the in-memory contact collection.
//!
//! # Responsibility
//! - Own the ordered collection and its store handle.
//! - Enforce creation validation and id assignment before persistence.
//!
//! # Invariants
//! - Every successful mutation is followed by a full-collection save.
//! - A failed save leaves the in-memory collection as it was before the call.
//! - Repository APIs return semantic errors (`NotFound`) alongside store errors.

pub mod contact_repo;
pub mod search;
