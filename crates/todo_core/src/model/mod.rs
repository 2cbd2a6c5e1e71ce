//! Todo domain model.
//!
//! # Responsibility
//! - Define the single persisted record shape shared by list, store and report.
//!
//! # Invariants
//! - Field names on the wire are `id`, `owner`, `title`, `completed`.
//! - A freshly created item is never completed.

pub mod todo;
