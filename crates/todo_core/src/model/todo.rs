//! Todo record.
//!
//! # Responsibility
//! - Define the record stored in a `TodoList` and persisted as JSON.
//! - Provide constructors that enforce creation defaults.
//!
//! # Invariants
//! - `id` is an opaque string; callers must not parse it.
//! - `owner` is independent of `title` and empty unless set explicitly.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = String;

/// One entry of the todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Generated at creation. Not guaranteed unique across imported data.
    pub id: TodoId,
    /// Free-form owner label. Lists are not scoped by it.
    pub owner: String,
    /// Task description. Empty titles are allowed.
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Creates a pending todo with a generated id and no owner.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_owner(title, String::new())
    }

    /// Creates a pending todo with a generated id and the given owner label.
    pub fn with_owner(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            owner: owner.into(),
            title: title.into(),
            completed: false,
        }
    }

    /// Marks this todo as completed. Calling it twice is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Human-readable status label used by reports.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

fn generate_id() -> TodoId {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::Todo;

    #[test]
    fn new_sets_pending_defaults() {
        let todo = Todo::new("write report");
        assert_eq!(todo.title, "write report");
        assert_eq!(todo.owner, "");
        assert!(!todo.completed);
        assert!(!todo.id.is_empty());
    }

    #[test]
    fn ids_differ_between_rapid_calls() {
        let first = Todo::new("a");
        let second = Todo::new("a");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn status_label_tracks_completion() {
        let mut todo = Todo::new("x");
        assert_eq!(todo.status_label(), "Pending");
        todo.complete();
        todo.complete();
        assert_eq!(todo.status_label(), "Completed");
    }
}
