//! Ordered todo collection and positional mutations.
//!
//! # Responsibility
//! - Own the in-memory sequence of `Todo` records.
//! - Provide 1-based positional complete/delete with bounds checking.
//!
//! # Invariants
//! - Insertion order defines positions; position `1` is the first item.
//! - A failed mutation leaves the list untouched.
//! - This module never logs; errors go back to the caller.

use crate::model::todo::Todo;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Error for positional list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Position is `0` or greater than the list length.
    InvalidIndex { index: usize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => {
                write!(f, "invalid index {index}: expected 1..={len}")
            }
        }
    }
}

impl Error for ListError {}

/// Ordered list of todo items addressed by 1-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing records, keeping their order.
    pub fn from_items(items: Vec<Todo>) -> Self {
        Self { items }
    }

    /// Appends a pending todo and returns it.
    pub fn add(&mut self, title: impl Into<String>) -> &Todo {
        self.push(Todo::new(title))
    }

    /// Appends a pending todo carrying an owner label.
    pub fn add_with_owner(&mut self, title: impl Into<String>, owner: impl Into<String>) -> &Todo {
        self.push(Todo::with_owner(title, owner))
    }

    /// Marks the item at `index` (1-based) as completed.
    ///
    /// # Errors
    /// - `ListError::InvalidIndex` when `index` is `0` or past the end.
    pub fn complete(&mut self, index: usize) -> ListResult<()> {
        let slot = self.slot(index)?;
        self.items[slot].complete();
        Ok(())
    }

    /// Removes and returns the item at `index` (1-based).
    ///
    /// Later items shift down by one position.
    ///
    /// # Errors
    /// - `ListError::InvalidIndex` when `index` is `0` or past the end.
    pub fn delete(&mut self, index: usize) -> ListResult<Todo> {
        let slot = self.slot(index)?;
        Ok(self.items.remove(slot))
    }

    /// Returns the item at `index` (1-based), if any.
    pub fn get(&self, index: usize) -> Option<&Todo> {
        index.checked_sub(1).and_then(|slot| self.items.get(slot))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    /// Swaps in a whole new sequence. Used by load after a full decode.
    pub(crate) fn replace_items(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    fn push(&mut self, todo: Todo) -> &Todo {
        self.items.push(todo);
        &self.items[self.items.len() - 1]
    }

    fn slot(&self, index: usize) -> ListResult<usize> {
        if index == 0 || index > self.items.len() {
            return Err(ListError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        Ok(index - 1)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{ListError, TodoList};

    fn list_of(count: usize) -> TodoList {
        let mut list = TodoList::new();
        for i in 1..=count {
            list.add(format!("task{i}"));
        }
        list
    }

    #[test]
    fn add_appends_pending_item() {
        let mut list = list_of(2);
        let added = list.add("").clone();

        assert_eq!(list.len(), 3);
        assert_eq!(added.title, "");
        assert!(!added.completed);
        assert_eq!(list.get(3), Some(&added));
    }

    #[test]
    fn add_with_owner_keeps_owner_separate_from_title() {
        let mut list = TodoList::new();
        let added = list.add_with_owner("buy milk", "alice");
        assert_eq!(added.owner, "alice");
        assert_eq!(added.title, "buy milk");
    }

    #[test]
    fn complete_only_touches_target() {
        let mut list = list_of(3);
        list.complete(2).expect("position 2 should be valid");

        let flags: Vec<bool> = list.iter().map(|todo| todo.completed).collect();
        assert_eq!(flags, vec![false, true, false]);

        list.complete(2).expect("completing twice should succeed");
        assert!(list.get(2).expect("item exists").completed);
    }

    #[test]
    fn out_of_range_positions_are_rejected_without_mutation() {
        let mut list = list_of(2);
        let before = list.clone();

        for index in [0, 3, usize::MAX] {
            assert_eq!(
                list.complete(index).unwrap_err(),
                ListError::InvalidIndex { index, len: 2 }
            );
            assert_eq!(
                list.delete(index).unwrap_err(),
                ListError::InvalidIndex { index, len: 2 }
            );
        }
        assert_eq!(list, before);
    }

    #[test]
    fn empty_list_rejects_first_position() {
        let mut list = TodoList::new();
        assert!(list.complete(1).is_err());
        assert!(list.delete(1).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn delete_shifts_later_items() {
        let mut list = list_of(4);
        let removed = list.delete(2).expect("position 2 should be valid");

        assert_eq!(removed.title, "task2");
        let titles: Vec<&str> = list.iter().map(|todo| todo.title.as_str()).collect();
        assert_eq!(titles, vec!["task1", "task3", "task4"]);
    }

    #[test]
    fn get_is_one_based() {
        let list = list_of(1);
        assert!(list.get(0).is_none());
        assert_eq!(list.get(1).map(|todo| todo.title.as_str()), Some("task1"));
        assert!(list.get(2).is_none());
    }

    #[test]
    fn invalid_index_message_names_range() {
        let err = ListError::InvalidIndex { index: 5, len: 3 };
        assert_eq!(err.to_string(), "invalid index 5: expected 1..=3");
    }
}
