//! The basic to-do list.
//!
//! A flat list of items that can be added, toggled between done and not
//! done, and deleted. It shares identifier semantics with the board but
//! nothing else.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::id::{IdGenerator, TaskId};

/// A single entry of the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier.
    pub id: TaskId,
    /// What needs doing.
    pub text: String,
    /// Whether it is done.
    pub completed: bool,
}

/// An ordered to-do list.
///
/// # Examples
///
/// ```
/// use tareas_board::TodoList;
///
/// let mut list = TodoList::new();
/// let id = list.add("Call the plumber").unwrap();
/// assert_eq!(list.remaining(), 1);
///
/// list.toggle(id);
/// assert_eq!(list.remaining(), 0);
///
/// list.delete(id);
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    ids: IdGenerator,
}

impl TodoList {
    /// Creates an empty list backed by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    /// Creates an empty list with a specific identifier generator.
    #[must_use]
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns how many items are not completed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Appends a new, not completed item.
    ///
    /// Blank input is ignored and returns `None`. Other text is kept as
    /// typed, surrounding whitespace included.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        });
        debug!(%id, "todo added");
        Some(id)
    }

    /// Flips the completed flag of an item.
    ///
    /// Returns the new flag, or `None` if no item has that ID.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        debug!(%id, completed = item.completed, "todo toggled");
        Some(item.completed)
    }

    /// Removes an item. Returns `false` if no item has that ID.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            debug!(%id, "todo deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> TodoList {
        TodoList::with_ids(IdGenerator::with_clock(|| 10))
    }

    #[test]
    fn add_appends_uncompleted_item() {
        let mut list = list();
        let id = list.add("  Sweep the floor ").unwrap();

        assert_eq!(
            list.items(),
            &[TodoItem {
                id,
                text: "  Sweep the floor ".to_string(),
                completed: false,
            }]
        );
    }

    #[test]
    fn add_blank_is_ignored() {
        let mut list = list();
        assert!(list.add("").is_none());
        assert!(list.add(" \t ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_flips_only_the_matching_item() {
        let mut list = list();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();

        assert_eq!(list.toggle(b), Some(true));
        assert!(!list.items()[0].completed);
        assert!(list.items()[1].completed);

        assert_eq!(list.toggle(b), Some(false));
        assert_eq!(list.toggle(TaskId::from_raw(999)), None);
        assert_eq!(list.remaining(), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn delete_removes_only_the_matching_item() {
        let mut list = list();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();

        assert!(list.delete(a));
        assert!(!list.delete(a));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, b);
    }
}
