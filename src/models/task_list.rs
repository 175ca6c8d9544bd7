//! Ordered task list.
//!
//! Tasks have no identity beyond their position. All index-based operations
//! absorb out-of-range indices instead of panicking.

/// Ordered sequence of task labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    /// Creates an empty task list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    /// Iterates tasks in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(String::as_str)
    }

    /// Tasks in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tasks
    }

    /// Appends a task. The text is stored as given, empty strings included.
    pub fn add(&mut self, text: impl Into<String>) {
        self.tasks.push(text.into());
    }

    /// Removes the task at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Moves the task at `from` so it ends up at `to`.
    ///
    /// `to` is interpreted against the list after the task has been taken
    /// out, and is clamped to the end. Returns the final index, or `None`
    /// when `from` is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> Option<usize> {
        if from >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(from);
        let to = to.min(self.tasks.len());
        self.tasks.insert(to, task);
        Some(to)
    }
}

impl<S: Into<String>> FromIterator<S> for TaskList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> TaskList {
        items.iter().copied().collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut tasks = TaskList::new();
        tasks.add("x");
        tasks.add("y");
        assert_eq!(tasks.as_slice(), ["x", "y"]);
    }

    #[test]
    fn test_add_keeps_empty_text() {
        let mut tasks = TaskList::new();
        tasks.add("");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get(0), Some(""));
    }

    #[test]
    fn test_remove() {
        let mut tasks = list(&["x", "y"]);
        assert_eq!(tasks.remove(0), Some("x".to_string()));
        assert_eq!(tasks.as_slice(), ["y"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut tasks = list(&["x", "y"]);
        assert_eq!(tasks.remove(5), None);
        assert_eq!(tasks.as_slice(), ["x", "y"]);
    }

    #[test]
    fn test_reorder_forward() {
        let mut tasks = list(&["a", "b", "c"]);
        assert_eq!(tasks.reorder(0, 1), Some(1));
        assert_eq!(tasks.as_slice(), ["b", "a", "c"]);
    }

    #[test]
    fn test_reorder_backward() {
        let mut tasks = list(&["a", "b", "c"]);
        assert_eq!(tasks.reorder(2, 0), Some(0));
        assert_eq!(tasks.as_slice(), ["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_target_is_after_removal() {
        // Index 2 is the end of the shortened list ["b", "c"].
        let mut tasks = list(&["a", "b", "c"]);
        tasks.reorder(0, 2);
        assert_eq!(tasks.as_slice(), ["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_clamps_target() {
        let mut tasks = list(&["a", "b", "c"]);
        assert_eq!(tasks.reorder(0, 99), Some(2));
        assert_eq!(tasks.as_slice(), ["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_out_of_range_source_is_noop() {
        let mut tasks = list(&["a", "b"]);
        assert_eq!(tasks.reorder(7, 0), None);
        assert_eq!(tasks.as_slice(), ["a", "b"]);

        let mut empty = TaskList::new();
        assert_eq!(empty.reorder(0, 0), None);
    }
}
