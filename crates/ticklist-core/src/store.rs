use tracing::{debug, trace};

use crate::error::StoreError;
use crate::page::Page;
use crate::task::Task;

/// Index-addressed task slots plus the current page selector.
///
/// Removing a task leaves a hole (`None`) so positions held by the
/// renderer stay valid. Only [`TaskStore::compact`] renumbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    slots: Vec<Option<Task>>,
    current_page: Page,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<Option<Task>>, current_page: Page) -> Self {
        Self {
            slots,
            current_page,
        }
    }

    /// Raw length, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    pub fn is_hole(&self, position: usize) -> bool {
        matches!(self.slots.get(position), Some(None))
    }

    pub fn add(&mut self, task: Task) -> usize {
        self.slots.push(Some(task));
        let position = self.slots.len() - 1;
        trace!(position, "added task");
        position
    }

    /// Appends an empty slot. Used when a stored entry is `null`.
    pub(crate) fn push_hole(&mut self) {
        self.slots.push(None);
    }

    pub fn remove(&mut self, position: usize) -> Option<Task> {
        let removed = self.slots.get_mut(position).and_then(Option::take);
        if removed.is_some() {
            trace!(position, "removed task");
        }
        removed
    }

    pub fn update(&mut self, position: usize, text: impl Into<String>) -> Result<(), StoreError> {
        self.task_mut(position)?.text = text.into();
        trace!(position, "updated task text");
        Ok(())
    }

    pub fn mark_complete(&mut self, position: usize) -> Result<(), StoreError> {
        self.task_mut(position)?.complete = true;
        Ok(())
    }

    pub fn mark_incomplete(&mut self, position: usize) -> Result<(), StoreError> {
        self.task_mut(position)?.complete = false;
        Ok(())
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self, position: usize) -> Result<bool, StoreError> {
        let task = self.task_mut(position)?;
        task.complete = !task.complete;
        Ok(task.complete)
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: Page) {
        self.current_page = page;
    }

    pub fn set_current_page_raw(&mut self, raw: Option<&str>) {
        self.current_page = Page::coerce(raw);
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, task)| !task.complete).count()
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|(_, task)| task.complete).count()
    }

    pub fn total_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn has_incomplete(&self) -> bool {
        self.iter().any(|(_, task)| !task.complete)
    }

    pub fn has_complete(&self) -> bool {
        self.iter().any(|(_, task)| task.complete)
    }

    pub fn compact(&mut self) {
        let before = self.slots.len();
        self.slots.retain(Option::is_some);
        debug!(before, after = self.slots.len(), "compacted task list");
    }

    /// Empties the list. The page selector is left alone.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Present tasks with their positions, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.as_ref().map(|task| (position, task)))
    }

    pub fn positions(&self) -> std::ops::Range<usize> {
        0..self.slots.len()
    }

    pub fn slots(&self) -> &[Option<Task>] {
        &self.slots
    }

    fn task_mut(&mut self, position: usize) -> Result<&mut Task, StoreError> {
        self.slots
            .get_mut(position)
            .and_then(Option::as_mut)
            .ok_or(StoreError::NotFound { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            store.add(Task::new(*text));
        }
        store
    }

    #[test]
    fn remove_leaves_hole_without_shifting() {
        let mut store = store_with(&["a", "b", "c"]);

        let removed = store.remove(1);
        assert_eq!(removed, Some(Task::new("b")));
        assert_eq!(store.len(), 3);
        assert_eq!(store.total_count(), 2);
        assert!(store.is_hole(1));
        assert_eq!(store.get(1), None);
        assert_eq!(store.get(2).map(|t| t.text.as_str()), Some("c"));

        assert_eq!(store.remove(1), None);
        assert_eq!(store.remove(99), None);
        assert!(!store.is_hole(99));
    }

    #[test]
    fn mutations_on_absent_positions_fail_with_not_found() {
        let mut store = store_with(&["a"]);
        store.remove(0);

        assert_eq!(
            store.update(0, "x"),
            Err(StoreError::NotFound { position: 0 })
        );
        assert_eq!(
            store.mark_complete(5),
            Err(StoreError::NotFound { position: 5 })
        );
        assert!(store.mark_incomplete(0).is_err());
        assert!(store.toggle(0).is_err());
    }

    #[test]
    fn counts_ignore_holes() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.mark_complete(0).expect("mark a");
        store.mark_complete(2).expect("mark c");
        store.remove(2);

        assert_eq!(store.total_count(), 3);
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.completed_count(), 1);
        assert_eq!(
            store.active_count() + store.completed_count(),
            store.total_count()
        );
        assert!(store.has_complete());
        assert!(store.has_incomplete());

        store.remove(0);
        assert!(!store.has_complete());
    }

    #[test]
    fn total_count_tracks_adds_minus_effective_removes() {
        let mut store = TaskStore::new();
        let mut expected = 0usize;
        for step in 0..40usize {
            if step % 3 == 2 {
                let target = (step * 7) % store.len().max(1);
                if store.remove(target).is_some() {
                    expected -= 1;
                }
            } else {
                store.add(Task::new(format!("task {step}")));
                expected += 1;
            }
            assert_eq!(store.total_count(), expected, "after step {step}");
        }
    }

    #[test]
    fn compact_is_idempotent_and_keeps_order() {
        let mut store = store_with(&["a", "b", "c", "d", "e"]);
        store.remove(0);
        store.remove(3);

        store.compact();
        let once: Vec<_> = store.slots().to_vec();
        store.compact();

        assert_eq!(store.slots(), once.as_slice());
        let texts: Vec<_> = store.iter().map(|(_, t)| t.text.clone()).collect();
        assert_eq!(texts, vec!["b", "c", "e"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn toggle_and_update_change_task_in_place() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.toggle(0), Ok(true));
        assert_eq!(store.toggle(0), Ok(false));
        store.update(0, "renamed").expect("update");
        assert_eq!(store.get(0), Some(&Task::new("renamed")));
    }

    #[test]
    fn raw_page_setter_defaults_to_all() {
        let mut store = TaskStore::new();
        store.set_current_page_raw(Some("2"));
        assert_eq!(store.current_page(), Page::Active);
        store.set_current_page_raw(Some("abc"));
        assert_eq!(store.current_page(), Page::All);
        store.set_current_page(Page::Completed);
        store.set_current_page_raw(None);
        assert_eq!(store.current_page(), Page::All);
    }

    #[test]
    fn clear_keeps_page() {
        let mut store = store_with(&["a", "b"]);
        store.set_current_page(Page::Completed);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.current_page(), Page::Completed);
    }
}
