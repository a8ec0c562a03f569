use tracing::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::page::Page;
use crate::persist::{self, KeyValueStore, StorageKeys};
use crate::store::TaskStore;
use crate::task::{Task, normalize_text};
use crate::view::{self, ViewFacts};

/// Page visibility state. Leaving `Loaded` saves, returning reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Loaded,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Deleted,
    Missing,
}

/// Everything a renderer needs for one slot, holes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    pub position: usize,
    pub task: Option<Task>,
    pub visible: bool,
    pub editing: bool,
}

/// One widget instance: the task store plus edit and lifecycle state.
/// User actions never fail; absent positions are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    store: TaskStore,
    keys: StorageKeys,
    editing: Option<usize>,
    lifecycle: Lifecycle,
}

impl Session {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            keys: config.storage_keys(),
            ..Self::default()
        }
    }

    /// Builds a session and performs the initial load.
    pub fn open(config: &WidgetConfig, storage: &impl KeyValueStore) -> Self {
        let mut session = Self::new(config);
        session.resume(storage);
        session
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn submit(&mut self, raw: &str) -> Option<usize> {
        let Some(task) = Task::from_input(raw) else {
            debug!("ignored blank task input");
            return None;
        };
        let position = self.store.add(task);
        debug!(position, "created task");
        Some(position)
    }

    pub fn toggle(&mut self, position: usize) -> Option<bool> {
        match self.store.toggle(position) {
            Ok(complete) => Some(complete),
            Err(error) => {
                debug!(%error, "toggle skipped");
                None
            }
        }
    }

    pub fn delete(&mut self, position: usize) -> Option<Task> {
        let removed = self.store.remove(position);
        if self.editing == Some(position) {
            self.editing = None;
        }
        removed
    }

    pub fn begin_edit(&mut self, position: usize) -> bool {
        if self.store.get(position).is_none() {
            return false;
        }
        self.editing = Some(position);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commits edited text. Blank text deletes the task. Only the slot
    /// currently in edit mode accepts a commit; a blur arriving after a
    /// save has renumbered positions is dropped.
    pub fn commit_edit(&mut self, position: usize, raw: &str) -> EditOutcome {
        if self.editing != Some(position) {
            debug!(position, editing = ?self.editing, "commit for slot not in edit mode");
            return EditOutcome::Missing;
        }
        self.editing = None;

        if self.store.get(position).is_none() {
            return EditOutcome::Missing;
        }

        match normalize_text(raw) {
            Some(text) => match self.store.update(position, text) {
                Ok(()) => EditOutcome::Updated,
                Err(_) => EditOutcome::Missing,
            },
            None => {
                self.store.remove(position);
                debug!(position, "blank edit deleted task");
                EditOutcome::Deleted
            }
        }
    }

    pub fn change_page(&mut self, page: Page) {
        self.store.set_current_page(page);
    }

    pub fn change_page_raw(&mut self, raw: Option<&str>) {
        self.store.set_current_page_raw(raw);
    }

    /// Completes every open task, or reopens everything when nothing is
    /// open. Returns how many tasks changed.
    pub fn toggle_all(&mut self) -> usize {
        let complete_all = self.store.has_incomplete();
        let targets: Vec<usize> = self
            .store
            .iter()
            .filter(|(_, task)| task.complete != complete_all)
            .map(|(position, _)| position)
            .collect();

        for position in &targets {
            let result = if complete_all {
                self.store.mark_complete(*position)
            } else {
                self.store.mark_incomplete(*position)
            };
            if let Err(error) = result {
                warn!(%error, "select-all target vanished");
            }
        }

        debug!(changed = targets.len(), complete_all, "toggled all tasks");
        targets.len()
    }

    /// Removes every complete task, leaving holes.
    pub fn clear_completed(&mut self) -> usize {
        let done: Vec<usize> = self
            .store
            .iter()
            .filter(|(_, task)| task.complete)
            .map(|(position, _)| position)
            .collect();

        for position in &done {
            self.delete(*position);
        }

        debug!(removed = done.len(), "cleared completed tasks");
        done.len()
    }

    pub fn view(&self) -> ViewFacts {
        ViewFacts::derive(&self.store)
    }

    pub fn rows(&self) -> Vec<RowState> {
        self.store
            .positions()
            .map(|position| RowState {
                position,
                task: self.store.get(position).cloned(),
                visible: view::row_visible(&self.store, position),
                editing: self.editing == Some(position),
            })
            .collect()
    }

    /// Compacts and saves. Any open edit is dropped first since
    /// compaction renumbers positions.
    #[tracing::instrument(skip(self, storage))]
    pub fn suspend(&mut self, storage: &mut impl KeyValueStore) -> anyhow::Result<()> {
        self.editing = None;
        self.lifecycle = Lifecycle::Hidden;
        persist::save(&mut self.store, storage, &self.keys)
    }

    #[tracing::instrument(skip(self, storage))]
    pub fn resume(&mut self, storage: &impl KeyValueStore) {
        self.editing = None;
        persist::load_into(&mut self.store, storage, &self.keys);
        self.lifecycle = Lifecycle::Loaded;
    }

    /// Routes a `visibilitychange` to save or reload. A repeat of the
    /// current state does nothing.
    pub fn on_visibility_change<S: KeyValueStore>(
        &mut self,
        hidden: bool,
        storage: &mut S,
    ) -> anyhow::Result<()> {
        match (self.lifecycle, hidden) {
            (Lifecycle::Loaded, true) => self.suspend(storage),
            (Lifecycle::Hidden, false) => {
                self.resume(&*storage);
                Ok(())
            }
            (state, _) => {
                info!(?state, hidden, "visibility unchanged; ignoring");
                Ok(())
            }
        }
    }
}
