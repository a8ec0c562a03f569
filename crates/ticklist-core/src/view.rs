use crate::page::Page;
use crate::store::TaskStore;

/// Display facts derived from the store on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFacts {
    pub show_options_panel: bool,
    pub show_select_all: bool,
    pub all_complete: bool,
    pub active_label: String,
    pub active_page: Page,
    pub show_clear_completed: bool,
    pub show_shadow: bool,
}

impl ViewFacts {
    pub fn derive(store: &TaskStore) -> Self {
        let has_tasks = store.total_count() > 0;

        Self {
            show_options_panel: has_tasks,
            show_select_all: has_tasks,
            // An empty list counts as all complete.
            all_complete: !store.has_incomplete(),
            active_label: items_left_label(store.active_count()),
            active_page: store.current_page(),
            show_clear_completed: store.has_complete(),
            show_shadow: has_tasks,
        }
    }

    /// 1-based index of the highlighted page button.
    pub fn active_page_index(&self) -> u8 {
        self.active_page.position()
    }
}

pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{count} items left")
    }
}

/// Whether the slot at `position` should be shown under the current page.
/// Holes and out-of-range positions are never visible.
pub fn row_visible(store: &TaskStore, position: usize) -> bool {
    store
        .get(position)
        .is_some_and(|task| store.current_page().matches(task))
}
