mod options_bar;
mod select_all;
mod task_entry;
mod task_list;
mod task_row;

pub use options_bar::OptionsBar;
pub use select_all::SelectAll;
pub use task_entry::TaskEntry;
pub use task_list::TaskListView;
pub use task_row::TaskRow;

/// Rows are toggled, never removed, so
/// DOM order stays aligned with store
/// positions.
fn row_display_style(
  visible: bool
) -> &'static str {
  if visible {
    "display:flex"
  } else {
    "display:none"
  }
}

fn page_option_class(
  active: bool
) -> &'static str {
  if active {
    "active-option"
  } else {
    "inactive-options"
  }
}

fn visibility_style(
  visible: bool
) -> &'static str {
  if visible {
    "visibility:visible"
  } else {
    "visibility:hidden"
  }
}
