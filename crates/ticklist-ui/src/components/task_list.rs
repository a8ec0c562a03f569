use ticklist_core::RowState;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  TaskRow,
  row_display_style
};

#[derive(Properties, PartialEq)]
pub struct TaskListViewProps {
  pub rows:           Vec<RowState>,
  pub on_toggle:      Callback<usize>,
  pub on_delete:      Callback<usize>,
  pub on_begin_edit:  Callback<usize>,
  pub on_commit_edit:
    Callback<(usize, String)>
}

/// One child per store slot. Holes
/// render as hidden placeholders.
#[function_component(TaskListView)]
pub fn task_list_view(
  props: &TaskListViewProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for props.rows.iter().cloned().map(|row| {
                  let position = row.position;
                  match row.task {
                      | Some(task) => html! {
                          <TaskRow
                              key={position}
                              position={position}
                              task={task}
                              visible={row.visible}
                              editing={row.editing}
                              on_toggle={props.on_toggle.clone()}
                              on_delete={props.on_delete.clone()}
                              on_begin_edit={props.on_begin_edit.clone()}
                              on_commit_edit={props.on_commit_edit.clone()}
                          />
                      },
                      | None => html! {
                          <div
                              key={position}
                              class="task-container"
                              style={row_display_style(false)}
                          ></div>
                      }
                  }
              })
          }
      </div>
  }
}
