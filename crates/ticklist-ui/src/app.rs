mod state;
mod storage;

use gloo::console::log;
use gloo::events::EventListener;
use ticklist_core::Page;
use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};

use self::state::{
  SessionAction,
  SessionState
};
use self::storage::load_widget_config;
use crate::components::{
  OptionsBar,
  SelectAll,
  TaskEntry,
  TaskListView
};

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_memo((), |_| {
      load_widget_config()
    });
  let state = {
    let config = config.clone();
    use_reducer(move || {
      SessionState::load(&config)
    })
  };

  {
    let dispatcher = state.dispatcher();
    use_effect_with((), move |_| {
      let listener = web_sys::window()
        .and_then(|window| {
          window.document()
        })
        .map(|document| {
          let target = document.clone();
          EventListener::new(
            &target,
            "visibilitychange",
            move |_| {
              let hidden =
                document.hidden();
              ui_debug(
                "document.visibility",
                if hidden {
                  "hidden"
                } else {
                  "visible"
                }
              );
              dispatcher.dispatch(
                SessionAction::VisibilityChanged {
                  hidden
                }
              );
            }
          )
        });

      if listener.is_none() {
        tracing::warn!(
          "no document; task list will \
           not be saved on hide"
        );
      }

      move || drop(listener)
    });
  }

  let session = &state.session;
  let facts = session.view();
  let rows = session.rows();

  let on_submit = {
    let state = state.clone();
    Callback::from(move |raw: String| {
      state.dispatch(
        SessionAction::Submit(raw)
      );
    })
  };
  let on_toggle = {
    let state = state.clone();
    Callback::from(
      move |position: usize| {
        state.dispatch(
          SessionAction::Toggle(
            position
          )
        );
      }
    )
  };
  let on_delete = {
    let state = state.clone();
    Callback::from(
      move |position: usize| {
        state.dispatch(
          SessionAction::Delete(
            position
          )
        );
      }
    )
  };
  let on_begin_edit = {
    let state = state.clone();
    Callback::from(
      move |position: usize| {
        state.dispatch(
          SessionAction::BeginEdit(
            position
          )
        );
      }
    )
  };
  let on_commit_edit = {
    let state = state.clone();
    Callback::from(
      move |(position, raw): (
        usize,
        String
      )| {
        state.dispatch(
          SessionAction::CommitEdit(
            position, raw
          )
        );
      }
    )
  };
  let on_change_page = {
    let state = state.clone();
    Callback::from(move |page: Page| {
      state.dispatch(
        SessionAction::ChangePage(page)
      );
    })
  };
  let on_toggle_all = {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| {
      state.dispatch(
        SessionAction::ToggleAll
      );
    })
  };
  let on_clear_completed = {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| {
      state.dispatch(
        SessionAction::ClearCompleted
      );
    })
  };

  html! {
      <div class="widget">
          <h1 class="title">{ &config.display.title }</h1>
          <div class={classes!("list-container", facts.show_shadow.then_some("box-shadow"))}>
              <div class="entry">
                  <SelectAll
                      visible={facts.show_select_all}
                      all_complete={facts.all_complete}
                      on_toggle_all={on_toggle_all}
                  />
                  <TaskEntry
                      placeholder={config.display.placeholder.clone()}
                      on_submit={on_submit}
                  />
              </div>
              <TaskListView
                  rows={rows}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
                  on_begin_edit={on_begin_edit}
                  on_commit_edit={on_commit_edit}
              />
              <OptionsBar
                  facts={facts.clone()}
                  on_change_page={on_change_page}
                  on_clear_completed={on_clear_completed}
              />
          </div>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
