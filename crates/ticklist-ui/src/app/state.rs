use std::rc::Rc;

use ticklist_core::{
  EditOutcome,
  Page,
  Session,
  WidgetConfig
};
use yew::Reducible;

use super::storage::BrowserStorage;
use super::ui_debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
  Submit(String),
  Toggle(usize),
  Delete(usize),
  BeginEdit(usize),
  CommitEdit(usize, String),
  ChangePage(Page),
  ToggleAll,
  ClearCompleted,
  VisibilityChanged {
    hidden: bool
  }
}

/// The single widget session, owned by
/// the `App` reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
  pub session: Session
}

impl SessionState {
  pub fn load(
    config: &WidgetConfig
  ) -> Self {
    let session =
      match BrowserStorage::local() {
        | Some(storage) => {
          Session::open(
            config, &storage
          )
        }
        | None => {
          tracing::warn!(
            "localStorage unavailable; \
             starting with an empty \
             list"
          );
          Session::new(config)
        }
      };

    Self {
      session
    }
  }
}

impl Reducible for SessionState {
  type Action = SessionAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    let session = &mut next.session;

    match action {
      | SessionAction::Submit(raw) => {
        if let Some(position) =
          session.submit(&raw)
        {
          ui_debug(
            "task.created",
            &position.to_string()
          );
        }
      }
      | SessionAction::Toggle(
        position
      ) => {
        session.toggle(position);
      }
      | SessionAction::Delete(
        position
      ) => {
        session.delete(position);
      }
      | SessionAction::BeginEdit(
        position
      ) => {
        session.begin_edit(position);
      }
      | SessionAction::CommitEdit(
        position,
        raw
      ) => {
        let outcome = session
          .commit_edit(position, &raw);
        if outcome
          == EditOutcome::Deleted
        {
          ui_debug(
            "task.edit_deleted",
            &position.to_string()
          );
        }
      }
      | SessionAction::ChangePage(
        page
      ) => {
        session.change_page(page);
      }
      | SessionAction::ToggleAll => {
        session.toggle_all();
      }
      | SessionAction::ClearCompleted => {
        session.clear_completed();
      }
      | SessionAction::VisibilityChanged {
        hidden
      } => {
        match BrowserStorage::local() {
          | Some(mut storage) => {
            if let Err(error) = session
              .on_visibility_change(
                hidden,
                &mut storage
              )
            {
              tracing::error!(
                ?error,
                "failed saving task \
                 list"
              );
            }
          }
          | None => {
            tracing::warn!(
              hidden,
              "localStorage unavailable; \
               visibility change ignored"
            );
          }
        }
      }
    }

    Rc::new(next)
  }
}
