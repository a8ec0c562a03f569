use ticklist_core::Task;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  FocusEvent,
  Html,
  KeyboardEvent,
  MouseEvent,
  NodeRef,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

use super::row_display_style;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub position:       usize,
  pub task:           Task,
  pub visible:        bool,
  pub editing:        bool,
  pub on_toggle:      Callback<usize>,
  pub on_delete:      Callback<usize>,
  pub on_begin_edit:  Callback<usize>,
  pub on_commit_edit:
    Callback<(usize, String)>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let position = props.position;
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    use_effect_with(
      props.editing,
      move |editing| {
        if *editing {
          focus_at_end(&input_ref);
        }
        || ()
      }
    );
  }

  let class = classes!(
    "task-container",
    props
      .task
      .complete
      .then_some("complete-task-container")
  );

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(position)
    })
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(position)
    })
  };

  let body = if props.editing {
    let on_blur = {
      let on_commit_edit =
        props.on_commit_edit.clone();
      Callback::from(
        move |e: FocusEvent| {
          if let Some(input) = e
            .target_dyn_into::<
              HtmlInputElement
            >()
          {
            on_commit_edit.emit((
              position,
              input.value()
            ));
          }
        }
      )
    };
    let on_keydown = Callback::from(
      |e: KeyboardEvent| {
        if e.key() == "Enter"
          && let Some(input) = e
            .target_dyn_into::<
              HtmlInputElement
            >()
        {
          // Blur runs the commit.
          let _ = input.blur();
        }
      }
    );

    html! {
        <input
            ref={input_ref}
            class="input-text"
            value={props.task.text.clone()}
            onblur={on_blur}
            onkeydown={on_keydown}
        />
    }
  } else {
    let on_dblclick = {
      let on_begin_edit =
        props.on_begin_edit.clone();
      Callback::from(move |_: MouseEvent| {
        on_begin_edit.emit(position)
      })
    };

    html! {
        <div class="task-display-input-div" ondblclick={on_dblclick}>
            { &props.task.text }
        </div>
    }
  };

  html! {
      <div class={class} style={row_display_style(props.visible)}>
          <div class="default-cursor checkbox" onclick={on_toggle}>{ "✔" }</div>
          { body }
          <p class="default-cursor" onclick={on_delete}>{ " X " }</p>
      </div>
  }
}

fn focus_at_end(input_ref: &NodeRef) {
  let Some(input) =
    input_ref.cast::<HtmlInputElement>()
  else {
    return;
  };
  if let Err(error) = input.focus() {
    tracing::warn!(
      ?error,
      "failed focusing task editor"
    );
    return;
  }
  let end =
    input.value().encode_utf16().count()
      as u32;
  if let Err(error) =
    input.set_selection_range(end, end)
  {
    tracing::warn!(
      ?error,
      "failed moving caret to end of \
       task editor"
    );
  }
}
