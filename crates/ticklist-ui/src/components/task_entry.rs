use ticklist_core::Task;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskEntryProps {
  pub placeholder: String,
  pub on_submit:   Callback<String>
}

#[function_component(TaskEntry)]
pub fn task_entry(
  props: &TaskEntryProps
) -> Html {
  let draft = use_state(String::new);

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        if let Some(input) = e
          .target_dyn_into::<
            web_sys::HtmlInputElement
          >()
        {
          draft.set(input.value());
        }
      }
    )
  };

  let on_change = {
    let draft = draft.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let Some(input) = e
          .target_dyn_into::<
            web_sys::HtmlInputElement
          >()
        else {
          tracing::warn!(
            "task entry change had \
             non-input target"
          );
          return;
        };

        let raw = input.value();
        // Blank input stays in the box
        // and creates nothing.
        if Task::from_input(&raw)
          .is_none()
        {
          return;
        }
        on_submit.emit(raw);
        draft.set(String::new());
      }
    )
  };

  html! {
      <input
          class="input-text"
          placeholder={props.placeholder.clone()}
          value={(*draft).clone()}
          oninput={on_input}
          onchange={on_change}
      />
  }
}
