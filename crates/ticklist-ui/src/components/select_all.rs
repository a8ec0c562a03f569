use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::visibility_style;

#[derive(Properties, PartialEq)]
pub struct SelectAllProps {
  pub visible:       bool,
  pub all_complete:  bool,
  pub on_toggle_all:
    Callback<MouseEvent>
}

#[function_component(SelectAll)]
pub fn select_all(
  props: &SelectAllProps
) -> Html {
  let class = classes!(
    "select-all",
    "default-cursor",
    props
      .all_complete
      .then_some("active-select-all")
  );

  html! {
      <div
          class={class}
          style={visibility_style(props.visible)}
          onclick={props.on_toggle_all.clone()}
      >
          { "❯" }
      </div>
  }
}
