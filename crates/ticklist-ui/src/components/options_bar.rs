use ticklist_core::{
  Page,
  ViewFacts
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  page_option_class,
  visibility_style
};

#[derive(Properties, PartialEq)]
pub struct OptionsBarProps {
  pub facts:              ViewFacts,
  pub on_change_page:     Callback<Page>,
  pub on_clear_completed:
    Callback<MouseEvent>
}

#[function_component(OptionsBar)]
pub fn options_bar(
  props: &OptionsBarProps
) -> Html {
  let facts = &props.facts;
  let style = if facts.show_options_panel
  {
    "display:flex"
  } else {
    "display:none"
  };

  let make_page = |page: Page| {
    let on_change_page =
      props.on_change_page.clone();
    html! {
        <p
            class={page_option_class(facts.active_page == page)}
            onclick={move |_| on_change_page.emit(page)}
        >
            { page.label() }
        </p>
    }
  };

  html! {
      <div class="option-container" style={style}>
          <p class="count">{ &facts.active_label }</p>
          { for Page::ALL.into_iter().map(make_page) }
          <p
              style={visibility_style(facts.show_clear_completed)}
              onclick={props.on_clear_completed.clone()}
          >
              { "Clear completed" }
          </p>
      </div>
  }
}
