use randovango_core::WizardStep;
use yew::prelude::*;

use crate::i18n::t;
use crate::paths::step_href;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
    /// Step the button leads to; nothing is rendered without one.
    pub next: Option<WizardStep>,
}

/// The `#nextStepBtn` link, hidden until the page has a choice.
#[function_component(ContinueButton)]
pub fn continue_button(p: &Props) -> Html {
    let Some(next) = p.next else {
        return html! {};
    };
    let style = if p.visible {
        "display: block"
    } else {
        "display: none"
    };
    html! {
        <a id="nextStepBtn" class="btn btn-primary" href={step_href(next.path())} {style}>
            { t("ui.continue") }
        </a>
    }
}
