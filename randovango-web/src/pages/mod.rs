pub mod city;
pub mod hiking;
pub mod not_found;
pub mod results;
pub mod services;
pub mod spot;

pub use city::CityStep;
pub use hiking::HikingStep;
pub use not_found::NotFound;
pub use results::Results;
pub use services::ServicesStep;
pub use spot::SpotStep;

use crate::markup::WizardData;
use std::rc::Rc;
use yew::prelude::*;

/// Properties shared by every wizard page.
#[derive(Properties, PartialEq, Clone)]
pub struct StepProps {
    pub data: Rc<WizardData>,
    /// Active language; a change re-renders the page text.
    #[prop_or_default]
    pub lang: AttrValue,
}

/// Header block of a step page.
fn step_header(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="step-header">
            <h2>{ title.to_string() }</h2>
            <p>{ subtitle.to_string() }</p>
        </div>
    }
}

/// "View map" button that must not also select the card it sits on.
fn map_button(url: String) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        crate::dom::open_popup(&url);
    });
    html! {
        <button type="button" class="btn btn-outline btn-sm map-link" {onclick}>
            { crate::i18n::t("ui.view_map") }
        </button>
    }
}
