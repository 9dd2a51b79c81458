use randovango_core::WizardStep;
use yew::prelude::*;

use crate::i18n::t;
use crate::paths::step_href;

/// Page shown when the path matches no wizard step.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <a class="btn" href={step_href(WizardStep::City.path())}>{ t("not_found.back") }</a>
        </section>
    }
}
