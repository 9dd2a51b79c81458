use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::markup::WizardData;
use crate::pages::{CityStep, HikingStep, NotFound, Results, ServicesStep, SpotStep};
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;

/// Page body for `route`.
#[must_use]
pub fn render_route(route: &Route, data: &Rc<WizardData>, lang: &str) -> Html {
    let data = data.clone();
    let lang = AttrValue::from(lang.to_string());
    match route {
        Route::Home | Route::City => html! { <CityStep {data} {lang} /> },
        Route::Hiking => html! { <HikingStep {data} {lang} /> },
        Route::Spot => html! { <SpotStep {data} {lang} /> },
        Route::Services => html! { <ServicesStep {data} {lang} /> },
        Route::Results => html! { <Results {data} {lang} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

pub fn render_app(state: &AppState, route: &Route) -> Html {
    let on_lang_change = {
        let current_language = state.current_language.clone();
        Callback::from(move |lang: String| current_language.set(lang))
    };
    let lang = (*state.current_language).clone();
    html! {
        <>
            <Header {on_lang_change} current_lang={lang.clone()} step={route.to_step()} />
            <main id="main" role="main">
                { render_route(route, &state.data, &lang) }
            </main>
            <Footer />
        </>
    }
}
