use crate::i18n::{locales, set_lang, t, tr};
use randovango_core::WizardStep;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
    /// Page being shown, for the step indicator.
    pub step: Option<WizardStep>,
}

fn step_label(step: WizardStep) -> String {
    match step.number() {
        Some(n) => {
            let n = n.to_string();
            let mut args = BTreeMap::new();
            args.insert("n", n.as_str());
            tr("nav.step", Some(&args))
        }
        None => t("nav.results"),
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-left">
                    <span class="brand">{ t("app.title") }</span>
                    if let Some(step) = p.step {
                        <span class="step-indicator">{ step_label(step) }</span>
                    }
                </div>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
