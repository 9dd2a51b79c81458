use crate::markup::WizardData;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    /// Page data, read once from the data island.
    pub data: Rc<WizardData>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let data = use_memo((), |_| WizardData::load());
    AppState {
        data,
        current_language: use_state(crate::i18n::current_lang),
    }
}
