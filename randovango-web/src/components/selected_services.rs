use randovango_core::ServiceEntry;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Vec<ServiceEntry>,
    pub visible: bool,
    /// Receives the identifier of the entry to drop.
    pub on_remove: Callback<String>,
}

#[function_component(SelectedServices)]
pub fn selected_services(p: &Props) -> Html {
    let style = if p.visible {
        "display: block"
    } else {
        "display: none"
    };
    html! {
        <section id="selectedServices" {style}>
            <h3>{ t("services.selected") }</h3>
            <div id="selectedList">
                { for p.entries.iter().map(|entry| {
                    let on_click = {
                        let cb = p.on_remove.clone();
                        let id = entry.id.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                    };
                    html! {
                        <div class="selected-service-item">
                            <span class="service-name">{ entry.label.clone() }</span>
                            <button type="button" class="btn btn-outline btn-sm" onclick={on_click}>
                                { t("services.remove") }
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
