use randovango_core::{WizardState, WizardStep};
use yew::prelude::*;

use super::{StepProps, step_header};
use crate::components::{ContinueButton, NoneOption, SelectedServices};
use crate::i18n::{fmt_decimal, t, tr_value};
use crate::markup::ServiceCard;
use crate::storage::LocalSelectionStorage;

fn service_row(service: &ServiceCard, on_add: &Callback<String>) -> Html {
    let onclick = {
        let on_add = on_add.clone();
        let name = service.name.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(name.clone()))
    };
    let distance = service
        .distance_km
        .map(|km| tr_value("services.distance", &fmt_decimal(km, 1)));
    html! {
        <div class="service-card" data-category={service.category.clone()}>
            <h4>{ service.name.clone() }</h4>
            if let Some(distance) = distance {
                <span class="muted">{ distance }</span>
            }
            <button type="button" class="btn btn-sm" {onclick}>{ t("services.add") }</button>
        </div>
    }
}

#[function_component(ServicesStep)]
pub fn services_step(p: &StepProps) -> Html {
    let wizard = use_state(|| {
        WizardState::load(
            LocalSelectionStorage,
            WizardStep::Services,
            Vec::<String>::new(),
        )
    });

    let on_add = {
        let wizard = wizard.clone();
        Callback::from(move |name: String| {
            let mut next = (*wizard).clone();
            next.add_service(&name);
            wizard.set(next);
        })
    };
    let on_remove = {
        let wizard = wizard.clone();
        Callback::from(move |name: String| {
            let mut next = (*wizard).clone();
            next.remove_service_exact(&name);
            wizard.set(next);
        })
    };
    let on_select_none = {
        let wizard = wizard.clone();
        Callback::from(move |()| {
            let mut next = (*wizard).clone();
            next.select_no_service();
            wizard.set(next);
        })
    };

    let copy = wizard.services_copy();
    let services = wizard.services().cloned().unwrap_or_default();

    html! {
        <section class="step step-services">
            { step_header(&t(copy.title_key()), &t(copy.subtitle_key())) }
            if p.data.services.is_empty() {
                <p class="muted">{ t("services.empty") }</p>
            }
            <div class="services-grid">
                { for p.data.services.iter().map(|s| service_row(s, &on_add)) }
            </div>
            <SelectedServices
                entries={services.entries().to_vec()}
                visible={services.panel_visible()}
                {on_remove} />
            <NoneOption
                class="no-service-option"
                title={t("services.none_title")}
                description={t("services.none_desc")}
                selected={services.none_selected()}
                on_select={on_select_none} />
            <ContinueButton visible={wizard.continue_visible()} next={wizard.step().next()} />
        </section>
    }
}
