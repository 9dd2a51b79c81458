use randovango_core::{WizardState, WizardStep};
use yew::prelude::*;

use super::{StepProps, map_button, step_header};
use crate::components::{ContinueButton, NoneOption, SelectableCard};
use crate::i18n::{fmt_decimal, t, tr_value};
use crate::markup::HikeCard;
use crate::storage::LocalSelectionStorage;

fn hike_facts(hike: &HikeCard) -> Html {
    let distance = tr_value("hiking.distance", &fmt_decimal(hike.distance_km, 1));
    let elevation = hike
        .denivele_m
        .map(|m| tr_value("hiking.elevation", &m.to_string()));
    html! {
        <ul class="hike-facts">
            <li>{ distance }</li>
            if let Some(elevation) = elevation {
                <li>{ elevation }</li>
            }
            if let Some(level) = &hike.difficulte {
                <li class="difficulty">{ level.clone() }</li>
            }
        </ul>
    }
}

#[function_component(HikingStep)]
pub fn hiking_step(p: &StepProps) -> Html {
    let wizard = {
        let ids = p.data.hike_ids();
        use_state(move || WizardState::load(LocalSelectionStorage, WizardStep::Hiking, ids))
    };

    let on_select = {
        let wizard = wizard.clone();
        Callback::from(move |id: AttrValue| {
            let mut next = (*wizard).clone();
            next.select_hiking(&id);
            wizard.set(next);
        })
    };
    let on_select_none = {
        let wizard = wizard.clone();
        Callback::from(move |()| {
            let mut next = (*wizard).clone();
            next.select_no_hiking();
            wizard.set(next);
        })
    };

    let cards = p.data.hikes.iter().map(|hike| {
        let id = hike.id.to_string();
        html! {
            <SelectableCard
                id={AttrValue::from(id.clone())}
                selected={wizard.is_selected(&id)}
                on_select={on_select.clone()}>
                <div class="hiking-card">
                    <h3>{ hike.name.clone() }</h3>
                    { hike_facts(hike) }
                    { map_button(wizard.hiking_map_url(&id)) }
                </div>
            </SelectableCard>
        }
    });

    html! {
        <section class="step step-hiking">
            { step_header(&t("hiking.title"), &t("hiking.subtitle")) }
            if p.data.hikes.is_empty() {
                <p class="muted">{ t("hiking.empty") }</p>
            }
            <div class="card-grid" role="radiogroup">
                { for cards }
            </div>
            <NoneOption
                class="no-hiking-option"
                title={t("hiking.none_title")}
                description={t("hiking.none_desc")}
                selected={wizard.none_selected()}
                on_select={on_select_none} />
            <ContinueButton visible={wizard.continue_visible()} next={wizard.step().next()} />
        </section>
    }
}
