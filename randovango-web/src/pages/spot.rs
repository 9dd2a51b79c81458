use randovango_core::{LatLon, WeatherPanel, WizardState, WizardStep};
use yew::prelude::*;

use super::{StepProps, map_button, step_header};
use crate::components::{ContinueButton, MapView, NoneOption, SelectableCard, WeatherPanelView};
use crate::i18n::{fmt_decimal, t, tr_value};
use crate::markup::SpotCard;
use crate::storage::LocalSelectionStorage;

fn spot_details(spot: &SpotCard) -> Html {
    let rating = spot
        .note
        .map(|note| tr_value("spot.rating", &fmt_decimal(note, 1)));
    html! {
        <>
            <span class="spot-type badge">{ spot.kind.clone() }</span>
            if let Some(rating) = rating {
                <p class="spot-rating">{ rating }</p>
            }
            if !spot.services.is_empty() {
                <p class="spot-services muted">{ spot.services.join(", ") }</p>
            }
        </>
    }
}

#[function_component(SpotStep)]
pub fn spot_step(p: &StepProps) -> Html {
    let wizard = {
        let ids = p.data.spot_ids();
        use_state(move || WizardState::load(LocalSelectionStorage, WizardStep::Spot, ids))
    };
    let night_panel = use_memo(p.data.clone(), |data| {
        WeatherPanel::build(&data.night_forecast)
    });

    let on_select = {
        let wizard = wizard.clone();
        Callback::from(move |id: AttrValue| {
            let mut next = (*wizard).clone();
            next.select_spot(&id);
            wizard.set(next);
        })
    };
    let on_select_none = {
        let wizard = wizard.clone();
        Callback::from(move |()| {
            let mut next = (*wizard).clone();
            next.select_no_spot();
            wizard.set(next);
        })
    };

    let focus = wizard
        .selected_card()
        .and_then(|id| p.data.spot(id))
        .map(|spot| LatLon::new(spot.latitude, spot.longitude));

    let cards = p.data.spots.iter().map(|spot| {
        let id = spot.id.to_string();
        html! {
            <SelectableCard
                id={AttrValue::from(id.clone())}
                selected={wizard.is_selected(&id)}
                on_select={on_select.clone()}>
                <div class="spot-card">
                    <h3>{ spot.name.clone() }</h3>
                    { spot_details(spot) }
                    { map_button(wizard.spot_map_url(&id)) }
                </div>
            </SelectableCard>
        }
    });

    let night_style = if wizard.night_weather_visible() {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        <section class="step step-spot">
            { step_header(&t("spot.title"), &t("spot.subtitle")) }
            if p.data.spots.is_empty() {
                <p class="muted">{ t("spot.empty") }</p>
            }
            <div class="card-grid" role="radiogroup">
                { for cards }
            </div>
            <NoneOption
                class="no-spot-option"
                title={t("spot.none_title")}
                description={t("spot.none_desc")}
                selected={wizard.none_selected()}
                on_select={on_select_none} />
            <MapView config={p.data.map.clone()} {focus} id="spotMap" />
            <div id="nightWeather" style={night_style}>
                <WeatherPanelView panel={(*night_panel).clone()} id="nightWeatherGrid" title={t("weather.night_title")} />
            </div>
            <ContinueButton visible={wizard.continue_visible()} next={wizard.step().next()} />
        </section>
    }
}
