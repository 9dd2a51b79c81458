use randovango_core::{
    CityOption, CityRecord, CitySummary, WeatherPanel, WizardState, WizardStep,
};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{StepProps, step_header};
use crate::components::{ContinueButton, MapView, WeatherPanelView};
use crate::i18n::{t, tr_value};
use crate::storage::LocalSelectionStorage;

fn read_selected(e: &Event) -> Option<CityOption> {
    let select = e
        .target()?
        .dyn_into::<web_sys::HtmlSelectElement>()
        .ok()?;
    let index = u32::try_from(select.selected_index()).ok()?;
    let option = select.item(index)?;
    Some(CityOption::from_attributes(|name| option.get_attribute(name)))
}

fn summary_view(summary: &CitySummary) -> Html {
    html! {
        <div class="city-info">
            <h3 id="cityName">{ summary.name.clone() }</h3>
            <p id="cityDept" class="muted">{ summary.location.clone() }</p>
            <ul class="city-stats">
                <li id="cityRando">{ format!("{} {}", summary.hikes, t("city.hikes")) }</li>
                <li id="citySpots">{ format!("{} {}", summary.spots, t("city.spots")) }</li>
                <li id="cityServices">{ format!("{} {}", summary.poi, t("city.poi")) }</li>
            </ul>
        </div>
    }
}

#[function_component(CityStep)]
pub fn city_step(p: &StepProps) -> Html {
    let options = use_memo(p.data.clone(), |data| {
        data.cities
            .iter()
            .map(CityRecord::to_option)
            .collect::<Vec<_>>()
    });
    let wizard = {
        let options = options.clone();
        use_state(move || {
            let mut state = WizardState::new(LocalSelectionStorage, WizardStep::City);
            // The first city is preselected by the selector.
            if let Some(first) = options.first() {
                state.select_city(first.clone());
            }
            state
        })
    };

    let on_change = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let Some(option) = read_selected(&e) else {
                log::warn!("city selector changed without a readable option");
                return;
            };
            let mut next = (*wizard).clone();
            next.select_city(option);
            wizard.set(next);
        })
    };

    let change = wizard.city().map(CityOption::change);
    let (summary, title, panel, focus) = match change {
        Some(change) => (
            summary_view(&change.summary),
            tr_value("weather.city_title", &change.summary.name),
            change.panel,
            change.coordinates,
        ),
        None => (html! {}, t("weather.title"), WeatherPanel::NoData, None),
    };

    html! {
        <section class="step step-city">
            { step_header(&t("city.title"), &t("city.subtitle")) }
            <label for="citySelect">{ t("city.label") }</label>
            <select id="citySelect" onchange={on_change} aria-label={t("city.placeholder")}>
                { for options.iter().enumerate().map(|(index, o)| html! {
                    <option
                        value={index.to_string()}
                        selected={wizard.city() == Some(o)}
                        data-lat={o.lat.clone()}
                        data-lon={o.lon.clone()}
                        data-name={o.name.clone()}
                        data-dept={o.department.clone()}
                        data-country={o.country.clone()}
                        data-rando={o.hikes.clone()}
                        data-spots={o.spots.clone()}
                        data-poi={o.poi.clone()}
                        data-meteo={o.meteo.clone()}>
                        { o.name.clone() }
                    </option>
                }) }
            </select>
            { summary }
            <WeatherPanelView {panel} title={title} />
            <MapView config={p.data.map.clone()} {focus} label={t("city.map_label")} />
            <ContinueButton visible={wizard.continue_visible()} next={wizard.step().next()} />
        </section>
    }
}
