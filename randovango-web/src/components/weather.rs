use randovango_core::{WeatherCard, WeatherPanel};
use yew::prelude::*;

use crate::i18n::{calendar_names, t, tr_value};
use crate::paths::asset_path;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub panel: WeatherPanel,
    /// Element id of the grid; the spot page uses `nightWeather`.
    #[prop_or(AttrValue::from("weatherGrid"))]
    pub id: AttrValue,
    /// Heading text, already translated.
    pub title: AttrValue,
}

fn day_card(card: &WeatherCard) -> Html {
    let names = calendar_names();
    let class = classes!("weather-day", card.severity.css_class());
    html! {
        <div {class}>
            <div class="weather-date">{ card.label.render(&names) }</div>
            <img class="weather-icon" src={asset_path(&card.image_path())} alt={card.picto.clone()} />
            <div class="weather-temps">
                <span class="temp-max">{ format!("{}°", card.temp_max) }</span>
                <span class="temp-min">{ format!("{}°", card.temp_min) }</span>
            </div>
            if let Some(mm) = &card.precipitation_mm {
                <div class="weather-rain">{ tr_value("weather.precipitation", mm) }</div>
            }
            if let Some(kmh) = card.wind_kmh {
                <div class="weather-wind">{ tr_value("weather.wind", &kmh.to_string()) }</div>
            }
            <div class="weather-advice">
                <i class={classes!("fas", card.advisory.icon_class)} aria-hidden="true"></i>
                <span>{ t(&card.advisory.i18n_key()) }</span>
            </div>
        </div>
    }
}

/// Forecast grid, or a placeholder when there is nothing to show.
#[function_component(WeatherPanelView)]
pub fn weather_panel_view(p: &Props) -> Html {
    let body = match &p.panel {
        WeatherPanel::NoData => html! {
            <p class="no-weather">{ t("weather.no_data") }</p>
        },
        WeatherPanel::Days(cards) => html! {
            <div class="weather-grid">{ for cards.iter().map(day_card) }</div>
        },
    };
    html! {
        <section class="weather-panel" id={p.id.clone()}>
            <h3 id="weatherTitle">{ p.title.clone() }</h3>
            { body }
        </section>
    }
}
