use futures::executor::block_on;
use randovango_web::app::view::render_route;
use randovango_web::markup::WizardData;
use randovango_web::pages::{
    CityStep, HikingStep, NotFound, Results, ServicesStep, SpotStep, StepProps,
};
use randovango_web::router::Route;
use std::rc::Rc;
use yew::{AttrValue, LocalServerRenderer};

fn data() -> Rc<WizardData> {
    let data = WizardData::from_json(
        r#"{
            "cities": [
                {"id": 1, "name": "Brest", "department": "Finistère", "country": "France",
                 "latitude": 48.3904, "longitude": -4.4861,
                 "stats": {"hikes": 12, "spots": 5, "poi": 40},
                 "meteo": [{"date": "2025-07-14", "temp_max": 21.0, "temp_min": 13.0, "weather_code": 10, "picto": "sun"}]},
                {"id": 2, "name": "Crozon", "department": "Finistère", "country": "France",
                 "latitude": 48.2465, "longitude": -4.4897}
            ],
            "hikes": [
                {"id": 3, "name": "Pointe Saint-Mathieu", "distance_km": 8.5, "denivele_m": 120, "difficulte": "facile"},
                {"id": 12, "name": "Tour du Cap", "distance_km": 14.0}
            ],
            "spots": [
                {"id": 12, "name": "Aire du Conquet", "type": "aire", "note": 4.5,
                 "services": ["eau", "vidange"], "latitude": 48.36, "longitude": -4.77}
            ],
            "services": [
                {"id": 1, "name": "Boulangerie", "category": "alimentation", "distance_km": 0.8}
            ],
            "night_forecast": [
                {"date": "2025-07-14", "temp_max": 17.0, "temp_min": 9.0, "weather_code": 50, "picto": "rain"}
            ]
        }"#,
    )
    .expect("wizard data");
    Rc::new(data)
}

fn props() -> StepProps {
    StepProps {
        data: data(),
        lang: AttrValue::from("fr"),
    }
}

#[test]
fn city_step_renders_selector_summary_and_forecast() {
    randovango_web::i18n::set_lang("fr");
    let html = block_on(LocalServerRenderer::<CityStep>::with_props(props()).render());
    assert!(html.contains("citySelect"));
    assert!(html.contains(r#"data-lat="48.3904""#));
    assert!(html.contains("data-meteo"));
    assert!(html.contains("Crozon"));
    assert!(html.contains("Finistère - France"));
    assert!(html.contains("good-weather"));
    assert!(html.contains("Météo à Brest - Prochains jours"));
    assert!(html.contains(r#"id="map""#));
    // A city is always chosen, so the continue link is shown.
    assert!(html.contains("display: block"));
    assert!(html.contains("/step2"));
}

#[test]
fn city_step_without_cities_degrades() {
    randovango_web::i18n::set_lang("fr");
    let props = StepProps {
        data: Rc::new(WizardData::default()),
        lang: AttrValue::from("fr"),
    };
    let html = block_on(LocalServerRenderer::<CityStep>::with_props(props).render());
    assert!(html.contains("Aucune donnée météo disponible"));
    assert!(html.contains("display: none"));
}

#[test]
fn hiking_step_renders_cards_and_none_option() {
    randovango_web::i18n::set_lang("fr");
    let html = block_on(LocalServerRenderer::<HikingStep>::with_props(props()).render());
    assert!(html.contains("Pointe Saint-Mathieu"));
    assert!(html.contains("8.5 km"));
    assert!(html.contains("120 m D+"));
    assert!(html.contains("no-hiking-option"));
    assert!(html.contains("Voir la carte"));
    assert!(!html.contains("selectable-card selected"));
    assert!(html.contains("display: none"));
}

#[test]
fn spot_step_hides_night_weather_until_a_spot_is_chosen() {
    randovango_web::i18n::set_lang("fr");
    let html = block_on(LocalServerRenderer::<SpotStep>::with_props(props()).render());
    assert!(html.contains("Aire du Conquet"));
    assert!(html.contains("Note : 4.5/5"));
    assert!(html.contains("eau, vidange"));
    assert!(html.contains("no-spot-option"));
    assert!(html.contains("nightWeather"));
    // Night forecast and continue link both start hidden.
    assert_eq!(html.matches("display: none").count(), 2);
    assert!(html.contains("acceptable-weather"));
}

#[test]
fn services_step_uses_default_copy_without_stored_choices() {
    randovango_web::i18n::set_lang("fr");
    let html = block_on(LocalServerRenderer::<ServicesStep>::with_props(props()).render());
    assert!(html.contains("Services à proximité"));
    assert!(html.contains("Ajoutez les services utiles à votre journée"));
    assert!(html.contains("Boulangerie"));
    assert!(html.contains("à 0.8 km"));
    assert!(html.contains("selectedServices"));
    assert_eq!(html.matches("display: none").count(), 2);
    assert!(html.contains("no-service-option"));
}

#[test]
fn results_page_reports_missing_choices() {
    randovango_web::i18n::set_lang("fr");
    let html = block_on(LocalServerRenderer::<Results>::with_props(props()).render());
    assert_eq!(html.matches("Non choisi").count(), 3);
    assert!(html.contains("/step1"));
}

#[test]
fn not_found_links_back_to_first_step() {
    randovango_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("/step1"));
}

#[test]
fn every_route_renders_a_page() {
    randovango_web::i18n::set_lang("fr");
    let data = data();
    for route in [
        Route::Home,
        Route::City,
        Route::Hiking,
        Route::Spot,
        Route::Services,
        Route::Results,
        Route::NotFound,
    ] {
        let html = block_on(
            LocalServerRenderer::<RouteHost>::with_props(RouteHostProps {
                route: route.clone(),
                data: data.clone(),
            })
            .render(),
        );
        assert!(html.contains("<section"), "{route:?} rendered nothing");
    }
}

#[derive(yew::Properties, PartialEq)]
struct RouteHostProps {
    route: Route,
    data: Rc<WizardData>,
}

#[yew::function_component(RouteHost)]
fn route_host(props: &RouteHostProps) -> yew::Html {
    render_route(&props.route, &props.data, "fr")
}
