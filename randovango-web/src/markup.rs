//! Page data embedded by the server in a JSON script element.
use anyhow::Context;
use randovango_core::{CityRecord, ForecastDay, MapConfig};
use serde::{Deserialize, Serialize};

/// Identifier of the `<script type="application/json">` element carrying the data.
pub const DATA_ISLAND_ID: &str = "randovango-data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeCard {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub denivele_m: Option<i64>,
    #[serde(default)]
    pub difficulte: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotCard {
    pub id: i64,
    pub name: String,
    /// Camper-van area, bivouac, campsite...
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub note: Option<f64>,
    #[serde(default)]
    pub services: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// Everything the wizard pages render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardData {
    pub cities: Vec<CityRecord>,
    pub hikes: Vec<HikeCard>,
    pub spots: Vec<SpotCard>,
    pub services: Vec<ServiceCard>,
    /// Forecast for the night at the chosen spot.
    #[serde(deserialize_with = "randovango_core::weather::deserialize_forecast")]
    pub night_forecast: Vec<ForecastDay>,
    pub map: MapConfig,
}

impl WizardData {
    /// Parse the data island text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not a valid data document.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing wizard data")
    }

    /// Read the data island from the current document.
    ///
    /// Missing or malformed data is logged and yields empty lists so the
    /// page still renders.
    #[must_use]
    pub fn load() -> Self {
        match read_island() {
            Ok(Some(data)) => data,
            Ok(None) => {
                log::debug!("no #{DATA_ISLAND_ID} element, rendering empty wizard");
                Self::default()
            }
            Err(err) => {
                crate::dom::console_error(&format!("{err:#}"));
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn hike_ids(&self) -> Vec<String> {
        self.hikes.iter().map(|h| h.id.to_string()).collect()
    }

    #[must_use]
    pub fn spot_ids(&self) -> Vec<String> {
        self.spots.iter().map(|s| s.id.to_string()).collect()
    }

    #[must_use]
    pub fn spot(&self, id: &str) -> Option<&SpotCard> {
        self.spots.iter().find(|s| s.id.to_string() == id)
    }
}

fn read_island() -> anyhow::Result<Option<WizardData>> {
    let Some(element) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(DATA_ISLAND_ID))
    else {
        return Ok(None);
    };
    let raw = element.text_content().unwrap_or_default();
    WizardData::from_json(&raw)
        .with_context(|| format!("reading #{DATA_ISLAND_ID}"))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_documents() {
        let data = WizardData::from_json(
            r#"{
                "hikes": [{"id": 3, "name": "Pointe Saint-Mathieu", "distance_km": 8.5, "difficulte": "facile"}],
                "spots": [{"id": 12, "name": "Aire du Conquet", "type": "aire", "latitude": 48.36, "longitude": -4.77}],
                "map": {"focus_zoom": 13}
            }"#,
        )
        .expect("data");
        assert!(data.cities.is_empty());
        assert_eq!(data.hike_ids(), ["3"]);
        assert_eq!(data.spot("12").map(|s| s.kind.as_str()), Some("aire"));
        assert_eq!(data.map.focus_zoom, 13);
        assert_eq!(data.map.max_zoom, 18);
    }

    #[test]
    fn bad_forecast_days_do_not_sink_the_document() {
        let data = WizardData::from_json(
            r#"{
                "cities": [{"id": 1, "name": "Brest", "latitude": 48.39, "longitude": -4.49,
                    "meteo": [{"date": "2025-07-14", "weather_code": 1.0, "picto": "sun"}, {"date": 7}]}],
                "night_forecast": [{"date": "someday"}, {"date": "2025-07-14", "temp_max": 18.0}]
            }"#,
        )
        .expect("data");
        let meteo = data.cities[0].meteo.as_deref().unwrap_or_default();
        assert_eq!(meteo.len(), 1);
        assert_eq!(data.night_forecast.len(), 1);
        assert_eq!(data.night_forecast[0].temp_max, Some(18.0));
    }

    #[test]
    fn malformed_documents_report_context() {
        let err = WizardData::from_json("{not json").expect_err("should fail");
        assert!(format!("{err:#}").starts_with("parsing wizard data"));
    }

    #[test]
    fn load_without_document_is_empty() {
        assert_eq!(WizardData::load(), WizardData::default());
    }
}
