//! City step: the options of the city selector and what a change updates.
use serde::{Deserialize, Serialize};

use crate::map::LatLon;
use crate::weather::{ForecastDay, WeatherPanel, parse_forecast};

pub const ATTR_LAT: &str = "data-lat";
pub const ATTR_LON: &str = "data-lon";
pub const ATTR_NAME: &str = "data-name";
pub const ATTR_DEPT: &str = "data-dept";
pub const ATTR_COUNTRY: &str = "data-country";
pub const ATTR_HIKES: &str = "data-rando";
pub const ATTR_SPOTS: &str = "data-spots";
pub const ATTR_POI: &str = "data-poi";
pub const ATTR_METEO: &str = "data-meteo";

/// Per-city counters supplied with the city list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStats {
    #[serde(default)]
    pub hikes: u32,
    #[serde(default)]
    pub spots: u32,
    #[serde(default)]
    pub poi: u32,
}

/// A city as delivered in the page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub stats: CityStats,
    #[serde(default, deserialize_with = "crate::weather::deserialize_optional_forecast")]
    pub meteo: Option<Vec<ForecastDay>>,
}

impl CityRecord {
    /// Flatten into the attribute form carried by a selector option.
    #[must_use]
    pub fn to_option(&self) -> CityOption {
        let meteo = self
            .meteo
            .as_ref()
            .and_then(|days| serde_json::to_string(days).ok())
            .unwrap_or_else(|| "[]".to_string());
        CityOption {
            name: self.name.clone(),
            department: self.department.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            lat: self.latitude.to_string(),
            lon: self.longitude.to_string(),
            hikes: self.stats.hikes.to_string(),
            spots: self.stats.spots.to_string(),
            poi: self.stats.poi.to_string(),
            meteo,
        }
    }
}

/// A city selector option, as read back from its attributes.
///
/// Values stay as attribute text; coordinates and forecasts are parsed when
/// used so that bad markup degrades instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityOption {
    pub name: String,
    pub department: String,
    pub country: String,
    pub lat: String,
    pub lon: String,
    pub hikes: String,
    pub spots: String,
    pub poi: String,
    pub meteo: String,
}

impl CityOption {
    /// Build from an attribute lookup; missing attributes read as empty.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| attr(name).unwrap_or_default();
        Self {
            name: read(ATTR_NAME),
            department: read(ATTR_DEPT),
            country: read(ATTR_COUNTRY),
            lat: read(ATTR_LAT),
            lon: read(ATTR_LON),
            hikes: read(ATTR_HIKES),
            spots: read(ATTR_SPOTS),
            poi: read(ATTR_POI),
            meteo: read(ATTR_METEO),
        }
    }

    /// Attribute pairs to write onto the option element.
    #[must_use]
    pub fn attributes(&self) -> [(&'static str, &str); 9] {
        [
            (ATTR_LAT, &self.lat),
            (ATTR_LON, &self.lon),
            (ATTR_NAME, &self.name),
            (ATTR_DEPT, &self.department),
            (ATTR_COUNTRY, &self.country),
            (ATTR_HIKES, &self.hikes),
            (ATTR_SPOTS, &self.spots),
            (ATTR_POI, &self.poi),
            (ATTR_METEO, &self.meteo),
        ]
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<LatLon> {
        LatLon::parse(&self.lat, &self.lon)
    }

    #[must_use]
    pub fn forecast(&self) -> Vec<ForecastDay> {
        parse_forecast(&self.meteo)
    }

    #[must_use]
    pub fn summary(&self) -> CitySummary {
        let location = if self.country.is_empty() {
            self.department.clone()
        } else {
            format!("{} - {}", self.department, self.country)
        };
        CitySummary {
            name: self.name.clone(),
            location,
            hikes: self.hikes.clone(),
            spots: self.spots.clone(),
            poi: self.poi.clone(),
        }
    }

    /// Everything the city step redraws when this option becomes current.
    #[must_use]
    pub fn change(&self) -> CityChange {
        log::debug!("city changed to {}", self.name);
        CityChange {
            summary: self.summary(),
            panel: WeatherPanel::build(&self.forecast()),
            coordinates: self.coordinates(),
        }
    }
}

/// Text shown in the city information block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitySummary {
    pub name: String,
    /// `"{department} - {country}"`, or the department alone.
    pub location: String,
    pub hikes: String,
    pub spots: String,
    pub poi: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityChange {
    pub summary: CitySummary,
    pub panel: WeatherPanel,
    /// `None` when the option carries unusable coordinates.
    pub coordinates: Option<LatLon>,
}
