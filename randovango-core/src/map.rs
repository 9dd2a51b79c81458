//! Single-marker map bookkeeping over an injected mapping backend.
use serde::{Deserialize, Serialize};

/// A parsed coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse both coordinates from markup attribute text. Fails if either
    /// side is not a finite number.
    #[must_use]
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lon = lon.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self { lat, lon })
    }
}

const fn default_tile_url() -> &'static str {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
}

/// Map settings; every field can be overridden from the page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u8,
    /// Zoom used when centring on a city or spot.
    pub focus_zoom: u8,
    pub default_center: LatLon,
    pub default_zoom: u8,
    pub default_marker: LatLon,
    pub default_popup: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: default_tile_url().to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 18,
            focus_zoom: 12,
            default_center: LatLon::new(48.3833, -4.7708),
            default_zoom: 11,
            default_marker: LatLon::new(48.349_998, -4.716_67),
            default_popup: "Plougonvelin".to_string(),
        }
    }
}

/// The subset of a mapping library the wizard relies on.
pub trait MapBackend {
    /// Handle to a layer placed on the map.
    type Layer;

    fn init_view(&mut self, center: LatLon, zoom: u8);
    fn set_view(&mut self, center: LatLon, zoom: u8);
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: u8);
    fn add_marker(&mut self, at: LatLon) -> Self::Layer;
    fn remove_layer(&mut self, layer: &Self::Layer);
    fn bind_popup(&mut self, layer: &Self::Layer, text: &str);
}

/// Keeps at most one "current location" marker on the map.
pub struct MapAdapter<B: MapBackend> {
    backend: B,
    config: MapConfig,
    marker: Option<(B::Layer, LatLon)>,
    ready: bool,
}

impl<B: MapBackend> MapAdapter<B> {
    pub const fn new(backend: B, config: MapConfig) -> Self {
        Self {
            backend,
            config,
            marker: None,
            ready: false,
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Position of the current marker, if any.
    pub fn marker_position(&self) -> Option<LatLon> {
        self.marker.as_ref().map(|(_, at)| *at)
    }

    /// Initialise the view on `center` with a marker there.
    pub fn init(&mut self, center: LatLon) {
        self.backend.init_view(center, self.config.focus_zoom);
        self.add_tiles();
        self.ready = true;
        self.place_marker(center);
    }

    /// Initialise the view for pages that have no city to centre on.
    pub fn init_default(&mut self) {
        let center = self.config.default_center;
        self.backend.init_view(center, self.config.default_zoom);
        self.add_tiles();
        self.ready = true;
        self.place_marker(self.config.default_marker);
        if let Some((layer, _)) = self.marker.as_ref() {
            self.backend.bind_popup(layer, &self.config.default_popup);
        }
    }

    /// Re-centre on the coordinates carried by a city or spot. A coordinate
    /// that fails to parse, or a map that was never initialised, leaves the
    /// current view and marker untouched.
    pub fn focus(&mut self, lat: &str, lon: &str) -> bool {
        match LatLon::parse(lat, lon) {
            Some(at) => self.focus_on(at),
            None => {
                log::debug!("ignoring unparsable coordinates ({lat}, {lon})");
                false
            }
        }
    }

    pub fn focus_on(&mut self, at: LatLon) -> bool {
        if !self.ready {
            return false;
        }
        self.backend.set_view(at, self.config.focus_zoom);
        self.place_marker(at);
        true
    }

    fn add_tiles(&mut self) {
        self.backend.add_tile_layer(
            &self.config.tile_url,
            &self.config.attribution,
            self.config.max_zoom,
        );
    }

    fn place_marker(&mut self, at: LatLon) {
        if let Some((previous, _)) = self.marker.take() {
            self.backend.remove_layer(&previous);
        }
        let layer = self.backend.add_marker(at);
        self.marker = Some((layer, at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_both_coordinates() {
        assert_eq!(
            LatLon::parse("48.39", " -4.48 "),
            Some(LatLon::new(48.39, -4.48))
        );
        assert_eq!(LatLon::parse("", "-4.48"), None);
        assert_eq!(LatLon::parse("48.39", "abc"), None);
        assert_eq!(LatLon::parse("NaN", "1"), None);
        assert_eq!(LatLon::parse("inf", "1"), None);
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let cfg: MapConfig = serde_json::from_str(r#"{"focus_zoom": 14}"#).expect("config");
        assert_eq!(cfg.focus_zoom, 14);
        assert_eq!(cfg.max_zoom, 18);
        assert_eq!(cfg.tile_url, default_tile_url());
    }
}
