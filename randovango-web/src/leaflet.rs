//! Leaflet bindings backing the wizard map.
//!
//! The page loads Leaflet as the global `L`; callers check [`available`]
//! before building a [`LeafletMap`].
use randovango_core::{LatLon, MapBackend};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    pub type RawMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(element: &HtmlElement) -> RawMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &RawMap, center: &JsValue, zoom: u8) -> RawMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &RawMap, layer: &Layer) -> RawMap;

    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(at: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &RawMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Layer) -> Layer;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

/// Whether the Leaflet global is loaded on this page.
#[must_use]
pub fn available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L"))
        .map(|l| l.is_object())
        .unwrap_or(false)
}

fn lat_lng(at: LatLon) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(at.lat));
    pair.push(&JsValue::from_f64(at.lon));
    pair.into()
}

/// A Leaflet map bound to one container element.
pub struct LeafletMap {
    container: HtmlElement,
    map: Option<RawMap>,
}

impl LeafletMap {
    #[must_use]
    pub const fn new(container: HtmlElement) -> Self {
        Self {
            container,
            map: None,
        }
    }
}

impl MapBackend for LeafletMap {
    type Layer = Layer;

    fn init_view(&mut self, center: LatLon, zoom: u8) {
        let map = self.map.get_or_insert_with(|| new_map(&self.container));
        map.set_view(&lat_lng(center), zoom);
    }

    fn set_view(&mut self, center: LatLon, zoom: u8) {
        if let Some(map) = &self.map {
            map.set_view(&lat_lng(center), zoom);
        }
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: u8) {
        let Some(map) = &self.map else {
            return;
        };
        let options = TileOptions {
            attribution,
            max_zoom,
        };
        match serde_wasm_bindgen::to_value(&options) {
            Ok(options) => {
                tile_layer(url_template, &options).add_to(map);
            }
            Err(err) => log::warn!("tile layer options: {err}"),
        }
    }

    fn add_marker(&mut self, at: LatLon) -> Layer {
        let layer = marker(&lat_lng(at));
        if let Some(map) = &self.map {
            layer.add_to(map);
        }
        layer
    }

    fn remove_layer(&mut self, layer: &Layer) {
        if let Some(map) = &self.map {
            map.remove_layer(layer);
        }
    }

    fn bind_popup(&mut self, layer: &Layer, text: &str) {
        layer.bind_popup(text).open_popup();
    }
}
