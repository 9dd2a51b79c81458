use randovango_core::{LatLon, MapConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: MapConfig,
    /// Where the single marker should sit. `None` shows the default view.
    pub focus: Option<LatLon>,
    #[prop_or(AttrValue::from("map"))]
    pub id: AttrValue,
    #[prop_or_default]
    pub label: AttrValue,
}

/// Leaflet map container keeping one marker on the current city or spot.
#[function_component(MapView)]
pub fn map_view(p: &Props) -> Html {
    let node = use_node_ref();

    #[cfg(target_arch = "wasm32")]
    {
        use crate::leaflet::{self, LeafletMap};
        use randovango_core::MapAdapter;

        let adapter = use_mut_ref(|| None::<MapAdapter<LeafletMap>>);
        let node = node.clone();
        let config = p.config.clone();
        use_effect_with(p.focus, move |focus| {
            let mut slot = adapter.borrow_mut();
            match slot.as_mut() {
                Some(map) => {
                    if let Some(at) = focus {
                        map.focus_on(*at);
                    }
                }
                None if !leaflet::available() => {
                    crate::dom::console_error("Leaflet is not loaded, map disabled");
                }
                None => {
                    if let Some(element) = node.cast::<web_sys::HtmlElement>() {
                        let mut map = MapAdapter::new(LeafletMap::new(element), config);
                        match focus {
                            Some(at) => map.init(*at),
                            None => map.init_default(),
                        }
                        *slot = Some(map);
                    }
                }
            }
            || {}
        });
    }

    html! {
        <div id={p.id.clone()} class="map-container" ref={node} role="region" aria-label={p.label.clone()}></div>
    }
}
