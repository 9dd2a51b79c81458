//! Detail-map pages opened in a secondary window.

/// Window features for detail-map popups.
pub const POPUP_FEATURES: &str = "width=1200,height=800";
pub const POPUP_TARGET: &str = "_blank";

/// Hiking shown alongside a spot when none has been stored.
const DEFAULT_HIKING: &str = "1";

#[must_use]
pub fn hiking_map_url(id: &str) -> String {
    format!("/map/randonnee/{id}")
}

/// Spot detail map, paired with the stored hiking (or the default one).
#[must_use]
pub fn spot_map_url(spot_id: &str, stored_hiking: Option<&str>) -> String {
    let hiking = stored_hiking.unwrap_or(DEFAULT_HIKING);
    format!("/map/spot/{spot_id}?hiking={hiking}")
}
