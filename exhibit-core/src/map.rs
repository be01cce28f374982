//! Map viewport shown in the transparency demo.

use crate::exhibit::Landmark;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CENTER: [f64; 2] = [14.5895, 120.9739];
pub const DEFAULT_ZOOM: u8 = 16;
pub const DEFAULT_HEIGHT_PX: u32 = 420;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewport {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub height_px: u32,
    pub popup_title: String,
    pub popup_subtitle: String,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            height_px: DEFAULT_HEIGHT_PX,
            popup_title: "Intramuros".to_string(),
            popup_subtitle: "Historic Walled City".to_string(),
        }
    }
}

impl MapViewport {
    /// Viewport centred on `landmark`, keeping defaults for anything it omits.
    #[must_use]
    pub fn for_landmark(landmark: &Landmark) -> Self {
        Self {
            center: landmark.map_center.unwrap_or(DEFAULT_CENTER),
            zoom: landmark.map_zoom.unwrap_or(DEFAULT_ZOOM),
            height_px: DEFAULT_HEIGHT_PX,
            popup_title: landmark.name.clone(),
            popup_subtitle: landmark.location.clone(),
        }
    }
}
