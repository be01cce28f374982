use std::collections::BTreeMap;

use exhibit_core::map::MapViewport;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub viewport: MapViewport,
}

/// Map container with a single marker popup. Tiles are drawn by the host page.
#[function_component(MapView)]
pub fn map_view(p: &Props) -> Html {
    let vp = &p.viewport;
    let [lat, lng] = vp.center;
    let style = format!(
        "height: {}px; width: 100%; border-radius: 12px; overflow: hidden;",
        vp.height_px
    );
    let label = i18n::tr(
        "map.label",
        &BTreeMap::from([("title", vp.popup_title.as_str())]),
    );
    html! {
        <div class="w-full map-view">
            <div
                class="map-container"
                style={style}
                role="region"
                aria-label={label}
                data-lat={lat.to_string()}
                data-lng={lng.to_string()}
                data-zoom={vp.zoom.to_string()}
            >
                <div class="map-marker-popup">
                    <div class="text-sm">
                        <div class="font-medium">{ vp.popup_title.clone() }</div>
                        <div class="text-muted-foreground">{ vp.popup_subtitle.clone() }</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
