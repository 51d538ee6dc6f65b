use dioxus::prelude::*;

use crate::map::MAP_CONTAINER_ID;

/// Host element for the Leaflet map. Reads no state so it never re-renders
/// over the widget's own DOM.
#[component]
pub fn MapCanvas() -> Element {
    rsx! {
        div { id: MAP_CONTAINER_ID }
    }
}
