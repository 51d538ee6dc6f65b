//! Map capability used by the dashboard.
//!
//! The presenter talks to the map only through [`MapWidget`], so the Leaflet
//! bridge can be swapped for a recording double in tests.

pub mod leaflet;
pub mod presenter;
pub mod readiness;

#[cfg(test)]
pub(crate) mod testing;

use serde::Serialize;

use crate::domain::{Coords, Shipment, ShipmentStatus};

#[allow(unused_imports)]
pub use presenter::MapPresenter;
#[allow(unused_imports)]
pub use readiness::MapReadiness;

/// DOM id of the element hosting the map.
pub const MAP_CONTAINER_ID: &str = "map";

pub const DEFAULT_VIEW: MapView = MapView {
    center: Coords { lat: 20.0, lng: -40.0 },
    zoom: 3,
};
pub const TILE_MAX_ZOOM: u8 = 19;
/// Padding in pixels kept around a route when fitting the viewport.
pub const ROUTE_PADDING: u32 = 50;

pub const COLOR_IN_TRANSIT: &str = "#00f3ff";
pub const COLOR_DELIVERED: &str = "#0aff60";
pub const COLOR_DELAYED: &str = "#ff9e00";

const PIN_SIZE: u32 = 12;
const PIN_CLASS: &str = "custom-pin";

/// Handle to a layer created by a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LayerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coords,
    pub zoom: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Coords,
    pub north_east: Coords,
}

impl Bounds {
    pub fn spanning(a: Coords, b: Coords) -> Self {
        Self {
            south_west: Coords::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: Coords::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub class_name: &'static str,
    pub html: String,
    pub size: u32,
    pub anchor: u32,
}

impl MarkerIcon {
    /// Glowing dot tinted with `color`.
    pub fn pin(color: &str) -> Self {
        Self {
            class_name: PIN_CLASS,
            html: format!(
                "<div style=\"background-color:{color}; width:{PIN_SIZE}px; height:{PIN_SIZE}px; border-radius:50%; box-shadow:0 0 10px {color}; border:2px solid white;\"></div>"
            ),
            size: PIN_SIZE,
            anchor: PIN_SIZE / 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub shipment_id: String,
    pub position: Coords,
    pub color: &'static str,
    pub icon: MarkerIcon,
    pub popup_html: String,
}

impl MarkerSpec {
    pub fn for_shipment(shipment: &Shipment) -> Self {
        let color = marker_color(&shipment.status);
        Self {
            shipment_id: shipment.id.clone(),
            position: shipment.coords,
            color,
            icon: MarkerIcon::pin(color),
            popup_html: format!(
                "<b>{}</b><br>{} \u{279D} {}",
                escape_html(&shipment.id),
                escape_html(&shipment.origin),
                escape_html(&shipment.destination)
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolylineSpec {
    pub points: [Coords; 2],
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub dash_array: &'static str,
}

impl PolylineSpec {
    pub fn dashed_route(start: Coords, end: Coords) -> Self {
        Self {
            points: [start, end],
            color: "var(--neon-blue)",
            weight: 3,
            opacity: 0.6,
            dash_array: "10, 10",
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::spanning(self.points[0], self.points[1])
    }
}

/// Operations the presenter needs from a map implementation.
pub trait MapWidget {
    fn create_map(&mut self, container_id: &str, view: MapView, zoom_control: bool);
    fn add_tile_layer(&mut self, url_template: &str, max_zoom: u8);
    fn add_marker(&mut self, marker: MarkerSpec) -> LayerId;
    fn add_polyline(&mut self, line: PolylineSpec) -> LayerId;
    fn remove_layer(&mut self, layer: LayerId);
    fn fit_bounds(&mut self, bounds: Bounds, padding: u32);
    fn set_view(&mut self, view: MapView);
}

pub fn marker_color(status: &ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::Delivered => COLOR_DELIVERED,
        ShipmentStatus::Delayed => COLOR_DELAYED,
        _ => COLOR_IN_TRANSIT,
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
