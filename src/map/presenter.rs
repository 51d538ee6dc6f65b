use tracing::debug;

use super::{
    readiness::MapReadiness, LayerId, MapWidget, MarkerSpec, PolylineSpec, DEFAULT_VIEW,
    ROUTE_PADDING, TILE_MAX_ZOOM,
};
use crate::domain::Shipment;

/// Keeps the map's markers and route overlay in step with dashboard state.
///
/// Markers are rebuilt from scratch on every sync and at most one route
/// overlay exists at a time.
pub struct MapPresenter<W> {
    widget: W,
    readiness: MapReadiness,
    initialized: bool,
    markers: Vec<LayerId>,
    route: Option<LayerId>,
}

impl<W: MapWidget> MapPresenter<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            readiness: MapReadiness::new(),
            initialized: false,
            markers: Vec::new(),
            route: None,
        }
    }

    pub fn initialize(&mut self, container_id: &str, tile_url: &str) {
        if self.initialized {
            debug!(container_id, "map already initialized");
            return;
        }
        self.widget.create_map(container_id, DEFAULT_VIEW, false);
        self.widget.add_tile_layer(tile_url, TILE_MAX_ZOOM);
        self.initialized = true;
    }

    pub fn readiness(&self) -> MapReadiness {
        self.readiness.clone()
    }

    pub fn sync_markers(&mut self, shipments: &[Shipment]) {
        if !self.initialized {
            debug!("map not initialized; skipping marker sync");
            return;
        }
        for marker in self.markers.drain(..) {
            self.widget.remove_layer(marker);
        }
        for shipment in shipments {
            let layer = self.widget.add_marker(MarkerSpec::for_shipment(shipment));
            self.markers.push(layer);
        }
    }

    pub fn draw_route(&mut self, shipment: &Shipment) {
        if !self.initialized {
            return;
        }
        self.remove_route();

        if let Some(route) = shipment.route {
            let line = PolylineSpec::dashed_route(route.start, route.end);
            let bounds = line.bounds();
            let layer = self.widget.add_polyline(line);
            self.widget.fit_bounds(bounds, ROUTE_PADDING);
            self.route = Some(layer);
        }
    }

    pub fn reset(&mut self) {
        if !self.initialized {
            return;
        }
        self.remove_route();
        self.widget.set_view(DEFAULT_VIEW);
    }

    #[cfg(test)]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[cfg(test)]
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    #[cfg(test)]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    fn remove_route(&mut self) {
        if let Some(layer) = self.route.take() {
            self.widget.remove_layer(layer);
        }
    }
}
