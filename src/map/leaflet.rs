//! Leaflet-backed [`MapWidget`].
//!
//! Widget calls are serialized into [`MapCommand`]s and queued on a channel.
//! [`run_bridge`] drains that channel into `assets/map_bridge.js` through
//! `document::eval`, and turns the script's replies into readiness and
//! marker-click notifications.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::{
    readiness::MapReadiness, Bounds, LayerId, MapView, MapWidget, MarkerIcon, MarkerSpec,
    PolylineSpec,
};
use crate::domain::Coords;
use crate::util::assets;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MapCommand {
    CreateMap {
        container: String,
        view: MapView,
        zoom_control: bool,
    },
    AddTileLayer {
        url: String,
        max_zoom: u8,
    },
    AddMarker {
        layer: LayerId,
        shipment_id: String,
        position: Coords,
        icon: MarkerIcon,
        popup_html: String,
    },
    AddPolyline {
        layer: LayerId,
        points: [Coords; 2],
        color: &'static str,
        weight: u32,
        opacity: f64,
        dash_array: &'static str,
    },
    RemoveLayer {
        layer: LayerId,
    },
    FitBounds {
        bounds: Bounds,
        padding: u32,
    },
    SetView {
        view: MapView,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeEvent {
    Ready,
    MarkerClicked { shipment_id: String },
}

#[derive(Clone)]
pub struct LeafletWidget {
    commands: UnboundedSender<MapCommand>,
    next_layer: Rc<Cell<u64>>,
}

impl LeafletWidget {
    pub fn new(commands: UnboundedSender<MapCommand>) -> Self {
        Self {
            commands,
            next_layer: Rc::new(Cell::new(0)),
        }
    }

    fn allocate(&self) -> LayerId {
        let next = self.next_layer.get() + 1;
        self.next_layer.set(next);
        LayerId(next)
    }

    fn push(&self, command: MapCommand) {
        if self.commands.send(command).is_err() {
            debug!("map bridge stopped; dropping command");
        }
    }
}

impl MapWidget for LeafletWidget {
    fn create_map(&mut self, container_id: &str, view: MapView, zoom_control: bool) {
        self.push(MapCommand::CreateMap {
            container: container_id.to_string(),
            view,
            zoom_control,
        });
    }

    fn add_tile_layer(&mut self, url_template: &str, max_zoom: u8) {
        self.push(MapCommand::AddTileLayer {
            url: url_template.to_string(),
            max_zoom,
        });
    }

    fn add_marker(&mut self, marker: MarkerSpec) -> LayerId {
        let layer = self.allocate();
        self.push(MapCommand::AddMarker {
            layer,
            shipment_id: marker.shipment_id,
            position: marker.position,
            icon: marker.icon,
            popup_html: marker.popup_html,
        });
        layer
    }

    fn add_polyline(&mut self, line: PolylineSpec) -> LayerId {
        let layer = self.allocate();
        self.push(MapCommand::AddPolyline {
            layer,
            points: line.points,
            color: line.color,
            weight: line.weight,
            opacity: line.opacity,
            dash_array: line.dash_array,
        });
        layer
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.push(MapCommand::RemoveLayer { layer });
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: u32) {
        self.push(MapCommand::FitBounds { bounds, padding });
    }

    fn set_view(&mut self, view: MapView) {
        self.push(MapCommand::SetView { view });
    }
}

/// Runs for the lifetime of the map: forwards queued commands to the bridge
/// script and dispatches the events it sends back.
pub async fn run_bridge(
    mut commands: UnboundedReceiver<MapCommand>,
    readiness: MapReadiness,
    mut on_marker_click: impl FnMut(String),
) {
    let mut bridge = document::eval(assets::map_bridge_js());

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("map command channel closed");
                    break;
                };
                if let Err(err) = bridge.send(&command) {
                    warn!("Failed to forward map command: {err:?}");
                }
            }
            event = bridge.recv::<BridgeEvent>() => match event {
                Ok(BridgeEvent::Ready) => {
                    info!("map ready");
                    readiness.mark_ready();
                }
                Ok(BridgeEvent::MarkerClicked { shipment_id }) => on_marker_click(shipment_id),
                Err(err) => {
                    warn!("Map bridge stopped: {err:?}");
                    break;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::dashboard::fixtures::shipment;
    use crate::domain::ShipmentStatus;
    use crate::map::DEFAULT_VIEW;

    #[test]
    fn widget_queues_commands_with_fresh_layer_ids() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut widget = LeafletWidget::new(tx);

        let first = widget.add_marker(MarkerSpec::for_shipment(&shipment("A", ShipmentStatus::Delivered)));
        let second = widget.add_polyline(PolylineSpec::dashed_route(
            Coords::new(0.0, 0.0),
            Coords::new(1.0, 1.0),
        ));
        widget.remove_layer(first);

        assert_ne!(first, second);
        assert!(matches!(rx.try_recv(), Ok(MapCommand::AddMarker { layer, .. }) if layer == first));
        assert!(matches!(rx.try_recv(), Ok(MapCommand::AddPolyline { layer, .. }) if layer == second));
        assert_eq!(rx.try_recv().ok(), Some(MapCommand::RemoveLayer { layer: first }));
    }

    #[test]
    fn commands_serialize_for_the_bridge_script() {
        let command = MapCommand::CreateMap {
            container: "map".to_string(),
            view: DEFAULT_VIEW,
            zoom_control: false,
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "op": "create_map",
                "container": "map",
                "view": { "center": { "lat": 20.0, "lng": -40.0 }, "zoom": 3 },
                "zoom_control": false
            })
        );

        let remove = serde_json::to_value(MapCommand::RemoveLayer { layer: LayerId(7) }).unwrap();
        assert_eq!(remove, json!({ "op": "remove_layer", "layer": 7 }));
    }

    #[test]
    fn bridge_events_decode() {
        let ready: BridgeEvent = serde_json::from_value(json!({ "event": "ready" })).unwrap();
        assert_eq!(ready, BridgeEvent::Ready);

        let click: BridgeEvent = serde_json::from_value(
            json!({ "event": "marker_clicked", "shipment_id": "PED-1001" }),
        )
        .unwrap();
        assert_eq!(
            click,
            BridgeEvent::MarkerClicked {
                shipment_id: "PED-1001".to_string()
            }
        );
    }

    #[test]
    fn dropped_bridge_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut widget = LeafletWidget::new(tx);
        widget.set_view(DEFAULT_VIEW);
    }
}
