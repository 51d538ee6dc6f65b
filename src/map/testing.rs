use std::collections::BTreeMap;

use super::{Bounds, LayerId, MapView, MapWidget, MarkerSpec, PolylineSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Marker,
    Polyline,
}

#[derive(Clone, Debug, PartialEq)]
enum Layer {
    Marker(MarkerSpec),
    Polyline(PolylineSpec),
}

/// In-memory map that records what the presenter asked for.
#[derive(Default)]
pub struct RecordingWidget {
    pub container: Option<String>,
    pub zoom_control: Option<bool>,
    pub tile_layers: Vec<(String, u8)>,
    pub views: Vec<MapView>,
    pub fitted: Vec<(Bounds, u32)>,
    layers: BTreeMap<LayerId, Layer>,
    next_layer: u64,
}

impl RecordingWidget {
    pub fn live(&self, kind: LayerKind) -> usize {
        self.layers
            .values()
            .filter(|layer| match (layer, kind) {
                (Layer::Marker(_), LayerKind::Marker) => true,
                (Layer::Polyline(_), LayerKind::Polyline) => true,
                _ => false,
            })
            .count()
    }

    pub fn marker_ids(&self) -> Vec<&str> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Marker(spec) => Some(spec.shipment_id.as_str()),
                Layer::Polyline(_) => None,
            })
            .collect()
    }

    fn insert(&mut self, layer: Layer) -> LayerId {
        self.next_layer += 1;
        let id = LayerId(self.next_layer);
        self.layers.insert(id, layer);
        id
    }
}

impl MapWidget for RecordingWidget {
    fn create_map(&mut self, container_id: &str, view: MapView, zoom_control: bool) {
        self.container = Some(container_id.to_string());
        self.zoom_control = Some(zoom_control);
        self.views.push(view);
    }

    fn add_tile_layer(&mut self, url_template: &str, max_zoom: u8) {
        self.tile_layers.push((url_template.to_string(), max_zoom));
    }

    fn add_marker(&mut self, marker: MarkerSpec) -> LayerId {
        self.insert(Layer::Marker(marker))
    }

    fn add_polyline(&mut self, line: PolylineSpec) -> LayerId {
        self.insert(Layer::Polyline(line))
    }

    fn remove_layer(&mut self, layer: LayerId) {
        assert!(
            self.layers.remove(&layer).is_some(),
            "removed unknown layer {layer:?}"
        );
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: u32) {
        self.fitted.push((bounds, padding));
    }

    fn set_view(&mut self, view: MapView) {
        self.views.push(view);
    }
}
