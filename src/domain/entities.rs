use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const STATUS_IN_TRANSIT: &str = "EN TRANSITO";
pub const STATUS_DELIVERED: &str = "ENTREGADO";
pub const STATUS_DELAYED: &str = "RETRASADO";

/// Identifier for shipments returned by the shipments API.
pub type ShipmentId = String;

/// Delivery status as reported by the API.
///
/// Labels outside the known set are kept verbatim so they still count towards
/// totals and render in the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShipmentStatus {
    #[default]
    InTransit,
    Delivered,
    Delayed,
    Other(String),
}

impl ShipmentStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            STATUS_IN_TRANSIT => ShipmentStatus::InTransit,
            STATUS_DELIVERED => ShipmentStatus::Delivered,
            STATUS_DELAYED => ShipmentStatus::Delayed,
            other => ShipmentStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ShipmentStatus::InTransit => STATUS_IN_TRANSIT,
            ShipmentStatus::Delivered => STATUS_DELIVERED,
            ShipmentStatus::Delayed => STATUS_DELAYED,
            ShipmentStatus::Other(label) => label,
        }
    }
}

impl From<String> for ShipmentStatus {
    fn from(value: String) -> Self {
        ShipmentStatus::from_label(&value)
    }
}

impl From<ShipmentStatus> for String {
    fn from(value: ShipmentStatus) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    #[default]
    Land,
    Air,
    Sea,
}

impl TransportType {
    pub const ALL: [TransportType; 3] = [TransportType::Land, TransportType::Air, TransportType::Sea];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Land => "land",
            TransportType::Air => "air",
            TransportType::Sea => "sea",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransportType::Land => "Land freight",
            TransportType::Air => "Air freight",
            TransportType::Sea => "Sea freight",
        }
    }
}

impl FromStr for TransportType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "land" => Ok(TransportType::Land),
            "air" => Ok(TransportType::Air),
            "sea" => Ok(TransportType::Sea),
            other => Err(format!("unknown transport type: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True for finite coordinates inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Endpoints of the route drawn for a selected shipment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEndpoints {
    pub start: Coords,
    pub end: Coords,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shipment {
    pub id: ShipmentId,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
    pub coords: Coords,
    pub route: Option<RouteEndpoints>,
    /// Completion percentage, 0 to 100.
    pub progress: f64,
    pub transport: Option<TransportType>,
    pub delivery_date: Option<String>,
    pub description: Option<String>,
}

/// Form state for the "new shipment" modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewOrderDraft {
    pub origin: String,
    pub destination: String,
    pub transport: TransportType,
}
