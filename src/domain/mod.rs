//! Shipment records and the dashboard's view state.

pub mod dashboard;
pub mod entities;
pub mod order;

#[allow(unused_imports)]
pub use dashboard::{DashboardState, LoadTicket, ShipmentStats};
#[allow(unused_imports)]
pub use entities::{
    Coords, NewOrderDraft, RouteEndpoints, Shipment, ShipmentId, ShipmentStatus, TransportType,
};
#[allow(unused_imports)]
pub use order::NewShipment;
