//! Status-driven colors shared by the list, badges and the detail panel.

use crate::domain::ShipmentStatus;

pub const NEON_BLUE: &str = "var(--neon-blue)";
pub const NEON_GREEN: &str = "var(--neon-green)";
pub const NEON_ORANGE: &str = "var(--neon-orange)";

/// Accent for badges and progress bars. Unlike map markers, unknown statuses
/// share the delayed color here.
pub fn status_accent(status: &ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::InTransit => NEON_BLUE,
        ShipmentStatus::Delivered => NEON_GREEN,
        _ => NEON_ORANGE,
    }
}

pub fn row_class(active: bool) -> &'static str {
    if active {
        "shipment-row active"
    } else {
        "shipment-row"
    }
}
