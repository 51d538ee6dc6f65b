use rand::Rng;
use serde::Serialize;

use super::entities::{NewOrderDraft, ShipmentId, ShipmentStatus, TransportType};

pub const ORDER_ID_PREFIX: &str = "PED";
pub const UNKNOWN_PLACE: &str = "Desconocido";
pub const PENDING_DELIVERY: &str = "Pendiente";
pub const NEW_ORDER_DESCRIPTION: &str = "Nueva Carga";

/// Payload posted to `api/shipments` when creating an order.
///
/// Field names follow the remote API's JSON contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewShipment {
    pub id: ShipmentId,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
    pub progress: u8,
    #[serde(rename = "type")]
    pub transport: TransportType,
    #[serde(rename = "fechaEntrega")]
    pub delivery_date: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl NewShipment {
    pub fn from_draft<R: Rng>(draft: &NewOrderDraft, rng: &mut R) -> Self {
        Self {
            id: generate_order_id(rng),
            status: ShipmentStatus::InTransit,
            origin: or_unknown(&draft.origin),
            destination: or_unknown(&draft.destination),
            progress: 0,
            transport: draft.transport,
            delivery_date: PENDING_DELIVERY.to_string(),
            description: NEW_ORDER_DESCRIPTION.to_string(),
        }
    }
}

/// `PED-` followed by a four digit number.
pub fn generate_order_id<R: Rng>(rng: &mut R) -> ShipmentId {
    let suffix: u16 = rng.gen_range(1000..=9999);
    format!("{ORDER_ID_PREFIX}-{suffix}")
}

fn or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        UNKNOWN_PLACE.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn is_order_id(id: &str) -> bool {
        id.strip_prefix("PED-")
            .map(|digits| digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false)
    }

    #[test]
    fn builds_payload_from_draft() {
        let draft = NewOrderDraft {
            origin: "Lima".to_string(),
            destination: "Madrid".to_string(),
            transport: TransportType::Air,
        };
        let order = NewShipment::from_draft(&draft, &mut StdRng::seed_from_u64(7));

        assert!(is_order_id(&order.id), "unexpected id {}", order.id);
        assert_eq!(order.status, ShipmentStatus::InTransit);
        assert_eq!(order.origin, "Lima");
        assert_eq!(order.destination, "Madrid");
        assert_eq!(order.transport, TransportType::Air);
        assert_eq!(order.progress, 0);
    }

    #[test]
    fn blank_places_become_placeholder() {
        let draft = NewOrderDraft {
            origin: String::new(),
            destination: "   ".to_string(),
            transport: TransportType::Land,
        };
        let order = NewShipment::from_draft(&draft, &mut StdRng::seed_from_u64(1));
        assert_eq!(order.origin, UNKNOWN_PLACE);
        assert_eq!(order.destination, UNKNOWN_PLACE);
    }

    #[test]
    fn ids_stay_in_four_digit_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let id = generate_order_id(&mut rng);
            assert!(is_order_id(&id), "unexpected id {id}");
        }
    }

    #[test]
    fn payload_uses_api_field_names() {
        let draft = NewOrderDraft {
            origin: "Lima".to_string(),
            destination: "Madrid".to_string(),
            transport: TransportType::Sea,
        };
        let order = NewShipment::from_draft(&draft, &mut StdRng::seed_from_u64(3));
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["status"], "EN TRANSITO");
        assert_eq!(json["type"], "sea");
        assert_eq!(json["progress"], 0);
        assert_eq!(json["fechaEntrega"], PENDING_DELIVERY);
        assert_eq!(json["descripcion"], NEW_ORDER_DESCRIPTION);
    }
}
