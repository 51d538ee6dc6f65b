use dioxus::prelude::*;

use crate::app::DashboardSignals;
use crate::controller;
use crate::domain::Shipment;
use crate::ui::components::status_badge::StatusBadge;
use crate::ui::theme;

#[component]
pub fn ShipmentDetails(shipment: Shipment) -> Element {
    let store = use_context::<DashboardSignals>();
    let accent = theme::status_accent(&shipment.status);
    let progress = format!("{:.0}", shipment.progress);
    let transport = shipment.transport.map(|t| t.name()).unwrap_or("-");
    let delivery = shipment.delivery_date.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        aside { class: "details",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { class: "shipment-id", "{shipment.id}" }
                button {
                    class: "btn",
                    onclick: move |_| controller::clear_selection(&store),
                    "Close"
                }
            }
            StatusBadge { status: shipment.status.clone() }
            p { class: "shipment-leg", "{shipment.origin} \u{279D} {shipment.destination}" }
            if let Some(description) = shipment.description.clone() {
                p { "{description}" }
            }
            p { class: "field-label", "Transport" }
            p { "{transport}" }
            p { class: "field-label", "Estimated delivery" }
            p { "{delivery}" }
            p { class: "field-label", "Progress {progress}%" }
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {progress}%; background: {accent};",
                }
            }
            if shipment.route.is_none() {
                p { class: "shipment-leg", "No route data for this shipment." }
            }
        }
    }
}
