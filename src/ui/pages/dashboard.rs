use dioxus::prelude::*;

use crate::app::DashboardSignals;
use crate::ui::{
    components::{
        create_order_modal::CreateOrderModal, kpi_card::KpiCard, map_canvas::MapCanvas,
        shipment_details::ShipmentDetails, shipment_list::ShipmentList,
    },
    shell::Shell,
    theme,
};

#[component]
pub fn DashboardPage() -> Element {
    let store = use_context::<DashboardSignals>();
    let (stats, selected, show_modal) = store
        .state
        .with(|st| (st.stats(), st.selected.clone(), st.show_create_modal));

    rsx! {
        Shell {
            section { class: "kpi-row",
                KpiCard { title: "Total shipments".to_string(), value: stats.total }
                KpiCard { title: "In transit".to_string(), value: stats.transit, accent: Some(theme::NEON_BLUE) }
                KpiCard { title: "Delayed".to_string(), value: stats.alert, accent: Some(theme::NEON_ORANGE) }
                KpiCard { title: "Delivered".to_string(), value: stats.done, accent: Some(theme::NEON_GREEN) }
            }
            section { class: "workspace",
                div { class: "sidebar", ShipmentList {} }
                div { class: "map-shell",
                    MapCanvas {}
                    if let Some(shipment) = selected {
                        ShipmentDetails { shipment }
                    }
                }
            }
            if show_modal {
                CreateOrderModal {}
            }
        }
    }
}
