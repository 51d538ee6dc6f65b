use dioxus::prelude::*;

use crate::app::DashboardSignals;
use crate::controller;
use crate::domain::Shipment;
use crate::ui::components::status_badge::StatusBadge;
use crate::ui::theme;

#[component]
pub fn ShipmentList() -> Element {
    let store = use_context::<DashboardSignals>();
    let mut state = store.state;

    let (rows, search_term, selected_id) = state.with(|st| {
        (
            st.filtered_shipments()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>(),
            st.search_term.clone(),
            st.selected.as_ref().map(|s| s.id.clone()),
        )
    });

    rsx! {
        input {
            class: "search",
            r#type: "search",
            placeholder: "Search by shipment ID…",
            value: "{search_term}",
            oninput: move |evt: FormEvent| state.with_mut(|st| st.search_term = evt.value()),
        }
        if rows.is_empty() {
            p { class: "empty", "No shipments match." }
        }
        for shipment in rows {
            ShipmentRow {
                key: "{shipment.id}",
                active: selected_id.as_deref() == Some(shipment.id.as_str()),
                shipment: shipment.clone(),
                onselect: move |picked: Shipment| controller::select(&store, picked),
            }
        }
    }
}

#[component]
fn ShipmentRow(active: bool, shipment: Shipment, onselect: EventHandler<Shipment>) -> Element {
    let picked = shipment.clone();
    rsx! {
        div {
            class: "{theme::row_class(active)}",
            onclick: move |_| onselect.call(picked.clone()),
            span { class: "shipment-id", "{shipment.id}" }
            span { class: "shipment-leg", "{shipment.origin} \u{279D} {shipment.destination}" }
            StatusBadge { status: shipment.status.clone() }
        }
    }
}
