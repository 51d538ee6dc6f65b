use dioxus::prelude::*;
use tracing::warn;

use crate::app::{submit_order, DashboardSignals, SubmitOrder};
use crate::controller;
use crate::domain::TransportType;

#[component]
pub fn CreateOrderModal() -> Element {
    let store = use_context::<DashboardSignals>();
    let orders = use_context::<Coroutine<SubmitOrder>>();
    let mut state = store.state;

    let (draft, creating) = state.with(|st| (st.draft.clone(), st.is_creating()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_order(&store, &orders);
    };

    rsx! {
        div { class: "modal-backdrop",
            form { class: "modal", onsubmit: on_submit,
                h2 { "New shipment" }
                label { class: "field-label", r#for: "origin", "Origin" }
                input {
                    id: "origin",
                    class: "search",
                    value: "{draft.origin}",
                    oninput: move |evt: FormEvent| state.with_mut(|st| st.draft.origin = evt.value()),
                }
                label { class: "field-label", r#for: "destination", "Destination" }
                input {
                    id: "destination",
                    class: "search",
                    value: "{draft.destination}",
                    oninput: move |evt: FormEvent| state.with_mut(|st| st.draft.destination = evt.value()),
                }
                label { class: "field-label", r#for: "transport", "Type" }
                select {
                    id: "transport",
                    class: "search",
                    value: "{draft.transport.as_str()}",
                    onchange: move |evt: FormEvent| match evt.value().parse::<TransportType>() {
                        Ok(transport) => state.with_mut(|st| st.draft.transport = transport),
                        Err(err) => warn!("{err}"),
                    },
                    for transport in TransportType::ALL {
                        option {
                            value: "{transport.as_str()}",
                            selected: transport == draft.transport,
                            "{transport.name()}"
                        }
                    }
                }
                div { style: "display: flex; gap: 0.5rem; justify-content: flex-end;",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| controller::toggle_create_modal(&store),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: creating,
                        if creating { "Creating..." } else { "Create" }
                    }
                }
            }
        }
    }
}
