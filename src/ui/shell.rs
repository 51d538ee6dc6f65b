use dioxus::prelude::*;

use crate::app::DashboardSignals;
use crate::controller;
use crate::ui::components::clock::Clock;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let store = use_context::<DashboardSignals>();

    rsx! {
        div { class: "dashboard",
            header { class: "topbar",
                div {
                    span { class: "brand", "{APP_NAME}" }
                    span { class: "version", "{version_label()}" }
                }
                Clock {}
                button {
                    class: "btn btn-primary",
                    onclick: move |_| controller::toggle_create_modal(&store),
                    "+ New shipment"
                }
            }
            {children}
        }
    }
}
