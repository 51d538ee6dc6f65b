use dioxus::prelude::*;

use crate::domain::ShipmentStatus;
use crate::ui::theme;

#[component]
pub fn StatusBadge(status: ShipmentStatus) -> Element {
    let color = theme::status_accent(&status);
    rsx! {
        span {
            class: "status-badge",
            style: "color: {color};",
            "{status}"
        }
    }
}
