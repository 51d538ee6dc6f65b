use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: usize, accent: Option<&'static str>) -> Element {
    let style = accent.map(|color| format!("color: {color};")).unwrap_or_default();
    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", style: "{style}", "{value}" }
        }
    }
}
