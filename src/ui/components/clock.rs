use std::time::Duration;

use dioxus::prelude::*;

use crate::util::clock::{format_clock, now};

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn Clock() -> Element {
    let mut current = use_signal(now);

    let _ticker = use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            current.set(now());
        }
    });

    rsx! {
        span { class: "clock", "{format_clock(current())}" }
    }
}
