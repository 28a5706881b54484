//! Loading indicators

use dioxus::prelude::*;

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div { class: "loading-dots",
            div { class: "dot" }
            div { class: "dot", style: "animation-delay: 0.1s" }
            div { class: "dot", style: "animation-delay: 0.2s" }
        }
    }
}
