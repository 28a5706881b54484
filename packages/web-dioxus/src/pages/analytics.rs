//! Analytics page

use dioxus::prelude::*;
use reviews_client::{AnalyticsSummary, ReviewsClient};

use crate::components::BarChart;

/// Aggregate sentiment and topic distributions over the stored reviews.
#[component]
pub fn Analytics() -> Element {
    let client = use_context::<ReviewsClient>();
    let mut data = use_signal(|| None::<AnalyticsSummary>);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match client.analytics().await {
                Ok(summary) => data.set(Some(summary)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    rsx! {
        if let Some(err) = error() {
            div { class: "error", "{err}" }
        } else if let Some(summary) = data() {
            div {
                h2 { "Analytics" }
                div { class: "chart-grid",
                    div { class: "chart-panel",
                        h3 { "Sentiment counts" }
                        BarChart {
                            data: summary.sentiment_counts.clone(),
                            color: "var(--secondary)",
                        }
                    }
                    div { class: "chart-panel",
                        h3 { "Topic counts" }
                        BarChart {
                            data: summary.topic_counts.clone(),
                            color: "var(--tertiary)",
                        }
                    }
                }
            }
        } else {
            div { "Loading\u{2026}" }
        }
    }
}
