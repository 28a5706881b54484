//! Inbox page: the filterable review listing plus batch ingest.

use dioxus::prelude::*;
use reviews_client::{Review, ReviewQuery, ReviewsClient};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::components::{LoadingDots, Pagination, ReviewTable};
use crate::utils::debounce::use_debounce;

/// Inbox shows short pages; the point is triage, not bulk reading.
const PAGE_SIZE: u32 = 5;

/// Quiet period before a typed search becomes a request.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(350);

/// Review inbox: filters, debounced text search, the clickable listing,
/// and the ingest box for JSON batches (pasted or uploaded).
#[component]
pub fn Inbox() -> Element {
    let client = use_context::<ReviewsClient>();

    let mut reviews = use_signal(Vec::<Review>::new);
    let mut total = use_signal(|| 0u64);
    let mut page = use_signal(|| 1u32);
    let mut q = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut sentiment = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0u32);

    let mut json_input = use_signal(String::new);
    let mut uploading = use_signal(|| false);
    let mut ingest_error = use_signal(|| None::<String>);

    // Typing pauses for the quiet period before the committed query
    // changes; every keystroke in between only replaces the pending one.
    let mut debounced_q = use_debounce(SEARCH_DEBOUNCE, move |value: String| {
        q.set(value);
        page.set(1);
    });

    // Refetch whenever a filter, the page, or the refresh tick changes.
    let fetch_client = client.clone();
    use_effect(move || {
        let query = ReviewQuery {
            location: Some(location()).filter(|v| !v.is_empty()),
            sentiment: Some(sentiment()).filter(|v| !v.is_empty()),
            q: Some(q()).filter(|v| !v.is_empty()),
            page: page(),
            page_size: PAGE_SIZE,
        };
        let _tick = refresh();
        let client = fetch_client.clone();
        spawn(async move {
            fetch_reviews(client, query, &mut reviews, &mut total, &mut loading, &mut error)
                .await;
        });
    });

    let ingest_client = client.clone();
    let run_ingest = use_callback(move |batch: Vec<Value>| {
        let client = ingest_client.clone();
        spawn(async move {
            uploading.set(true);
            ingest_error.set(None);
            match client.ingest(&batch, false).await {
                Ok(receipt) => {
                    tracing::info!(ingested = receipt.ingested, "Review batch ingested");
                    json_input.set(String::new());
                    // Back to the first page so the new rows are visible.
                    page.set(1);
                    refresh.set(refresh() + 1);
                }
                Err(e) => ingest_error.set(Some(format!("Upload failed: {e}"))),
            }
            uploading.set(false);
        });
    });

    let handle_json_submit = move |_| {
        let raw = json_input();
        if raw.trim().is_empty() {
            return;
        }
        match parse_review_batch(&raw) {
            Ok(batch) => {
                run_ingest.call(batch);
            }
            Err(e) => ingest_error.set(Some(e.to_string())),
        }
    };

    let handle_file_upload = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let Some(name) = file_engine.files().first().cloned() else {
            return;
        };
        spawn(async move {
            match file_engine.read_file_to_string(&name).await {
                Some(text) => match parse_review_batch(&text) {
                    Ok(batch) => {
                        run_ingest.call(batch);
                    }
                    Err(IngestError::Parse(msg)) => {
                        ingest_error.set(Some(format!("Invalid JSON in file: {msg}")));
                    }
                    Err(other) => ingest_error.set(Some(other.to_string())),
                },
                None => ingest_error.set(Some("Could not read file".to_string())),
            }
        });
    };

    let clear_client = client.clone();
    let handle_clear = move |_| {
        let client = clear_client.clone();
        spawn(async move {
            loading.set(true);
            match client.ingest(&[], true).await {
                Ok(_) => {
                    reviews.set(Vec::new());
                    total.set(0);
                    page.set(1);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let handle_refresh = move |_| {
        page.set(1);
        refresh.set(refresh() + 1);
    };

    rsx! {
        div {
            div { class: "filters",
                input {
                    placeholder: "Search text...",
                    oninput: move |evt| debounced_q.call(evt.value()),
                }
                input {
                    placeholder: "Location (NYC / SF...)",
                    oninput: move |evt| {
                        location.set(evt.value());
                        page.set(1);
                    },
                }
                select {
                    onchange: move |evt| {
                        sentiment.set(evt.value());
                        page.set(1);
                    },
                    option { value: "", "All sentiments" }
                    option { value: "positive", "Positive" }
                    option { value: "neutral", "Neutral" }
                    option { value: "negative", "Negative" }
                }
                button { class: "button small", onclick: handle_refresh, "Refresh" }
                button { class: "button small danger", onclick: handle_clear, "Clear Table" }
            }

            div { class: "json-upload",
                textarea {
                    rows: "6",
                    placeholder: "Paste JSON array of reviews here OR use the file upload below",
                    value: "{json_input}",
                    oninput: move |evt| json_input.set(evt.value()),
                }
                button {
                    class: "button",
                    disabled: uploading(),
                    onclick: handle_json_submit,
                    if uploading() { "Uploading\u{2026}" } else { "Add Reviews (from text)" }
                }
                input {
                    r#type: "file",
                    accept: ".json,application/json",
                    onchange: handle_file_upload,
                }
                if let Some(err) = ingest_error() {
                    div { class: "error", "{err}" }
                }
            }

            if loading() {
                LoadingDots {}
            }
            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }

            ReviewTable { reviews: reviews() }

            Pagination {
                page: page(),
                page_size: PAGE_SIZE,
                total: total(),
                on_change: move |p| page.set(p),
            }
        }
    }
}

async fn fetch_reviews(
    client: ReviewsClient,
    query: ReviewQuery,
    reviews: &mut Signal<Vec<Review>>,
    total: &mut Signal<u64>,
    loading: &mut Signal<bool>,
    error: &mut Signal<Option<String>>,
) {
    loading.set(true);
    error.set(None);
    match client.list_reviews(&query).await {
        Ok(listing) => {
            reviews.set(listing.reviews);
            total.set(listing.total);
        }
        Err(e) => {
            error.set(Some(e.to_string()));
            reviews.set(Vec::new());
            total.set(0);
        }
    }
    loading.set(false);
}

/// Why a pasted or uploaded batch was rejected before upload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Input must be a JSON array of reviews")]
    NotArray,
}

/// Validate a raw batch client-side: it must parse and it must be an
/// array. Elements stay raw JSON; field validation is the backend's job.
pub fn parse_review_batch(raw: &str) -> Result<Vec<Value>, IngestError> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|e| IngestError::Parse(e.to_string()))?;
    match parsed {
        Value::Array(items) => Ok(items),
        _ => Err(IngestError::NotArray),
    }
}
