//! Review detail page

use dioxus::prelude::*;
use reviews_client::{Review, ReviewsClient, SearchHit};

use crate::components::{LoadingDots, SuggestReply};

/// How many similar reviews to pull up.
const SIMILAR_LIMIT: u32 = 5;

/// Single-review view: full text, labels, the reply suggestion block,
/// and an on-demand similar-review lookup.
///
/// `id` comes from the route as a reactive signal, so navigating from
/// one review straight to another refetches without a remount.
#[component]
pub fn ReviewDetail(id: ReadOnlySignal<i64>) -> Element {
    let client = use_context::<ReviewsClient>();
    let navigator = use_navigator();

    let mut review = use_signal(|| None::<Review>);
    let mut similar = use_signal(Vec::<SearchHit>::new);
    let mut show_similar = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0u32);

    // Refetch on navigation and after a suggestion stores new labels.
    let fetch_client = client.clone();
    use_effect(move || {
        let id = id();
        let _tick = refresh();
        let client = fetch_client.clone();
        spawn(async move {
            fetch_review(client, id, &mut review, &mut loading, &mut error).await;
        });
    });

    // A different review invalidates the similar list.
    use_effect(move || {
        let _id = id();
        similar.set(Vec::new());
        show_similar.set(false);
    });

    let search_client = client.clone();
    let handle_similar = move |_| {
        let Some(current) = review() else {
            return;
        };
        let client = search_client.clone();
        spawn(async move {
            match client.search(&current.text, SIMILAR_LIMIT).await {
                Ok(found) => {
                    similar.set(found.results);
                    show_similar.set(true);
                }
                Err(e) => error.set(Some(format!("Search failed: {e}"))),
            }
        });
    };

    rsx! {
        div { class: "review-detail",
            button {
                class: "button small",
                onclick: move |_| {
                    navigator.go_back();
                },
                "Back"
            }

            if loading() {
                LoadingDots {}
            }
            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }

            if let Some(review) = review() {
                div { class: "card mt-4",
                    h2 { "Review #{review.id}" }
                    div {
                        strong { "Location:" }
                        " {review.location}"
                    }
                    div {
                        strong { "Rating:" }
                        " {review.rating}"
                    }
                    div {
                        strong { "Date:" }
                        " {review.date}"
                    }
                    div {
                        strong { "Sentiment:" }
                        " "
                        {review.sentiment.clone().unwrap_or_default()}
                    }
                    div {
                        strong { "Topic:" }
                        " "
                        {review.topic.clone().unwrap_or_default()}
                    }
                    div { class: "review-text",
                        strong { "Text:" }
                        div { "{review.text}" }
                    }

                    SuggestReply {
                        id: review.id,
                        on_completed: move |_| refresh.set(refresh() + 1),
                    }

                    div { class: "mt-4",
                        button {
                            class: "button small outline",
                            onclick: handle_similar,
                            "Find similar reviews"
                        }
                    }
                }

                if show_similar() {
                    div { class: "card mt-4",
                        h3 { "Similar Reviews" }
                        if similar().is_empty() {
                            p { class: "muted", "No similar reviews found." }
                        } else {
                            table { class: "similar-table",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Location" }
                                        th { "Rating" }
                                        th { "Text" }
                                    }
                                }
                                tbody {
                                    for hit in similar().iter() {
                                        tr { key: "{hit.review.id}",
                                            td { "#{hit.review.id}" }
                                            td { "{hit.review.location}" }
                                            td { "{hit.review.rating}\u{2605}" }
                                            td { "{hit.review.text}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn fetch_review(
    client: ReviewsClient,
    id: i64,
    review: &mut Signal<Option<Review>>,
    loading: &mut Signal<bool>,
    error: &mut Signal<Option<String>>,
) {
    loading.set(true);
    error.set(None);
    match client.get_review(id).await {
        Ok(found) => review.set(Some(found)),
        Err(e) => {
            error.set(Some(e.to_string()));
            review.set(None);
        }
    }
    loading.set(false);
}
