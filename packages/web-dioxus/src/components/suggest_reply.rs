//! AI reply suggestion block for the review detail page.

use dioxus::prelude::*;
use reviews_client::{ReplyTags, ReviewsClient};
use std::time::Duration;

use crate::utils::clipboard::copy_text;
use crate::utils::redact::redact_pii;
use crate::utils::sleep;

/// How long the copy control shows "Copied!" before reverting.
const COPIED_RESET: Duration = Duration::from_secs(2);

#[derive(Props, Clone, PartialEq)]
pub struct SuggestReplyProps {
    pub id: i64,
    /// Fired after a suggestion lands. The backend stores fresh labels
    /// as a side effect, so the parent refetches the review.
    pub on_completed: EventHandler<()>,
}

/// Button plus editable draft: requests a suggestion, scrubs PII out of
/// it, and offers copy-to-clipboard with tags and the reasoning log.
#[component]
pub fn SuggestReply(props: SuggestReplyProps) -> Element {
    let client = use_context::<ReviewsClient>();

    let mut loading = use_signal(|| false);
    let mut reply = use_signal(String::new);
    let mut tags = use_signal(|| None::<ReplyTags>);
    let mut log = use_signal(|| None::<serde_json::Value>);
    let mut error = use_signal(|| None::<String>);
    let mut copied = use_signal(|| false);
    let mut copy_failed = use_signal(|| false);

    let id = props.id;
    let on_completed = props.on_completed;

    let handle_suggest = move |_| {
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match client.suggest_reply(id).await {
                Ok(suggestion) => {
                    // Scrub before the text ever reaches the DOM.
                    reply.set(redact_pii(&suggestion.reply));
                    tags.set(Some(suggestion.tags));
                    log.set(Some(suggestion.reasoning_log));
                    on_completed.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let handle_copy = move |_| {
        let text = reply();
        spawn(async move {
            copy_failed.set(false);
            match copy_text(&text).await {
                Ok(()) => {
                    copied.set(true);
                    sleep(COPIED_RESET).await;
                    copied.set(false);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Clipboard write failed");
                    copy_failed.set(true);
                }
            }
        });
    };

    rsx! {
        div { class: "suggest-reply",
            button {
                class: "button",
                disabled: loading(),
                onclick: handle_suggest,
                if loading() { "Generating\u{2026}" } else { "Suggest reply" }
            }

            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }

            if !reply().is_empty() {
                div { class: "reply-box",
                    div { class: "reply-header",
                        h4 { "Suggested reply (editable)" }
                        span {
                            class: if copied() { "copy-control copied" } else { "copy-control" },
                            title: "Copy to clipboard",
                            onclick: handle_copy,
                            if copied() { "Copied!" } else { "\u{1F4CB}" }
                        }
                        if copy_failed() {
                            span { class: "error", "Copy failed" }
                        }
                    }

                    textarea {
                        rows: "6",
                        value: "{reply}",
                        oninput: move |evt| reply.set(evt.value()),
                    }

                    if let Some(tags) = tags() {
                        div { class: "reply-tags",
                            strong { "Tags:" }
                            " {tags.sentiment} / {tags.topic}"
                        }
                    }

                    if let Some(log) = log() {
                        details { class: "reasoning-log",
                            summary { "Reasoning log" }
                            pre { {pretty_log(&log)} }
                        }
                    }
                }
            }
        }
    }
}

fn pretty_log(log: &serde_json::Value) -> String {
    serde_json::to_string_pretty(log).unwrap_or_else(|_| log.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reasoning_log_renders_as_indented_json() {
        let log = json!({"sentiment_raw": "NEGATIVE", "topic_extracted": "noise"});
        let shown = pretty_log(&log);
        assert!(shown.contains("\n"));
        assert!(shown.contains("\"sentiment_raw\": \"NEGATIVE\""));
    }
}
