//! Review listing table

use dioxus::prelude::*;
use reviews_client::Review;

use crate::routes::Route;

/// Longest text preview shown in the table before cutting.
const PREVIEW_LEN: usize = 140;

#[derive(Props, Clone, PartialEq)]
pub struct ReviewTableProps {
    pub reviews: Vec<Review>,
}

/// Table of reviews; clicking a row opens the detail page.
#[component]
pub fn ReviewTable(props: ReviewTableProps) -> Element {
    let navigator = use_navigator();

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "ID" }
                    th { "Location" }
                    th { "Rating" }
                    th { "Sentiment" }
                    th { "Topic" }
                    th { "Text" }
                }
            }
            tbody {
                for review in props.reviews.iter() {
                    tr {
                        key: "{review.id}",
                        class: "row-clickable",
                        onclick: {
                            let id = review.id;
                            move |_| {
                                navigator.push(Route::ReviewDetail { id });
                            }
                        },
                        td { "{review.id}" }
                        td { "{review.location}" }
                        td { "{review.rating}" }
                        td { {review.sentiment.clone().unwrap_or_default()} }
                        td { {review.topic.clone().unwrap_or_default()} }
                        td { {preview(&review.text)} }
                    }
                }
                if props.reviews.is_empty() {
                    tr {
                        td { colspan: "6", class: "muted", "No reviews" }
                    }
                }
            }
        }
    }
}

/// First [`PREVIEW_LEN`] characters of the text, with an ellipsis when
/// cut. Counts characters rather than bytes so multibyte text never
/// splits mid-glyph.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_LEN {
        let cut: String = text.chars().take(PREVIEW_LEN).collect();
        format!("{cut}\u{2026}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_shown_whole() {
        assert_eq!(preview("Great stay!"), "Great stay!");
    }

    #[test]
    fn text_at_the_limit_is_not_cut() {
        let text = "y".repeat(140);
        assert_eq!(preview(&text), text);
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        let text = "x".repeat(200);
        let shown = preview(&text);
        assert_eq!(shown.chars().count(), 141);
        assert!(shown.ends_with('\u{2026}'));
    }

    #[test]
    fn multibyte_text_cuts_on_a_char_boundary() {
        let text = "\u{e9}".repeat(200);
        let shown = preview(&text);
        assert_eq!(shown.chars().count(), 141);
        assert!(shown.starts_with('\u{e9}'));
    }
}
