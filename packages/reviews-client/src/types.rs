use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A review as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub location: String,
    pub rating: i32,
    pub text: String,
    pub date: NaiveDate,
    pub sentiment: Option<String>,
    pub topic: Option<String>,
}

/// One page of the review listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewsPage {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub reviews: Vec<Review>,
}

/// Filters and paging for the review listing.
///
/// `None` (or empty-string) filters are omitted from the request entirely;
/// the backend treats an absent parameter as "no filter".
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub sentiment: Option<String>,
    pub q: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        Self {
            location: None,
            sentiment: None,
            q: None,
            page: 1,
            page_size: 10,
        }
    }
}

impl ReviewQuery {
    /// Query parameters in wire form, with unset and empty filters dropped.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_if_set(&mut params, "location", self.location.as_deref());
        push_if_set(&mut params, "sentiment", self.sentiment.as_deref());
        push_if_set(&mut params, "q", self.q.as_deref());
        params.push(("page", self.page.to_string()));
        params.push(("page_size", self.page_size.to_string()));
        params
    }
}

pub(crate) fn push_if_set(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        if !value.is_empty() {
            params.push((key, value.to_string()));
        }
    }
}

/// Acknowledgement returned by a bulk ingest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngestReceipt {
    pub ingested: u64,
    pub reset: bool,
}

/// Sentiment and topic labels attached to a suggested reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplyTags {
    pub sentiment: String,
    pub topic: String,
}

/// An AI-drafted reply with its classification and provenance trail.
///
/// `reasoning_log` is kept as raw JSON: its shape is an implementation
/// detail of the backend pipeline and the console only pretty-prints it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestedReply {
    pub reply: String,
    pub tags: ReplyTags,
    pub reasoning_log: serde_json::Value,
}

/// Aggregate label counts for the analytics page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalyticsSummary {
    pub sentiment_counts: HashMap<String, u64>,
    pub topic_counts: HashMap<String, u64>,
}

/// A similarity-search match: the review itself plus its score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub review: Review,
    pub score: f64,
}

/// Payload of `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResults {
    pub results: Vec<SearchHit>,
}

/// Health probe payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_starts_at_page_one() {
        let query = ReviewQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
        assert!(query.location.is_none());
    }

    #[test]
    fn to_params_omits_unset_filters() {
        let params = ReviewQuery::default().to_params();
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("page_size", "10".to_string()),
            ]
        );
    }

    #[test]
    fn to_params_omits_empty_string_filters() {
        let query = ReviewQuery {
            location: Some(String::new()),
            q: Some("wifi".to_string()),
            ..Default::default()
        };
        let params = query.to_params();
        assert!(!params.iter().any(|(key, _)| *key == "location"));
        assert!(params.contains(&("q", "wifi".to_string())));
    }

    #[test]
    fn review_deserializes_wire_date_and_nullable_labels() {
        let review: Review = serde_json::from_str(
            r#"{
                "id": 7,
                "location": "NYC",
                "rating": 2,
                "text": "Room was noisy.",
                "date": "2024-01-15",
                "sentiment": null,
                "topic": "noise"
            }"#,
        )
        .unwrap();
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(review.sentiment, None);
        assert_eq!(review.topic.as_deref(), Some("noise"));
    }

    #[test]
    fn search_hit_flattens_review_fields() {
        let hit: SearchHit = serde_json::from_str(
            r#"{
                "id": 3,
                "location": "SF",
                "rating": 5,
                "text": "Great breakfast",
                "date": "2024-02-01",
                "sentiment": "positive",
                "topic": "food",
                "score": 0.91
            }"#,
        )
        .unwrap();
        assert_eq!(hit.review.id, 3);
        assert!((hit.score - 0.91).abs() < f64::EPSILON);
    }
}
