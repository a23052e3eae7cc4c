//! Data models for article analysis results.
//!
//! - [`ProcessingStatus`]: the closed set of outcomes an article task can reach
//! - [`ArticleResult`]: one per submitted URL, echoed back to the caller
//! - [`Batch`]: everything one invocation produced
//!
//! Results serialize to the JSON shape returned by the serving boundary:
//! `{"url": ..., "status": "OK", "score": 1.23, "word_count": 456}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final state of a single article task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    /// Article fetched, tokenized and scored.
    Ok,
    /// Transport failure: connection refused, DNS failure, non-2xx status.
    FetchError,
    /// Source not recognized, or markup not recognized as an article.
    ParsingError,
    /// Either the connection or the analysis deadline elapsed.
    Timeout,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Ok => "OK",
            ProcessingStatus::FetchError => "FETCH_ERROR",
            ProcessingStatus::ParsingError => "PARSING_ERROR",
            ProcessingStatus::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of analyzing one URL.
///
/// `score` and `word_count` are either both present (status `OK`) or both
/// absent. The constructors are the only way to build one, which keeps that
/// pairing intact.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleResult {
    /// The submitted URL, unchanged.
    pub url: String,
    /// Terminal status of the task.
    pub status: ProcessingStatus,
    /// Percentage of charged words among all words, in `[0, 100]`.
    pub score: Option<f64>,
    /// Number of words the tokenizer produced.
    pub word_count: Option<usize>,
}

impl ArticleResult {
    /// A successfully scored article.
    pub fn scored(url: impl Into<String>, score: f64, word_count: usize) -> Self {
        Self {
            url: url.into(),
            status: ProcessingStatus::Ok,
            score: Some(score),
            word_count: Some(word_count),
        }
    }

    /// An article that stopped short of scoring.
    pub fn failed(url: impl Into<String>, status: ProcessingStatus) -> Self {
        debug_assert_ne!(status, ProcessingStatus::Ok);
        Self {
            url: url.into(),
            status,
            score: None,
            word_count: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProcessingStatus::Ok
    }
}

/// All results of one invocation. Order follows task completion, not input
/// order; key by `url` when order matters.
pub type Batch = Vec<ArticleResult>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_display_matches_wire_format() {
        assert_eq!(ProcessingStatus::Ok.to_string(), "OK");
        assert_eq!(ProcessingStatus::FetchError.to_string(), "FETCH_ERROR");
        assert_eq!(ProcessingStatus::ParsingError.to_string(), "PARSING_ERROR");
        assert_eq!(ProcessingStatus::Timeout.to_string(), "TIMEOUT");

        for status in [
            ProcessingStatus::Ok,
            ProcessingStatus::FetchError,
            ProcessingStatus::ParsingError,
            ProcessingStatus::Timeout,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                json!(status.as_str())
            );
        }
    }

    #[test]
    fn test_scored_result_serializes_metrics() {
        let result = ArticleResult::scored("https://inosmi.ru/a.html", 0.82, 612);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "url": "https://inosmi.ru/a.html",
                "status": "OK",
                "score": 0.82,
                "word_count": 612,
            })
        );
    }

    #[test]
    fn test_failed_result_has_null_metrics() {
        let result = ArticleResult::failed("https://lenta.ru/x", ProcessingStatus::ParsingError);
        assert!(!result.is_ok());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "url": "https://lenta.ru/x",
                "status": "PARSING_ERROR",
                "score": null,
                "word_count": null,
            })
        );
    }
}
