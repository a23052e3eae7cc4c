//! Error types for jaundice_rate.
//!
//! Only faults that abort a whole batch or reject a request live here. The
//! expected per-article failures (unsupported source, transport failure,
//! deadline exceeded) are never turned into an [`Error`]; they are encoded in
//! each [`ArticleResult`](crate::models::ArticleResult) as a
//! [`ProcessingStatus`](crate::models::ProcessingStatus).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jaundice_rate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for jaundice_rate
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid setting in the config file, CLI flags or environment
    #[error("configuration error: {0}")]
    Config(String),

    /// A charged word list could not be read. Fatal for the batch, since no
    /// article can be scored without the dictionary.
    #[error("failed to read charged word list {}: {source}", path.display())]
    Dictionary {
        /// The word list that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The tokenizer reported a failure other than running out of time
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// An article task panicked or was cancelled out from under the batch
    #[error("article task aborted: {0}")]
    TaskAborted(#[from] tokio::task::JoinError),

    /// Request carried more URLs than the serving boundary accepts
    #[error("too many urls in request, should be {limit} or less")]
    TooManyUrls {
        /// Configured maximum number of URLs per request
        limit: usize,
    },

    /// Request carried no URLs at all
    #[error("missing required query parameter: urls")]
    MissingUrls,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Config file is not valid YAML for [`Settings`](crate::config::Settings)
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// HTTP status code this error maps to at the serving boundary.
    ///
    /// Malformed requests are the caller's fault (400); everything else means
    /// the batch itself failed (500).
    pub fn status_code(&self) -> u16 {
        match self {
            Error::TooManyUrls { .. } | Error::MissingUrls => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_urls_message() {
        let error = Error::TooManyUrls { limit: 10 };
        assert_eq!(
            error.to_string(),
            "too many urls in request, should be 10 or less"
        );
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_missing_urls_is_bad_request() {
        assert_eq!(Error::MissingUrls.status_code(), 400);
    }

    #[test]
    fn test_batch_faults_are_server_errors() {
        assert_eq!(Error::Tokenizer("boom".into()).status_code(), 500);
        assert_eq!(Error::Config("bad".into()).status_code(), 500);

        let error = Error::Dictionary {
            path: PathBuf::from("charged_dict/positive_words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.status_code(), 500);
        assert!(error.to_string().contains("positive_words.txt"));
    }
}
