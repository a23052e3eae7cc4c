//! Publisher-specific article adapters.
//!
//! An adapter decides whether it can handle a URL and turns the publisher's
//! raw markup into plain article text. The check happens before any network
//! call, so a URL no adapter supports never costs a connection timeout.
//!
//! # Supported Sources
//!
//! | Source | Module | Hosts |
//! |--------|--------|-------|
//! | ИноСМИ | [`inosmi_ru`] | `inosmi.ru` and subdomains |

use thiserror::Error;
use url::Url;

pub mod inosmi_ru;

/// The markup does not contain anything the adapter recognizes as an article.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("article not found in {adapter} markup")]
pub struct ArticleNotFound {
    pub adapter: &'static str,
}

pub trait ArticleAdapter: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether URLs like this one are published by this adapter's source.
    fn supports(&self, url: &Url) -> bool;

    /// Normalize raw markup into plain article text.
    fn sanitize(&self, html: &str) -> Result<String, ArticleNotFound>;
}

/// True when `host` is `domain` itself or one of its subdomains.
pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matches() {
        assert!(host_matches("inosmi.ru", "inosmi.ru"));
        assert!(host_matches("www.inosmi.ru", "inosmi.ru"));
        assert!(!host_matches("notinosmi.ru", "inosmi.ru"));
        assert!(!host_matches("inosmi.ru.evil.com", "inosmi.ru"));
    }
}
