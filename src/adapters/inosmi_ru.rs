//! ИноСМИ (inosmi.ru) article adapter.
//!
//! Article pages wrap the story in a single `<article>` element. Everything
//! outside it (navigation, comments, related links) is dropped, as is text
//! inside scripts, styles and subscribe buttons embedded in the story.

use super::{host_matches, ArticleAdapter, ArticleNotFound};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};
use tracing::{debug, instrument};
use url::Url;

static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("static selector"));

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("static regex"));

/// Elements whose text is never article content.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "button", "svg", "template"];

#[derive(Debug, Clone)]
pub struct InosmiRu {
    hosts: Vec<String>,
}

impl Default for InosmiRu {
    fn default() -> Self {
        Self::for_hosts(["inosmi.ru"])
    }
}

impl InosmiRu {
    /// Adapter serving the same markup from other hosts, e.g. a mirror.
    pub fn for_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArticleAdapter for InosmiRu {
    fn name(&self) -> &'static str {
        "inosmi_ru"
    }

    fn supports(&self, url: &Url) -> bool {
        url.host_str()
            .is_some_and(|host| self.hosts.iter().any(|domain| host_matches(host, domain)))
    }

    #[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
    fn sanitize(&self, html: &str) -> Result<String, ArticleNotFound> {
        let document = Html::parse_document(html);
        let article = document
            .select(&ARTICLE_SELECTOR)
            .next()
            .ok_or(ArticleNotFound {
                adapter: self.name(),
            })?;

        let mut fragments = Vec::new();
        for node in article.descendants() {
            let Node::Text(text) = node.value() else {
                continue;
            };
            let skipped = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            });
            let fragment = text.trim();
            if !skipped && !fragment.is_empty() {
                fragments.push(fragment);
            }
        }

        let joined = fragments.join("\n");
        let text = BLANK_LINES.replace_all(&joined, "\n\n").trim().to_string();
        debug!(chars = text.chars().count(), "Sanitized inosmi.ru article");
        Ok(text)
    }
}
