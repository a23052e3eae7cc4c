//! Concurrent batch analysis.
//!
//! [`Analyzer::process`] fans out one task per submitted URL onto a
//! [`JoinSet`] and drains their results as they complete. Every URL yields
//! exactly one [`ArticleResult`](crate::models::ArticleResult); duplicates are
//! processed independently.
//!
//! # Failure isolation
//!
//! Unsupported sources, transport failures and both deadlines are recovered
//! inside the task and encoded as a status. Anything else (a panicking task or
//! a tokenizer error) aborts every sibling still in flight and fails the batch
//! as a whole; no partial batch is returned.

mod article;

use crate::adapters::ArticleAdapter;
use crate::adapters::inosmi_ru::InosmiRu;
use crate::config::{DictionaryPaths, Timeouts};
use crate::dictionary::{load_charged_words, ChargedWords};
use crate::error::{Error, Result};
use crate::models::Batch;
use crate::text_tools::{Tokenizer, WordSplitter};
use article::{process_article, ArticleContext};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, instrument};

/// Batch orchestrator. Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct Analyzer {
    client: Client,
    adapters: Vec<Arc<dyn ArticleAdapter>>,
    tokenizer: Arc<dyn Tokenizer>,
    dictionary: DictionaryPaths,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field(
                "adapters",
                &self.adapters.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("dictionary", &self.dictionary)
            .finish()
    }
}

impl Analyzer {
    /// Analyzer with the built-in adapters and the default [`WordSplitter`].
    pub fn new(client: Client, dictionary: DictionaryPaths) -> Self {
        Self {
            client,
            adapters: vec![Arc::new(InosmiRu::default())],
            tokenizer: Arc::new(WordSplitter),
            dictionary,
        }
    }

    /// Analyzer with a fresh HTTP client identifying itself by crate name.
    pub fn from_dictionary(dictionary: DictionaryPaths) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(client, dictionary))
    }

    pub fn with_adapters(mut self, adapters: Vec<Arc<dyn ArticleAdapter>>) -> Self {
        self.adapters = adapters;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Load the charged-word dictionary and analyze `urls` with the given
    /// deadlines.
    ///
    /// # Errors
    ///
    /// Only fatal faults: an unreadable word list, a panicking task or a
    /// tokenizer error. Per-article failures are reported in the batch.
    #[instrument(level = "info", skip_all, fields(urls = urls.len()))]
    pub async fn process(&self, urls: &[String], timeouts: Timeouts) -> Result<Batch> {
        let charged_words = Arc::new(load_charged_words(&self.dictionary).await?);
        self.process_batch(urls, charged_words, timeouts).await
    }

    /// Analyze `urls` against an already loaded dictionary.
    pub async fn process_batch(
        &self,
        urls: &[String],
        charged_words: Arc<ChargedWords>,
        timeouts: Timeouts,
    ) -> Result<Batch> {
        let ctx = Arc::new(ArticleContext {
            client: self.client.clone(),
            adapters: self.adapters.clone(),
            tokenizer: Arc::clone(&self.tokenizer),
            charged_words,
            timeouts,
        });

        let mut tasks = JoinSet::new();
        for url in urls {
            tasks.spawn(process_article(Arc::clone(&ctx), url.clone()));
        }

        let mut batch = Batch::with_capacity(urls.len());
        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) => Err(Error::from(join_error)),
            };
            match outcome {
                Ok(result) => batch.push(result),
                Err(e) => {
                    error!(error = %e, in_flight = tasks.len(), "Article task faulted; cancelling batch");
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        let ok = batch.iter().filter(|r| r.is_ok()).count();
        info!(
            total = batch.len(),
            ok,
            failed = batch.len() - ok,
            "Batch complete"
        );
        Ok(batch)
    }
}
