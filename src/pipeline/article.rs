//! The per-URL state machine.
//!
//! ```text
//! START ── no adapter for URL ───────────────────────────────▶ PARSING_ERROR
//!   │
//! FETCHING (connection deadline) ── transport failure ───────▶ FETCH_ERROR
//!   │                             ── deadline elapsed ───────▶ TIMEOUT
//! NORMALIZING ── markup is not an article ───────────────────▶ PARSING_ERROR
//!   │
//! ANALYZING (analysis deadline) ── deadline elapsed ─────────▶ TIMEOUT
//!   │                           ── no words in the text ─────▶ PARSING_ERROR
//! SCORING ───────────────────────────────────────────────────▶ OK
//! ```
//!
//! Each stage returns an explicit outcome enum and the task matches on it.
//! The only `Err` a task can return is a tokenizer fault, which the
//! orchestrator treats as fatal for the batch.

use crate::adapters::ArticleAdapter;
use crate::config::Timeouts;
use crate::dictionary::ChargedWords;
use crate::error::Result;
use crate::models::{ArticleResult, ProcessingStatus};
use crate::text_tools::{calculate_jaundice_rate, Tokenizer};
use crate::timer::Timer;
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};
use tracing::{debug, instrument};
use url::Url;

/// Everything a task reads. Shared by all tasks of one batch, never mutated.
pub(crate) struct ArticleContext {
    pub client: Client,
    pub adapters: Vec<Arc<dyn ArticleAdapter>>,
    pub tokenizer: Arc<dyn Tokenizer>,
    pub charged_words: Arc<ChargedWords>,
    pub timeouts: Timeouts,
}

impl ArticleContext {
    fn adapter_for(&self, url: &str) -> Option<Arc<dyn ArticleAdapter>> {
        let parsed = Url::parse(url).ok()?;
        self.adapters
            .iter()
            .find(|adapter| adapter.supports(&parsed))
            .cloned()
    }
}

#[derive(Debug)]
pub(crate) enum FetchOutcome {
    Fetched(String),
    TransportFailed(reqwest::Error),
    TimedOut,
}

#[derive(Debug)]
pub(crate) enum AnalysisOutcome {
    Words(Vec<String>),
    TimedOut,
}

/// Run one URL through every stage and produce its single result.
#[instrument(level = "debug", skip_all, fields(url = %url))]
pub(crate) async fn process_article(ctx: Arc<ArticleContext>, url: String) -> Result<ArticleResult> {
    let Some(adapter) = ctx.adapter_for(&url) else {
        debug!("No adapter recognizes this source");
        return Ok(report(ArticleResult::failed(url, ProcessingStatus::ParsingError), None));
    };

    let html = match fetch(&ctx.client, &url, ctx.timeouts.connection).await {
        FetchOutcome::Fetched(html) => html,
        FetchOutcome::TransportFailed(e) => {
            debug!(error = %e, "Fetch failed");
            return Ok(report(ArticleResult::failed(url, ProcessingStatus::FetchError), None));
        }
        FetchOutcome::TimedOut => {
            debug!(deadline = ?ctx.timeouts.connection, "Fetch deadline elapsed");
            return Ok(report(ArticleResult::failed(url, ProcessingStatus::Timeout), None));
        }
    };

    let text = match adapter.sanitize(&html) {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, preview = %truncate_for_log(&html, 200), "Markup not recognized");
            return Ok(report(ArticleResult::failed(url, ProcessingStatus::ParsingError), None));
        }
    };

    let mut timer = Timer::start();
    let outcome = analyze(&*ctx.tokenizer, &text, ctx.timeouts.analysis).await;
    timer.stop();

    let result = match outcome? {
        AnalysisOutcome::TimedOut => ArticleResult::failed(url, ProcessingStatus::Timeout),
        AnalysisOutcome::Words(words) if words.is_empty() => {
            ArticleResult::failed(url, ProcessingStatus::ParsingError)
        }
        AnalysisOutcome::Words(words) => {
            let score = calculate_jaundice_rate(&words, &ctx.charged_words);
            ArticleResult::scored(url, score, words.len())
        }
    };
    Ok(report(result, Some(timer.elapsed())))
}

/// Download the page body. Non-2xx responses count as transport failures.
pub(crate) async fn fetch(client: &Client, url: &str, deadline: Duration) -> FetchOutcome {
    let request = async {
        let response = client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok::<String, reqwest::Error>(body)
    };

    match timeout(deadline, request).await {
        Ok(Ok(html)) => FetchOutcome::Fetched(html),
        Ok(Err(e)) if e.is_timeout() => FetchOutcome::TimedOut,
        Ok(Err(e)) => FetchOutcome::TransportFailed(e),
        Err(_) => FetchOutcome::TimedOut,
    }
}

/// Tokenize under the analysis deadline. When the deadline fires the
/// tokenizer future is dropped, which cancels it at its next yield point.
///
/// A tokenizer that finishes within its first poll still counts as timed out
/// if the deadline had already elapsed by then.
pub(crate) async fn analyze(
    tokenizer: &dyn Tokenizer,
    text: &str,
    deadline: Duration,
) -> Result<AnalysisOutcome> {
    let started = Instant::now();
    match timeout(deadline, tokenizer.split_by_words(text)).await {
        Ok(Ok(_)) if started.elapsed() >= deadline => Ok(AnalysisOutcome::TimedOut),
        Ok(words) => Ok(AnalysisOutcome::Words(words?)),
        Err(_) => Ok(AnalysisOutcome::TimedOut),
    }
}

fn report(result: ArticleResult, elapsed: Option<Duration>) -> ArticleResult {
    debug!(
        url = %result.url,
        status = %result.status,
        score = ?result.score,
        word_count = ?result.word_count,
        elapsed_ms = elapsed.map(|d| d.as_secs_f64() * 1000.0),
        "Article processed"
    );
    result
}
