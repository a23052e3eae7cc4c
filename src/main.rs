//! # jaundice_rate
//!
//! Scores news articles for sensationalism: the "jaundice rate" of an article
//! is the percentage of its words found in a dictionary of charged words.
//!
//! ## Usage
//!
//! ```sh
//! # HTTP endpoint: GET /?urls=https://inosmi.ru/a.html,https://inosmi.ru/b.html
//! jaundice_rate serve --bind 127.0.0.1:8080
//!
//! # One-off batch printed as JSON
//! jaundice_rate check https://inosmi.ru/a.html https://lenta.ru/b/
//! ```
//!
//! ## Architecture
//!
//! 1. **Dictionary**: load the positive and negative word lists once per batch
//! 2. **Fan-out**: spawn one task per URL
//! 3. **Per task**: recognize source → fetch (connection deadline) → sanitize
//!    → tokenize (analysis deadline) → score
//! 4. **Collect**: exactly one result per URL, in completion order

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod adapters;
mod cli;
mod config;
mod dictionary;
mod error;
mod models;
mod pipeline;
mod server;
mod text_tools;
mod timer;
mod utils;

use adapters::inosmi_ru::InosmiRu;
use cli::{Cli, Command};
use config::Settings;
use pipeline::Analyzer;
use server::AppState;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let settings = Settings::resolve(&args).await?;
    let timeouts = settings.timeouts()?;
    info!(?settings, "Resolved settings");

    let analyzer = Analyzer::from_dictionary(settings.dictionary())?.with_adapters(vec![
        Arc::new(InosmiRu::for_hosts(settings.inosmi_hosts.clone())),
    ]);

    match args.command {
        Command::Serve { .. } => {
            let state = AppState {
                analyzer: Arc::new(analyzer),
                timeouts,
                urls_limit: settings.urls_limit,
            };
            server::serve(settings.bind, state).await?;
        }
        Command::Check { urls } => {
            let start_time = std::time::Instant::now();
            let batch = analyzer.process(&urls, timeouts).await?;
            println!("{}", serde_json::to_string_pretty(&batch)?);

            let elapsed = start_time.elapsed();
            info!(?elapsed, articles = batch.len(), "Execution complete");
        }
    }

    Ok(())
}
