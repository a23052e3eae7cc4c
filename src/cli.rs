//! Command-line interface definitions for jaundice_rate.
//!
//! Every option can also come from an environment variable or from the YAML
//! file given with `--config`; see [`crate::config`] for precedence.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command-line arguments for jaundice_rate.
///
/// # Examples
///
/// ```sh
/// # Serve the HTTP endpoint on the default address
/// jaundice_rate serve
///
/// # Score two articles once with a tighter analysis budget
/// jaundice_rate --analysis-timeout 1.5 check https://inosmi.ru/a.html https://inosmi.ru/b.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a config.yaml file
    #[arg(short, long, env = "JAUNDICE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seconds allowed for fetching one article
    #[arg(long, env = "JAUNDICE_CONNECTION_TIMEOUT")]
    pub connection_timeout: Option<f64>,

    /// Seconds allowed for tokenizing and scoring one article
    #[arg(long, env = "JAUNDICE_ANALYSIS_TIMEOUT")]
    pub analysis_timeout: Option<f64>,

    /// Word list with positively charged words, one per line
    #[arg(long, env = "JAUNDICE_POSITIVE_WORDS")]
    pub positive_words: Option<PathBuf>,

    /// Word list with negatively charged words, one per line
    #[arg(long, env = "JAUNDICE_NEGATIVE_WORDS")]
    pub negative_words: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve `GET /?urls=...` over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "JAUNDICE_BIND")]
        bind: Option<SocketAddr>,

        /// Maximum number of URLs accepted per request
        #[arg(long, env = "JAUNDICE_URLS_LIMIT")]
        urls_limit: Option<usize>,
    },
    /// Score the given URLs once and print the results as JSON
    Check {
        /// Article URLs to analyze
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_serve() {
        let cli = Cli::parse_from([
            "jaundice_rate",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--urls-limit",
            "3",
        ]);

        match cli.command {
            Command::Serve { bind, urls_limit } => {
                assert_eq!(bind, Some("0.0.0.0:9000".parse().unwrap()));
                assert_eq!(urls_limit, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_check_with_global_flags() {
        let cli = Cli::parse_from([
            "jaundice_rate",
            "--connection-timeout",
            "2",
            "--analysis-timeout",
            "0.01",
            "check",
            "https://inosmi.ru/a.html",
            "https://lenta.ru/b/",
        ]);

        assert_eq!(cli.connection_timeout, Some(2.0));
        assert_eq!(cli.analysis_timeout, Some(0.01));
        match cli.command {
            Command::Check { urls } => assert_eq!(urls.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_check_requires_urls() {
        assert!(Cli::try_parse_from(["jaundice_rate", "check"]).is_err());
    }
}
