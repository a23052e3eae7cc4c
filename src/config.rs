//! Runtime settings.
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. An optional YAML file passed with `--config`
//! 3. CLI flags and their environment variables
//!
//! # Example config.yaml
//!
//! ```yaml
//! connection_timeout_secs: 5
//! analysis_timeout_secs: 3
//! urls_limit: 10
//! bind: 127.0.0.1:8080
//! positive_words: charged_dict/positive_words.txt
//! negative_words: charged_dict/negative_words.txt
//! inosmi_hosts: [inosmi.ru]
//! ```

use crate::cli::{Cli, Command};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};

/// The two independent deadlines applied to every article task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Bounds the network fetch of one article.
    pub connection: Duration,
    /// Bounds tokenization and analysis of one article's text.
    pub analysis: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connection: Duration::from_secs(5),
            analysis: Duration::from_secs(3),
        }
    }
}

/// Locations of the positive and negative charged-word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
}

/// Fully resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub connection_timeout_secs: f64,
    pub analysis_timeout_secs: f64,
    /// Maximum number of URLs the serving boundary accepts per request.
    pub urls_limit: usize,
    pub bind: SocketAddr,
    pub positive_words: PathBuf,
    pub negative_words: PathBuf,
    /// Hosts (and their subdomains) served with inosmi.ru markup.
    pub inosmi_hosts: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection_timeout_secs: 5.0,
            analysis_timeout_secs: 3.0,
            urls_limit: 10,
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            positive_words: PathBuf::from("charged_dict/positive_words.txt"),
            negative_words: PathBuf::from("charged_dict/negative_words.txt"),
            inosmi_hosts: vec!["inosmi.ru".to_string()],
        }
    }
}

impl Settings {
    /// Read settings from a YAML file. Keys missing from the file keep their
    /// defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).await?;
        let settings = Self::from_yaml(&raw)?;
        info!("Loaded configuration file");
        Ok(settings)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Resolve settings for a parsed command line: defaults, then the config
    /// file if one was given, then any flags set on the command line.
    pub async fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };
        settings.apply_cli(cli);
        settings.timeouts()?;
        Ok(settings)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(secs) = cli.connection_timeout {
            self.connection_timeout_secs = secs;
        }
        if let Some(secs) = cli.analysis_timeout {
            self.analysis_timeout_secs = secs;
        }
        if let Some(path) = &cli.positive_words {
            self.positive_words = path.clone();
        }
        if let Some(path) = &cli.negative_words {
            self.negative_words = path.clone();
        }
        if let Command::Serve { bind, urls_limit } = &cli.command {
            if let Some(bind) = bind {
                self.bind = *bind;
            }
            if let Some(limit) = urls_limit {
                self.urls_limit = *limit;
            }
        }
    }

    /// Convert the configured seconds into deadlines.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if either timeout is negative, NaN or infinite.
    pub fn timeouts(&self) -> Result<Timeouts> {
        Ok(Timeouts {
            connection: secs_to_duration("connection_timeout_secs", self.connection_timeout_secs)?,
            analysis: secs_to_duration("analysis_timeout_secs", self.analysis_timeout_secs)?,
        })
    }

    pub fn dictionary(&self) -> DictionaryPaths {
        DictionaryPaths {
            positive: self.positive_words.clone(),
            negative: self.negative_words.clone(),
        }
    }
}

fn secs_to_duration(key: &str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| Error::Config(format!("{key} must be a non-negative number of seconds: {e}")))
}
