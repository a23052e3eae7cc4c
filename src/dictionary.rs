//! Charged-word dictionary.
//!
//! Two plain-text word lists (positive and negative connotation, one word per
//! line, UTF-8, no header) are merged into a single [`ChargedWords`] set. The
//! set is loaded once per batch and shared read-only by every article task.

use crate::config::DictionaryPaths;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Immutable set of normalized word stems with a charged connotation.
#[derive(Debug, Clone, Default)]
pub struct ChargedWords {
    words: HashSet<String>,
}

impl ChargedWords {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ChargedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Load both word lists and merge them.
///
/// # Errors
///
/// Returns [`Error::Dictionary`] naming the list that is missing or
/// unreadable. This is fatal: no task may start without the dictionary.
#[instrument(level = "info", skip_all, fields(positive = %paths.positive.display(), negative = %paths.negative.display()))]
pub async fn load_charged_words(paths: &DictionaryPaths) -> Result<ChargedWords> {
    let mut words = HashSet::new();
    for path in [&paths.positive, &paths.negative] {
        words.extend(read_word_list(path).await?);
    }

    let words = ChargedWords { words };
    if words.is_empty() {
        warn!("Charged word lists are empty; every article will score 0");
    }
    info!(count = words.len(), "Loaded charged words");
    Ok(words)
}

async fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| Error::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect())
}
