//! Tokenization and jaundice-rate arithmetic.
//!
//! Tokenizing can be slow on long or pathological texts, so the pipeline
//! always runs a [`Tokenizer`] under the analysis deadline. Implementations
//! must yield to the scheduler regularly, otherwise the deadline cannot fire
//! until they return.

use crate::dictionary::ChargedWords;
use crate::error::Result;
use async_trait::async_trait;

/// Turns plain article text into a sequence of normalized words.
///
/// Returning `Err` means the tokenizer itself is broken. The pipeline treats
/// that as an internal fault and aborts the whole batch.
#[async_trait]
pub trait Tokenizer: Send + Sync {
    async fn split_by_words(&self, text: &str) -> Result<Vec<String>>;
}

/// Words processed between cooperative yields.
const YIELD_EVERY: usize = 64;

/// Whitespace tokenizer with punctuation stripping and lowercasing.
///
/// Keeps words longer than two characters, plus the negation "не" which
/// changes the meaning of whatever follows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSplitter;

#[async_trait]
impl Tokenizer for WordSplitter {
    async fn split_by_words(&self, text: &str) -> Result<Vec<String>> {
        tokio::task::yield_now().await;
        let mut words = Vec::new();
        for (i, raw) in text.split_whitespace().enumerate() {
            let word = clean_word(raw);
            if word.chars().count() > 2 || word == "не" {
                words.push(word);
            }
            if (i + 1) % YIELD_EVERY == 0 {
                tokio::task::yield_now().await;
            }
        }
        Ok(words)
    }
}

fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '«' | '»' | '…'))
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_punctuation() || matches!(c, '—' | '–' | '“' | '”' | '„'))
        .to_lowercase()
}

/// Percentage of `words` found in `charged_words`, rounded to two decimals.
/// An empty sequence scores `0.0`.
pub fn calculate_jaundice_rate(words: &[String], charged_words: &ChargedWords) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let charged = words.iter().filter(|w| charged_words.contains(w)).count();
    let score = charged as f64 / words.len() as f64 * 100.0;
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_split_strips_punctuation_and_short_words() {
        let words = WordSplitter
            .split_by_words("«Удивительно», — сказал он. Это не конец… Ещё?!")
            .await
            .unwrap();

        assert_eq!(
            words,
            owned(&["удивительно", "сказал", "это", "не", "конец", "ещё"])
        );
    }

    #[tokio::test]
    async fn test_split_empty_text() {
        let words = WordSplitter.split_by_words("  \n\t ").await.unwrap();
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn test_split_long_text_keeps_every_word() {
        let text = "слово ".repeat(YIELD_EVERY * 3 + 5);
        let words = WordSplitter.split_by_words(&text).await.unwrap();
        assert_eq!(words.len(), YIELD_EVERY * 3 + 5);
    }

    #[test]
    fn test_jaundice_rate() {
        let charged: ChargedWords = ["ужас", "шок"].into_iter().collect();
        let words = owned(&["ужас", "новость", "шок", "погода"]);
        assert_eq!(calculate_jaundice_rate(&words, &charged), 50.0);
    }

    #[test]
    fn test_jaundice_rate_rounds_to_two_places() {
        let charged: ChargedWords = ["ужас"].into_iter().collect();
        let words = owned(&["ужас", "один", "два"]);
        assert_eq!(calculate_jaundice_rate(&words, &charged), 33.33);
    }

    #[test]
    fn test_jaundice_rate_bounds() {
        let charged: ChargedWords = ["ужас"].into_iter().collect();
        assert_eq!(calculate_jaundice_rate(&[], &charged), 0.0);
        assert_eq!(calculate_jaundice_rate(&owned(&["ужас", "ужас"]), &charged), 100.0);
        assert_eq!(calculate_jaundice_rate(&owned(&["тишина"]), &charged), 0.0);
    }
}
