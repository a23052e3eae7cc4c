//! Small string helpers shared by the pipeline and the serving boundary.

/// Truncate a string for logging purposes.
///
/// Keeps at most `max` characters (never splitting a multi-byte character)
/// and appends an ellipsis with the number of bytes dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Split a comma-separated `urls` query value into individual URLs.
///
/// Entries are trimmed and blank entries dropped; everything else is kept
/// verbatim, duplicates included.
pub fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("шокирующая новость", 3);
        assert_eq!(result, "шок…(+29 bytes)");
    }

    #[test]
    fn test_split_urls() {
        assert_eq!(
            split_urls("https://inosmi.ru/a.html, https://lenta.ru/b/,,https://inosmi.ru/a.html"),
            vec![
                "https://inosmi.ru/a.html",
                "https://lenta.ru/b/",
                "https://inosmi.ru/a.html",
            ]
        );
        assert!(split_urls("").is_empty());
        assert!(split_urls(" , ").is_empty());
    }
}
