//! Small string helpers for logging and summary bounding.

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}…(+{} bytes)", head, s.len() - head.len())
    }
}

/// Truncate a string to at most `max` characters, char-boundary safe.
///
/// Used to bound article summaries at ingestion. Counts characters rather
/// than bytes so multi-byte input never panics or splits a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
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
    fn test_truncate_chars_short_input_untouched() {
        assert_eq!(truncate_chars("brief summary", 500), "brief summary");
    }

    #[test]
    fn test_truncate_chars_bounds_long_input() {
        let long = "x".repeat(800);
        let result = truncate_chars(&long, 500);
        assert_eq!(result.chars().count(), 500);
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        // é is two bytes; a byte-indexed slice at 3 would panic
        let s = "ééééé";
        let result = truncate_chars(s, 3);
        assert_eq!(result, "ééé");
    }
}
