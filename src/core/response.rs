//! Discord embed length limits and truncation helpers
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Field name/value and author limits for document rendering
//! - 1.0.0: Embed description limit

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord embed field value limit
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Discord embed field name and author name limit
pub const FIELD_NAME_LIMIT: usize = 256;

/// Truncate text to at most `limit` bytes, adding ellipsis if needed (UTF-8 safe)
pub fn truncate_to(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }

    let mut end = limit.saturating_sub(3); // Room for "..."
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Truncate text to fit embed description limit
pub fn truncate_for_embed(text: &str) -> String {
    truncate_to(text, EMBED_LIMIT)
}

/// Truncate text to fit an embed field value
pub fn truncate_for_field(text: &str) -> String {
    truncate_to(text, FIELD_VALUE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_for_field("short text"), "short text");
    }

    #[test]
    fn test_truncate_for_field_long() {
        let result = truncate_for_field(&"a".repeat(2000));
        assert!(result.len() <= FIELD_VALUE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_for_embed_long() {
        let result = truncate_for_embed(&"a".repeat(5000));
        assert!(result.len() <= EMBED_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_utf8_safety() {
        let text = "世界".repeat(400);
        let result = truncate_for_field(&text);
        assert!(result.len() <= FIELD_VALUE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_exactly_at_limit() {
        let text = "a".repeat(FIELD_VALUE_LIMIT);
        assert_eq!(truncate_for_field(&text), text);
    }
}
