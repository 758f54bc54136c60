//! Document embed builder for Discord responses
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Render structured documents as a single embed

use crate::core::document::Document;
use crate::core::response::{truncate_for_embed, truncate_for_field, truncate_to, FIELD_NAME_LIMIT};
use serenity::builder::CreateEmbed;

/// Accent color for every bot embed
pub const EMBED_COLOR: u32 = 0x3B_88_C3;

/// Build an embed: author (header + icon), description, one field per section.
pub fn document_embed(document: &Document) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    if let Some(header) = &document.header {
        embed.author(|a| {
            a.name(truncate_to(header, FIELD_NAME_LIMIT));
            if let Some(url) = &document.icon_url {
                a.icon_url(url);
            }
            a
        });
    }
    if let Some(description) = &document.description {
        embed.description(truncate_for_embed(description));
    }
    for section in &document.sections {
        embed.field(
            truncate_to(&section.title, FIELD_NAME_LIMIT),
            truncate_for_field(&section.body()),
            false,
        );
    }
    embed.color(EMBED_COLOR);
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Section;
    use crate::core::response::FIELD_VALUE_LIMIT;

    fn field_names(embed: &CreateEmbed) -> Vec<&str> {
        embed.0["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_document_embed_author_and_description() {
        let doc = Document::new()
            .header("Header")
            .icon_url(Some("https://example.com/avatar.png".to_string()))
            .description("Description")
            .section(Section::new("Title").line("line"));
        let embed = document_embed(&doc);

        assert_eq!(embed.0["author"]["name"].as_str(), Some("Header"));
        assert_eq!(
            embed.0["author"]["icon_url"].as_str(),
            Some("https://example.com/avatar.png")
        );
        assert_eq!(embed.0["description"].as_str(), Some("Description"));
        assert_eq!(embed.0["color"].as_u64(), Some(u64::from(EMBED_COLOR)));
    }

    #[test]
    fn test_document_embed_without_header() {
        let doc = Document::new().section(Section::new("Only").line("one"));
        let embed = document_embed(&doc);

        assert!(!embed.0.contains_key("author"));
        assert!(!embed.0.contains_key("description"));
        assert_eq!(field_names(&embed), vec!["Only"]);
    }

    #[test]
    fn test_document_embed_fields_follow_section_order() {
        let doc = Document::new()
            .section(Section::new("First").line("a").line("b"))
            .section(Section::new("Second").line("c"))
            .section(Section::new("Third").line("d"));
        let embed = document_embed(&doc);

        assert_eq!(field_names(&embed), vec!["First", "Second", "Third"]);
        let first = &embed.0["fields"][0];
        assert_eq!(first["value"].as_str(), Some("a\nb"));
        assert_eq!(first["inline"].as_bool(), Some(false));
    }

    #[test]
    fn test_document_embed_truncates_long_sections() {
        let doc = Document::new().section(Section::new("Long").line("x".repeat(5000)));
        let embed = document_embed(&doc);

        let value = embed.0["fields"][0]["value"].as_str().unwrap();
        assert_eq!(value.len(), FIELD_VALUE_LIMIT);
        assert!(value.ends_with("..."));
    }
}
