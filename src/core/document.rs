//! Structured reply documents
//!
//! A document is the unit of content every help/info command delivers: an
//! optional header (with icon), an optional description, and an ordered list
//! of titled sections. Rendering to a platform embed lives in `core::embeds`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

/// A titled block of ordered lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a free-form line
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a "command form → effect" entry
    ///
    /// Each form is shown as inline code; multiple forms share one effect line.
    pub fn entry<S: AsRef<str>>(mut self, forms: &[S], effect: impl AsRef<str>) -> Self {
        let forms = forms
            .iter()
            .map(|form| format!("`{}`", form.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        self.lines.push(format!("● {forms}"));
        self.lines.push(format!(" » {}", effect.as_ref()));
        self
    }

    /// Body text with lines joined by newlines
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// Immutable structured reply
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub header: Option<String>,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn icon_url(mut self, url: Option<String>) -> Self {
        self.icon_url = url;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Find a section by title
    pub fn find_section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Ordered (title, body) pairs
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.sections
            .iter()
            .map(|s| (s.title.as_str(), s.body()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_renders_form_and_effect_lines() {
        let section = Section::new("Commands").entry(&["bb.help", "bb.info"], "Help.");
        assert_eq!(section.lines, vec!["● `bb.help`, `bb.info`", " » Help."]);
    }

    #[test]
    fn test_body_joins_lines() {
        let section = Section::new("T").line("a").line("b");
        assert_eq!(section.body(), "a\nb");
    }

    #[test]
    fn test_pairs_preserve_section_order() {
        let doc = Document::new()
            .section(Section::new("First").line("1"))
            .section(Section::new("Second").line("2"));

        assert_eq!(doc.pairs(), vec![("First", "1".to_string()), ("Second", "2".to_string())]);
        assert!(doc.find_section("Second").is_some());
        assert!(doc.find_section("Third").is_none());
    }
}
