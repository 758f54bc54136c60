//! Announcement message templates
//!
//! Templates recognize exactly one placeholder, [`NAME_TOKEN`], marking where
//! the birthday name(s) go. The template is split into literal segments when
//! parsed; rendering joins those segments with the names. Substituted names are
//! inserted verbatim and never rescanned, so a name that itself contains `%n`
//! shows up literally instead of expanding again.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use std::fmt;

/// Placeholder replaced by the name(s) of the birthday user(s)
pub const NAME_TOKEN: &str = "%n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<String>,
}

impl MessageTemplate {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = source.split(NAME_TOKEN).map(str::to_string).collect();
        Self { source, segments }
    }

    /// The template text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the template contains at least one placeholder
    pub fn has_placeholder(&self) -> bool {
        self.segments.len() > 1
    }

    /// Substitute `names` for every placeholder
    pub fn render(&self, names: &str) -> String {
        self.segments.join(names)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
