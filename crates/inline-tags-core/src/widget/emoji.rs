//! Emoji widget builder.

use crate::settings::TagSettings;

/// An inline emoji image resolved from a configured source template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiWidget {
    /// The emoji source type as written in the tag.
    pub source: String,
    /// The emoji name; doubles as the image alt text.
    pub name: String,
    /// Resolved image URL, or `None` when the source type is not configured.
    pub src: Option<String>,
}

impl EmojiWidget {
    /// Resolve `source` against the configured URL templates.
    ///
    /// A known source substitutes the literal `{name}` placeholder in its template. An
    /// unknown source is not an error: the widget renders as a placeholder carrying
    /// [`EmojiWidget::diagnostic`].
    pub fn build(source: &str, name: &str, settings: &TagSettings) -> Self {
        let src = settings
            .emoji_sources
            .get(source)
            .map(|template| template.replace("{name}", name));
        Self {
            source: source.to_string(),
            name: name.to_string(),
            src,
        }
    }

    /// The user-facing diagnostic for an unresolved source, `None` when resolved.
    pub fn diagnostic(&self) -> Option<String> {
        if self.src.is_some() {
            None
        } else {
            Some(format!("Unknown emoji type: {}", self.source))
        }
    }
}
