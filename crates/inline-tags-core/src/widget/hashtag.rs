//! Hashtag widget builder.

use crate::args::ParsedArgs;
use rand::Rng;

/// The fixed fallback palette for hashtags without an explicit color.
pub const TAG_PALETTE: [&str; 7] = [
    "red", "orange", "yellow", "green", "cyan", "blue", "purple",
];

/// Pick a pseudo-random palette color.
///
/// Called at render time when a hashtag has no `color` field. Two renders of the identical
/// tag may differ in color across rebuilds; that nondeterminism is intentional.
pub fn random_palette_color() -> &'static str {
    TAG_PALETTE[rand::thread_rng().gen_range(0..TAG_PALETTE.len())]
}

/// A hashtag link with an icon and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagWidget {
    /// Display text (first positional token).
    pub text: String,
    /// Link target (second positional token).
    pub href: String,
    /// Explicit color; `None` defers to the palette fallback at render time.
    pub color: Option<String>,
}

impl HashtagWidget {
    /// Parse the tag arguments into text, href, and optional color. Surplus positional
    /// tokens are ignored.
    pub fn build(args: &str) -> Self {
        let parsed = ParsedArgs::parse(args);
        let positional = parsed.positional();
        Self {
            text: positional.first().cloned().unwrap_or_default(),
            href: positional.get(1).cloned().unwrap_or_default(),
            color: parsed.field_owned("color"),
        }
    }

    /// The color to render with: the explicit color, or a fresh palette pick.
    pub fn effective_color(&self) -> String {
        match &self.color {
            Some(color) => color.clone(),
            None => random_palette_color().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_href() {
        let widget = HashtagWidget::build("rust /tags/rust/");
        assert_eq!(widget.text, "rust");
        assert_eq!(widget.href, "/tags/rust/");
        assert_eq!(widget.color, None);
    }

    #[test]
    fn test_explicit_color_wins() {
        let widget = HashtagWidget::build("rust /tags/rust/ color:orange");
        assert_eq!(widget.effective_color(), "orange");
    }

    #[test]
    fn test_fallback_color_comes_from_palette() {
        let widget = HashtagWidget::build("rust /tags/rust/");
        for _ in 0..32 {
            let color = widget.effective_color();
            assert!(TAG_PALETTE.contains(&color.as_str()));
        }
    }

    #[test]
    fn test_missing_tokens_degrade_to_empty() {
        let widget = HashtagWidget::build("solo");
        assert_eq!(widget.text, "solo");
        assert_eq!(widget.href, "");
    }
}
