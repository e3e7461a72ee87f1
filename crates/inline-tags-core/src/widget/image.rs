//! Image widget builder.

use crate::args::ParsedArgs;

/// An image card with optional caption, style fields, and download affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageWidget {
    /// Image URL (first positional token).
    pub src: String,
    /// Caption and alt text (remaining positional tokens, joined).
    pub alt: String,
    /// Optional `background` style value.
    pub bg: Option<String>,
    /// Optional `padding` style value.
    pub padding: Option<String>,
    /// Optional `aspect-ratio` style value.
    pub ratio: Option<String>,
    /// Optional `width` style value.
    pub width: Option<String>,
    /// Download target URL when the tag carries a `download` field (`download:true` reuses
    /// `src`; any other value is the verbatim target).
    pub download: Option<String>,
}

impl ImageWidget {
    /// Parse the tag arguments with the image field rule (bare URLs stay positional).
    pub fn build(args: &str) -> Self {
        let parsed = ParsedArgs::parse_image(args);
        let src = parsed
            .positional()
            .first()
            .cloned()
            .unwrap_or_default();
        let alt = parsed.free_text_from(1);

        let download = parsed.field("download").map(|value| {
            if value == "true" {
                src.clone()
            } else {
                value.to_string()
            }
        });

        Self {
            src,
            alt,
            bg: parsed.field_owned("bg"),
            padding: parsed.field_owned("padding"),
            ratio: parsed.field_owned("ratio"),
            width: parsed.field_owned("width"),
            download,
        }
    }

    /// Inline style declarations for the image background box.
    ///
    /// Only present fields contribute; the result is empty when none are set.
    pub fn style(&self) -> String {
        let mut style = String::new();
        if let Some(bg) = &self.bg {
            style.push_str(&format!("background:{bg};"));
        }
        if let Some(padding) = &self.padding {
            style.push_str(&format!("padding:{padding};"));
        }
        if let Some(ratio) = &self.ratio {
            style.push_str(&format!("aspect-ratio:{ratio};"));
        }
        if let Some(width) = &self.width {
            style.push_str(&format!("width:{width};"));
        }
        style
    }

    /// Returns `true` if the card shows a caption line.
    pub fn has_caption(&self) -> bool {
        !self.alt.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_src_alt_and_download_reuse() {
        let widget = ImageWidget::build("https://x/y.png download:true caption text");
        assert_eq!(widget.src, "https://x/y.png");
        assert_eq!(widget.alt, "caption text");
        assert_eq!(widget.download.as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn test_download_with_explicit_target() {
        let widget = ImageWidget::build("https://x/y.png download:https://cdn/y.png");
        assert_eq!(widget.download.as_deref(), Some("https://cdn/y.png"));
    }

    #[test]
    fn test_style_fields_emit_only_when_present() {
        let widget = ImageWidget::build("https://x/y.png bg:black width:300px");
        assert_eq!(widget.style(), "background:black;width:300px;");

        let bare = ImageWidget::build("https://x/y.png");
        assert_eq!(bare.style(), "");
        assert!(!bare.has_caption());
    }

    #[test]
    fn test_all_style_fields_in_order() {
        let widget = ImageWidget::build("u.png bg:red padding:4px ratio:16/9 width:80px");
        assert_eq!(
            widget.style(),
            "background:red;padding:4px;aspect-ratio:16/9;width:80px;"
        );
    }
}
