//! Widget specs: typed rendering descriptions for matched tags.
//!
//! Each tag kind has a builder that turns its captures (plus settings) into a widget spec.
//! Builders never fail: missing or malformed inputs degrade to empty/neutral attributes, and
//! an unknown emoji source yields a diagnostic placeholder instead of an error.
//!
//! A spec is produced fresh on every rebuild, never mutated, and owned by the decoration set
//! until the rendering surface consumes it.

pub mod checkbox;
pub mod copy;
pub mod emoji;
pub mod hashtag;
pub mod image;
pub mod label;
pub mod note;

pub use checkbox::CheckboxRadioWidget;
pub use copy::CopyWidget;
pub use emoji::EmojiWidget;
pub use hashtag::{HashtagWidget, TAG_PALETTE, random_palette_color};
pub use image::ImageWidget;
pub use label::InlineLabelWidget;
pub use note::NoteWidget;

use crate::matchers::{TagCapture, TagKind};
use crate::settings::TagSettings;

/// A rendering description for one matched tag.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSpec {
    /// An emoji image (or diagnostic placeholder).
    Emoji(EmojiWidget),
    /// An inline styled label.
    InlineLabel(InlineLabelWidget),
    /// A checkbox or radio control with a label.
    CheckboxRadio(CheckboxRadioWidget),
    /// A note card with optional title.
    Note(NoteWidget),
    /// A copy-to-clipboard box.
    Copy(CopyWidget),
    /// An image card with optional caption and download affordance.
    Image(ImageWidget),
    /// A hashtag link.
    Hashtag(HashtagWidget),
}

impl WidgetSpec {
    /// Build the widget spec for one tag capture.
    pub fn build(capture: &TagCapture, settings: &TagSettings) -> Self {
        match capture {
            TagCapture::Emoji { source, name } => {
                Self::Emoji(EmojiWidget::build(source, name, settings))
            }
            TagCapture::InlineLabel {
                label,
                content,
                color,
            } => Self::InlineLabel(InlineLabelWidget::build(*label, content, color.as_deref())),
            TagCapture::CheckboxRadio { control, args } => {
                Self::CheckboxRadio(CheckboxRadioWidget::build(*control, args))
            }
            TagCapture::Note { args } => Self::Note(NoteWidget::build(args)),
            TagCapture::Copy { args } => Self::Copy(CopyWidget::build(args)),
            TagCapture::Image { args } => Self::Image(ImageWidget::build(args)),
            TagCapture::Hashtag { args } => Self::Hashtag(HashtagWidget::build(args)),
        }
    }

    /// The tag kind this spec renders.
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Emoji(_) => TagKind::Emoji,
            Self::InlineLabel(_) => TagKind::InlineLabel,
            Self::CheckboxRadio(_) => TagKind::CheckboxRadio,
            Self::Note(_) => TagKind::Note,
            Self::Copy(_) => TagKind::Copy,
            Self::Image(_) => TagKind::Image,
            Self::Hashtag(_) => TagKind::Hashtag,
        }
    }

    /// Whether pointer/keyboard events on the rendered node should be ignored by the host.
    ///
    /// Always `false`: widgets are interactive.
    pub fn ignore_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::LabelKind;

    #[test]
    fn test_build_dispatches_by_capture() {
        let settings = TagSettings::default();
        let spec = WidgetSpec::build(
            &TagCapture::InlineLabel {
                label: LabelKind::Mark,
                content: "hi".to_string(),
                color: None,
            },
            &settings,
        );
        assert_eq!(spec.kind(), TagKind::InlineLabel);
        assert!(!spec.ignore_events());
    }
}
