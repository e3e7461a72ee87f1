//! Inline label widget builder.

use crate::matchers::LabelKind;

/// A short run of text wrapped in one of the ten inline label elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineLabelWidget {
    /// Which label element wraps the content.
    pub label: LabelKind,
    /// The wrapped text.
    pub text: String,
    /// Optional color attribute.
    pub color: Option<String>,
}

impl InlineLabelWidget {
    /// Wrap `content` in the given label element. The matcher already restricts `label` to
    /// the closed keyword set, so there is nothing to validate here.
    pub fn build(label: LabelKind, content: &str, color: Option<&str>) -> Self {
        Self {
            label,
            text: content.to_string(),
            color: color.map(str::to_string),
        }
    }
}
