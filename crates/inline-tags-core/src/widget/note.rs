//! Note widget builder.

use crate::args::ParsedArgs;

/// A note card: optional title, body text, optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteWidget {
    /// The note title; empty when the tag carries a single positional token.
    pub title: String,
    /// The note body.
    pub body: String,
    /// Optional color attribute.
    pub color: Option<String>,
}

impl NoteWidget {
    /// Parse the tag arguments into title and body.
    ///
    /// The first positional token is the title only when a second one exists; a sole token is
    /// the body with no title. Literal `&nbsp;` sequences in the title become ordinary spaces
    /// (a title is a single token, so this is how multi-word titles are written).
    pub fn build(args: &str) -> Self {
        let parsed = ParsedArgs::parse(args);
        let positional = parsed.positional();

        let (title, body) = if positional.len() >= 2 {
            (positional[0].clone(), parsed.free_text_from(1))
        } else {
            (
                String::new(),
                positional.first().cloned().unwrap_or_default(),
            )
        };

        Self {
            title: title.replace("&nbsp;", " "),
            body,
            color: parsed.field_owned("color"),
        }
    }

    /// Returns `true` if the note renders a title block.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}
