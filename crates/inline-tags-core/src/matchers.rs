//! Tag matchers.
//!
//! One compiled pattern per tag kind, each scanned independently over a visible text slice.
//! Matches are non-overlapping within a kind (left-to-right scan) and across kinds in
//! practice, because each kind's literal keyword is exclusive. All public offsets are
//! **character offsets** (not byte offsets), half-open, absolute in the document.

use crate::decorations::TagSpan;
use regex::Regex;
use thiserror::Error;

const EMOJI_PATTERN: &str = r"\{%\s*emoji\s+(\S+)\s+(\S+)\s*%\}";
const INLINE_LABEL_PATTERN: &str =
    r"\{%\s*(u|emp|wavy|del|sup|sub|kbd|blur|psw|mark)\s+([^%}]+?)(?:\s+color:\s*([^\s%}]+))?\s*%\}";
const CHECKBOX_RADIO_PATTERN: &str = r"\{%\s*(checkbox|radio)\s+([^%}]+)\s*%\}";
const NOTE_PATTERN: &str = r"\{%\s*note\s+([^%}]+)\s*%\}";
const COPY_PATTERN: &str = r"\{%\s*copy\s+([^%}]+)\s*%\}";
const IMAGE_PATTERN: &str = r"\{%\s*image\s+([^%}]+)\s*%\}";
const HASHTAG_PATTERN: &str = r"\{%\s*hashtag\s+([^%}]+)\s*%\}";

/// The closed set of recognized tag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    /// `{% emoji <type> <name> %}`
    Emoji,
    /// `{% (u|emp|wavy|del|sup|sub|kbd|blur|psw|mark) <content> [color:<c>] %}`
    InlineLabel,
    /// `{% (checkbox|radio) <args...> %}`
    CheckboxRadio,
    /// `{% note <args...> %}`
    Note,
    /// `{% copy <args...> %}`
    Copy,
    /// `{% image <args...> %}`
    Image,
    /// `{% hashtag <text> <href> [color:<c>] %}`
    Hashtag,
}

/// The ten inline-label keywords.
///
/// The keyword doubles as the rendered element name (`<u>`, `<kbd>`, custom elements for the
/// rest), so [`LabelKind::as_str`] returns it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// `u` - underline
    Underline,
    /// `emp` - emphasis dots
    Emphasis,
    /// `wavy` - wavy underline
    Wavy,
    /// `del` - strikethrough
    Delete,
    /// `sup` - superscript
    Superscript,
    /// `sub` - subscript
    Subscript,
    /// `kbd` - keyboard key
    Keyboard,
    /// `blur` - blurred text
    Blur,
    /// `psw` - password-style mask
    Password,
    /// `mark` - highlight marker
    Mark,
}

impl LabelKind {
    /// The tag keyword as written in source (also the element name).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underline => "u",
            Self::Emphasis => "emp",
            Self::Wavy => "wavy",
            Self::Delete => "del",
            Self::Superscript => "sup",
            Self::Subscript => "sub",
            Self::Keyboard => "kbd",
            Self::Blur => "blur",
            Self::Password => "psw",
            Self::Mark => "mark",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "u" => Self::Underline,
            "emp" => Self::Emphasis,
            "wavy" => Self::Wavy,
            "del" => Self::Delete,
            "sup" => Self::Superscript,
            "sub" => Self::Subscript,
            "kbd" => Self::Keyboard,
            "blur" => Self::Blur,
            "psw" => Self::Password,
            "mark" => Self::Mark,
            _ => return None,
        })
    }
}

/// Checkbox vs. radio control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// `checkbox`
    Checkbox,
    /// `radio`
    Radio,
}

impl ControlKind {
    /// The control keyword as written in source (also the `<input>` type).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// Typed captures for one matched tag.
#[derive(Debug, Clone, PartialEq)]
pub enum TagCapture {
    /// Emoji source type and name (single tokens, no whitespace).
    Emoji {
        /// The emoji source type (first token).
        source: String,
        /// The emoji name (second token).
        name: String,
    },
    /// Inline label keyword, content, and optional trailing color.
    InlineLabel {
        /// Which of the ten label keywords matched.
        label: LabelKind,
        /// The label content (lazy capture up to the optional color suffix).
        content: String,
        /// Optional `color:<c>` suffix value.
        color: Option<String>,
    },
    /// Checkbox/radio control and its raw argument text.
    CheckboxRadio {
        /// Which control keyword matched.
        control: ControlKind,
        /// Raw argument text, parsed by the builder.
        args: String,
    },
    /// Note tag raw arguments.
    Note {
        /// Raw argument text, parsed by the builder.
        args: String,
    },
    /// Copy tag raw arguments.
    Copy {
        /// Raw argument text, parsed by the builder.
        args: String,
    },
    /// Image tag raw arguments.
    Image {
        /// Raw argument text, parsed by the builder.
        args: String,
    },
    /// Hashtag tag raw arguments.
    Hashtag {
        /// Raw argument text, parsed by the builder.
        args: String,
    },
}

impl TagCapture {
    /// The tag kind this capture belongs to.
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Emoji { .. } => TagKind::Emoji,
            Self::InlineLabel { .. } => TagKind::InlineLabel,
            Self::CheckboxRadio { .. } => TagKind::CheckboxRadio,
            Self::Note { .. } => TagKind::Note,
            Self::Copy { .. } => TagKind::Copy,
            Self::Image { .. } => TagKind::Image,
            Self::Hashtag { .. } => TagKind::Hashtag,
        }
    }
}

/// One matched tag: its absolute span plus typed captures.
#[derive(Debug, Clone, PartialEq)]
pub struct TagMatch {
    /// Absolute half-open char-offset span of the full `{% ... %}` marker.
    pub span: TagSpan,
    /// Typed captures for the matched kind.
    pub capture: TagCapture,
}

/// Matcher construction errors.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// A tag pattern failed to compile.
    #[error("invalid tag pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// The full set of compiled tag patterns.
#[derive(Debug, Clone)]
pub struct TagMatcherSet {
    emoji: Regex,
    inline_label: Regex,
    checkbox_radio: Regex,
    note: Regex,
    copy: Regex,
    image: Regex,
    hashtag: Regex,
}

impl TagMatcherSet {
    /// Compile all tag patterns.
    pub fn new() -> Result<Self, MatcherError> {
        Ok(Self {
            emoji: Regex::new(EMOJI_PATTERN)?,
            inline_label: Regex::new(INLINE_LABEL_PATTERN)?,
            checkbox_radio: Regex::new(CHECKBOX_RADIO_PATTERN)?,
            note: Regex::new(NOTE_PATTERN)?,
            copy: Regex::new(COPY_PATTERN)?,
            image: Regex::new(IMAGE_PATTERN)?,
            hashtag: Regex::new(HASHTAG_PATTERN)?,
        })
    }

    /// Scan a visible text slice for all tag matches.
    ///
    /// `base` is the absolute char offset of the slice start; returned spans are absolute.
    /// The result is sorted by span start.
    pub fn find_tags(&self, text: &str, base: usize) -> Vec<TagMatch> {
        let index = CharIndex::new(text);
        let mut matches = Vec::new();

        for caps in self.emoji.captures_iter(text) {
            let Some((span, m)) = capture_span(&caps, &index, base) else {
                continue;
            };
            let source = m.as_str().to_string();
            let Some(name) = caps.get(2) else {
                continue;
            };
            matches.push(TagMatch {
                span,
                capture: TagCapture::Emoji {
                    source,
                    name: name.as_str().to_string(),
                },
            });
        }

        for caps in self.inline_label.captures_iter(text) {
            let Some((span, m)) = capture_span(&caps, &index, base) else {
                continue;
            };
            // The alternation restricts the keyword; from_keyword cannot miss here.
            let Some(label) = LabelKind::from_keyword(m.as_str()) else {
                continue;
            };
            let Some(content) = caps.get(2) else {
                continue;
            };
            matches.push(TagMatch {
                span,
                capture: TagCapture::InlineLabel {
                    label,
                    content: content.as_str().to_string(),
                    color: caps.get(3).map(|c| c.as_str().to_string()),
                },
            });
        }

        for caps in self.checkbox_radio.captures_iter(text) {
            let Some((span, m)) = capture_span(&caps, &index, base) else {
                continue;
            };
            let control = if m.as_str() == "radio" {
                ControlKind::Radio
            } else {
                ControlKind::Checkbox
            };
            let Some(args) = caps.get(2) else {
                continue;
            };
            matches.push(TagMatch {
                span,
                capture: TagCapture::CheckboxRadio {
                    control,
                    args: args.as_str().to_string(),
                },
            });
        }

        self.scan_raw_args(&self.note, text, &index, base, &mut matches, |args| {
            TagCapture::Note { args }
        });
        self.scan_raw_args(&self.copy, text, &index, base, &mut matches, |args| {
            TagCapture::Copy { args }
        });
        self.scan_raw_args(&self.image, text, &index, base, &mut matches, |args| {
            TagCapture::Image { args }
        });
        self.scan_raw_args(&self.hashtag, text, &index, base, &mut matches, |args| {
            TagCapture::Hashtag { args }
        });

        matches.sort_by_key(|m| (m.span.start, m.span.end));
        matches
    }

    fn scan_raw_args(
        &self,
        pattern: &Regex,
        text: &str,
        index: &CharIndex,
        base: usize,
        out: &mut Vec<TagMatch>,
        capture: impl Fn(String) -> TagCapture,
    ) {
        for caps in pattern.captures_iter(text) {
            let Some((span, m)) = capture_span(&caps, index, base) else {
                continue;
            };
            out.push(TagMatch {
                span,
                capture: capture(m.as_str().to_string()),
            });
        }
    }
}

fn capture_span<'t>(
    caps: &regex::Captures<'t>,
    index: &CharIndex,
    base: usize,
) -> Option<(TagSpan, regex::Match<'t>)> {
    let whole = caps.get(0)?;
    let first = caps.get(1)?;
    let start = base + index.byte_to_char(whole.start());
    let end = base + index.byte_to_char(whole.end());
    Some((TagSpan::new(start, end), first))
}

/// Byte-offset to char-offset conversion for one scanned slice.
#[derive(Debug)]
struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matchers() -> TagMatcherSet {
        TagMatcherSet::new().unwrap()
    }

    #[test]
    fn test_emoji_captures_type_and_name() {
        let found = matchers().find_tags("see {% emoji neko happy %} here", 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, TagSpan::new(4, 26));
        assert_eq!(
            found[0].capture,
            TagCapture::Emoji {
                source: "neko".to_string(),
                name: "happy".to_string(),
            }
        );
    }

    #[test]
    fn test_spans_are_char_offsets() {
        // Multibyte prefix: spans must count chars, not bytes.
        let text = "日本語 {% emoji neko happy %}";
        let found = matchers().find_tags(text, 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, TagSpan::new(4, 26));
    }

    #[test]
    fn test_base_offset_is_applied() {
        let found = matchers().find_tags("{% note hi there %}", 100);
        assert_eq!(found[0].span, TagSpan::new(100, 119));
    }

    #[test]
    fn test_inline_label_with_color() {
        let found = matchers().find_tags("{% mark important words color:red %}", 0);
        assert_eq!(
            found[0].capture,
            TagCapture::InlineLabel {
                label: LabelKind::Mark,
                content: "important words".to_string(),
                color: Some("red".to_string()),
            }
        );
    }

    #[test]
    fn test_inline_label_without_color() {
        let found = matchers().find_tags("{% kbd Ctrl %}", 0);
        assert_eq!(
            found[0].capture,
            TagCapture::InlineLabel {
                label: LabelKind::Keyboard,
                content: "Ctrl".to_string(),
                color: None,
            }
        );
    }

    #[test]
    fn test_inline_label_color_tolerates_space_after_colon() {
        let found = matchers().find_tags("{% u under color: blue %}", 0);
        assert_eq!(
            found[0].capture,
            TagCapture::InlineLabel {
                label: LabelKind::Underline,
                content: "under".to_string(),
                color: Some("blue".to_string()),
            }
        );
    }

    #[test]
    fn test_checkbox_and_radio() {
        let found = matchers().find_tags("{% checkbox checked:true a %} {% radio b %}", 0);
        assert_eq!(found.len(), 2);
        assert!(matches!(
            &found[0].capture,
            TagCapture::CheckboxRadio {
                control: ControlKind::Checkbox,
                ..
            }
        ));
        assert!(matches!(
            &found[1].capture,
            TagCapture::CheckboxRadio {
                control: ControlKind::Radio,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_tags_do_not_match() {
        // Missing closing delimiter and unknown keywords fall through to plain text.
        let found = matchers().find_tags("{% note unterminated {% frobnicate x %}", 0);
        assert!(found.is_empty());
    }

    #[test]
    fn test_matches_are_sorted_across_kinds() {
        let text = "{% hashtag rust /tags/rust/ %} and {% emoji neko hi %}";
        let found = matchers().find_tags(text, 0);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].capture.kind(), TagKind::Hashtag);
        assert_eq!(found[1].capture.kind(), TagKind::Emoji);
        assert!(found[0].span.end <= found[1].span.start);
    }

    #[test]
    fn test_repeated_matches_within_one_kind() {
        let found = matchers().find_tags("{% emoji a b %}{% emoji c d %}", 0);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].span, TagSpan::new(0, 15));
        assert_eq!(found[1].span, TagSpan::new(15, 30));
    }
}
