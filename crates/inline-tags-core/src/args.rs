//! Tag argument parsing.
//!
//! Every tag kind that accepts a free-form argument list shares one tokenizer: the raw
//! argument text is split on spaces, tokens containing `:` become `key:value` fields, and
//! everything else stays positional (in order). Free text is reconstructed by re-joining
//! positional tokens with single spaces.
//!
//! The image tag uses a stricter field rule so that bare URLs stay positional; see
//! [`ParsedArgs::parse_image`].

use std::collections::HashMap;

/// Parsed tag arguments: positional tokens plus `key:value` fields.
///
/// Duplicate field keys are allowed; the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    positional: Vec<String>,
    fields: HashMap<String, String>,
}

impl ParsedArgs {
    /// Parse with the generic field rule: any token containing `:` is a field, split at the
    /// first `:`.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, |token| token.contains(':'))
    }

    /// Parse with the image field rule.
    ///
    /// A token is a field only if it contains `:` without `://`, or if it starts with
    /// `download:http`. This keeps `https://example.com/a.png` positional while still
    /// accepting `download:https://example.com/a.png` as a field.
    pub fn parse_image(raw: &str) -> Self {
        Self::parse_with(raw, |token| {
            (token.contains(':') && !token.contains("://")) || token.starts_with("download:http")
        })
    }

    fn parse_with(raw: &str, is_field: impl Fn(&str) -> bool) -> Self {
        let mut parsed = Self::default();
        for token in raw.trim().split(' ') {
            if token.is_empty() {
                continue;
            }
            if is_field(token) {
                // First `:` splits key from value; the value keeps any later colons.
                let (key, value) = token.split_once(':').unwrap_or((token, ""));
                parsed.fields.insert(key.to_string(), value.to_string());
            } else {
                parsed.positional.push(token.to_string());
            }
        }
        parsed
    }

    /// Positional tokens in their original order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Look up a field value by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Clone a field value by key.
    pub fn field_owned(&self, key: &str) -> Option<String> {
        self.fields.get(key).cloned()
    }

    /// Number of parsed fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All positional tokens re-joined with single spaces.
    pub fn free_text(&self) -> String {
        self.free_text_from(0)
    }

    /// Positional tokens starting at `start`, re-joined with single spaces.
    ///
    /// Returns an empty string when `start` is past the end.
    pub fn free_text_from(&self, start: usize) -> String {
        if start >= self.positional.len() {
            return String::new();
        }
        self.positional[start..].join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_and_positional_split() {
        let args = ParsedArgs::parse("a:1 b:2 free text");
        assert_eq!(args.field("a"), Some("1"));
        assert_eq!(args.field("b"), Some("2"));
        assert_eq!(args.positional(), ["free", "text"]);
        assert_eq!(args.free_text(), "free text");
    }

    #[test]
    fn test_first_colon_splits_key_value() {
        let args = ParsedArgs::parse("download:https://example.com/x.png");
        assert_eq!(args.field("download"), Some("https://example.com/x.png"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let args = ParsedArgs::parse("color:red color:blue");
        assert_eq!(args.field("color"), Some("blue"));
        assert_eq!(args.field_count(), 1);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let args = ParsedArgs::parse("  hello   world  ");
        assert_eq!(args.positional(), ["hello", "world"]);
        assert_eq!(args.free_text(), "hello world");
    }

    #[test]
    fn test_image_rule_keeps_urls_positional() {
        let args = ParsedArgs::parse_image("https://x/y.png bg:black caption here");
        assert_eq!(args.positional()[0], "https://x/y.png");
        assert_eq!(args.field("bg"), Some("black"));
        assert_eq!(args.free_text_from(1), "caption here");
    }

    #[test]
    fn test_image_rule_download_url_is_field() {
        let args = ParsedArgs::parse_image("https://x/y.png download:https://cdn/y.png");
        assert_eq!(args.field("download"), Some("https://cdn/y.png"));
        assert_eq!(args.positional(), ["https://x/y.png"]);
    }

    #[test]
    fn test_free_text_from_past_end_is_empty() {
        let args = ParsedArgs::parse("only");
        assert_eq!(args.free_text_from(1), "");
    }
}
