//! Checkbox/radio widget builder.

use crate::args::ParsedArgs;
use crate::matchers::ControlKind;

/// A checkbox or radio input with a text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxRadioWidget {
    /// Checkbox or radio.
    pub control: ControlKind,
    /// The visible label (free text after fields are removed).
    pub label: String,
    /// Optional color attribute.
    pub color: Option<String>,
    /// Optional symbol attribute.
    pub symbol: Option<String>,
    /// Whether the input renders pre-checked. Only the exact field value `checked:true`
    /// checks the box; any other value (or absence) leaves it unchecked.
    pub checked: bool,
}

impl CheckboxRadioWidget {
    /// Parse the tag arguments into control attributes and a label.
    pub fn build(control: ControlKind, args: &str) -> Self {
        let parsed = ParsedArgs::parse(args);
        Self {
            control,
            label: parsed.free_text(),
            color: parsed.field_owned("color"),
            symbol: parsed.field_owned("symbol"),
            checked: parsed.field("checked") == Some("true"),
        }
    }
}
