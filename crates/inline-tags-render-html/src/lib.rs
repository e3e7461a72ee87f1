#![warn(missing_docs)]
//! `inline-tags-render-html` - HTML rendering for `inline-tags-core` widget specs.
//!
//! Browser-based hosts replace each decorated span with a platform-native node; this crate
//! produces that node as an HTML string, one render function per widget variant. Markup and
//! class names (`tag-plugin colorful <kind>`, `copy-area`, `image-bg`, ...) follow the theme
//! the tags were designed for, so existing stylesheets keep working.
//!
//! All user-controlled text lands in the output escaped; rendering never fails.
//!
//! ```rust
//! use inline_tags_core::{LabelKind, InlineLabelWidget, WidgetSpec};
//! use inline_tags_render_html::render_widget;
//!
//! let spec = WidgetSpec::InlineLabel(InlineLabelWidget::build(
//!     LabelKind::Keyboard,
//!     "Ctrl",
//!     None,
//! ));
//! assert_eq!(
//!     render_widget(&spec),
//!     "<kbd class=\"tag-plugin colorful kbd\">Ctrl</kbd>"
//! );
//! ```

mod icons;

use html_escape::{encode_double_quoted_attribute, encode_text};
use inline_tags_core::{
    CheckboxRadioWidget, CopyWidget, DecorationSet, EmojiWidget, HashtagWidget, ImageWidget,
    InlineLabelWidget, NoteWidget, TagSpan, WidgetSpec,
};

/// Render one widget spec to an HTML node string.
pub fn render_widget(spec: &WidgetSpec) -> String {
    match spec {
        WidgetSpec::Emoji(widget) => render_emoji(widget),
        WidgetSpec::InlineLabel(widget) => render_inline_label(widget),
        WidgetSpec::CheckboxRadio(widget) => render_checkbox_radio(widget),
        WidgetSpec::Note(widget) => render_note(widget),
        WidgetSpec::Copy(widget) => render_copy(widget),
        WidgetSpec::Image(widget) => render_image(widget),
        WidgetSpec::Hashtag(widget) => render_hashtag(widget),
    }
}

/// Render a whole decoration set to `(span, html)` pairs, in span order.
pub fn render_decorations(set: &DecorationSet) -> Vec<(TagSpan, String)> {
    set.iter()
        .map(|decoration| (decoration.span, render_widget(&decoration.widget)))
        .collect()
}

fn render_emoji(widget: &EmojiWidget) -> String {
    let src = attr(widget.src.as_deref().unwrap_or(""));
    let alt = attr(&widget.name);
    let title = match widget.diagnostic() {
        Some(diagnostic) => format!(" title=\"{}\"", attr(&diagnostic)),
        None => String::new(),
    };
    format!(
        "<img src=\"{src}\" alt=\"{alt}\"{title} \
         style=\"width:1.8rem;vertical-align:middle;margin:0 2px;\">"
    )
}

fn render_inline_label(widget: &InlineLabelWidget) -> String {
    let element = widget.label.as_str();
    format!(
        "<{element} class=\"tag-plugin colorful {element}\"{}>{}</{element}>",
        color_attr(widget.color.as_deref()),
        encode_text(&widget.text),
    )
}

fn render_checkbox_radio(widget: &CheckboxRadioWidget) -> String {
    let control = widget.control.as_str();
    let mut attrs = color_attr(widget.color.as_deref());
    if let Some(symbol) = &widget.symbol {
        attrs.push_str(&format!(" symbol=\"{}\"", attr(symbol)));
    }
    let checked = if widget.checked { " checked" } else { "" };
    format!(
        "<div class=\"tag-plugin colorful {control}\"{attrs}>\
         <input type=\"{control}\"{checked}>\
         <span>{}</span></div>",
        encode_text(&widget.label),
    )
}

fn render_note(widget: &NoteWidget) -> String {
    let title = if widget.has_title() {
        format!("<div class=\"title\">{}</div>", encode_text(&widget.title))
    } else {
        String::new()
    };
    format!(
        "<div class=\"tag-plugin colorful note\"{}>{title}\
         <div class=\"body\">{}</div></div>",
        color_attr(widget.color.as_deref()),
        encode_text(&widget.body),
    )
}

fn render_copy(widget: &CopyWidget) -> String {
    let prefix = match &widget.prefix {
        Some(prefix) => format!("<span>{}</span>", encode_text(prefix)),
        None => String::new(),
    };
    format!(
        "<div class=\"tag-plugin copy\">{prefix}\
         <input class=\"copy-area\" id=\"{}\" value=\"{}\">\
         <button class=\"copy-btn\">{}</button></div>",
        attr(&widget.element_id),
        attr(&widget.payload),
        copy_icon(),
    )
}

fn render_image(widget: &ImageWidget) -> String {
    let style = widget.style();
    let style_attr = if style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", attr(&style))
    };

    let download = match &widget.download {
        Some(target) => {
            let name_attr = if widget.has_caption() {
                format!(" download=\"{}\"", attr(&widget.alt))
            } else {
                String::new()
            };
            format!(
                "<a class=\"image-download blur\" style=\"opacity:0\" target=\"_blank\" \
                 href=\"{}\"{name_attr}>{}</a>",
                attr(target),
                download_icon(),
            )
        }
        None => String::new(),
    };

    let caption = if widget.has_caption() {
        format!(
            "<div class=\"image-meta\"><span class=\"image-caption center\">{}</span></div>",
            encode_text(&widget.alt),
        )
    } else {
        String::new()
    };

    format!(
        "<div class=\"tag-plugin image\"><div class=\"image-bg\"{style_attr}>\
         <img class=\"lazy\" src=\"{src}\" data-src=\"{src}\" alt=\"{alt}\">\
         {download}</div>{caption}</div>",
        src = attr(&widget.src),
        alt = attr(&widget.alt),
    )
}

fn render_hashtag(widget: &HashtagWidget) -> String {
    // Missing colors are resolved here, at render time, so repeated renders of the same
    // tag may pick different palette entries.
    let color = widget.effective_color();
    format!(
        "<a class=\"tag-plugin colorful hashtag\" color=\"{}\" href=\"{}\">{}\
         <span>{}</span></a>",
        attr(&color),
        attr(&widget.href),
        hashtag_icon(),
        encode_text(&widget.text),
    )
}

fn color_attr(color: Option<&str>) -> String {
    match color {
        Some(color) => format!(" color=\"{}\"", attr(color)),
        None => String::new(),
    }
}

fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

fn copy_icon() -> String {
    format!(
        "<svg class=\"icon copy-btn\" viewBox=\"0 0 16 16\" width=\"16\" height=\"16\" \
         aria-hidden=\"true\"><path fill-rule=\"evenodd\" d=\"{}\"></path></svg>",
        icons::COPY_ICON_PATH
    )
}

fn download_icon() -> String {
    format!(
        "<svg class=\"icon\" style=\"width:1em;height:1em;vertical-align:middle;\
         fill:currentColor;overflow:hidden;\" viewBox=\"0 0 1024 1024\">\
         <path d=\"{}\"></path></svg>",
        icons::DOWNLOAD_ICON_PATH
    )
}

fn hashtag_icon() -> String {
    format!(
        "<svg class=\"icon\" viewBox=\"0 0 1024 1024\"><path d=\"{}\"></path></svg>",
        icons::HASHTAG_ICON_PATH
    )
}
