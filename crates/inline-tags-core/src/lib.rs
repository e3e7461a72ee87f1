#![warn(missing_docs)]
//! Inline Tags Core - Headless Inline-Tag Decoration Engine
//!
//! # Overview
//!
//! `inline-tags-core` scans visible editor text for inline `{% ... %}` tag markers and
//! produces, for each match not under the cursor, a typed widget description replacing the
//! marker span. It is headless: it never renders anything itself, assuming the host editor
//! consumes the resulting decoration set on its own update cycle (a browser-based host can
//! use `inline-tags-render-html` for that).
//!
//! # Core Features
//!
//! - **Tag Matching**: one compiled pattern per tag kind, scanned over the visible ranges
//! - **Shared Argument Parsing**: positional tokens + `key:value` fields, one tokenizer for
//!   every tag kind
//! - **Typed Widget Specs**: a closed union over the seven widget kinds, built per match
//! - **Wholesale Rebuilds**: a sorted, non-overlapping decoration set rebuilt on qualifying
//!   view changes only, with a generation counter for change tracking
//! - **Cursor Transparency**: a selection inside a marker keeps its raw source editable
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  DecorationEngine (trigger + generation)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  build_decorations (gating, skip, sort)     │  ← Rebuild Pipeline
//! ├─────────────────────────────────────────────┤
//! │  WidgetSpec Builders (7 kinds)              │  ← Typed Widgets
//! ├─────────────────────────────────────────────┤
//! │  TagMatcherSet + ParsedArgs                 │  ← Recognition
//! ├─────────────────────────────────────────────┤
//! │  EditorView (host contract, char offsets)   │  ← Host Input
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use inline_tags_core::{DecorationEngine, DocumentView, TagKind, TagSettings, ViewUpdate};
//!
//! let settings = TagSettings::default()
//!     .with_source("neko", "https://emoji.example/neko/{name}.png");
//!
//! let view = DocumentView::new("hello {% emoji neko happy %} world");
//! let mut engine = DecorationEngine::with_view(settings, &view).unwrap();
//!
//! let decorations = engine.decorations();
//! assert_eq!(decorations.len(), 1);
//! assert_eq!(decorations.as_slice()[0].widget.kind(), TagKind::Emoji);
//!
//! // Updates without a qualifying change keep the set verbatim.
//! let generation = engine.generation();
//! engine.apply_update(&ViewUpdate::none(), &view);
//! assert_eq!(engine.generation(), generation);
//! ```
//!
//! ## Cursor inside a marker
//!
//! ```rust
//! use inline_tags_core::{DecorationEngine, DocumentView, TagSettings, ViewUpdate};
//!
//! let mut view = DocumentView::new("see {% note Title Body text %}");
//! let mut engine = DecorationEngine::with_view(TagSettings::default(), &view).unwrap();
//! assert_eq!(engine.decorations().len(), 1);
//!
//! // Clicking into the marker reveals the raw source.
//! view.set_selection(10, 10);
//! engine.apply_update(
//!     &ViewUpdate { selection_changed: true, ..ViewUpdate::none() },
//!     &view,
//! );
//! assert!(engine.decorations().is_empty());
//! ```
//!
//! # Module Description
//!
//! - [`args`] - shared tag argument tokenizer
//! - [`matchers`] - per-kind tag patterns and typed captures
//! - [`widget`] - widget specs and per-kind builders
//! - [`decorations`] - spans and the sorted decoration set
//! - [`engine`] - rebuild pipeline and trigger
//! - [`settings`] - host-owned settings (JSON wire format)
//! - [`view`] - host view contract and a ropey-backed implementation
//!
//! # Error Handling
//!
//! There is no fatal-error path in the rebuild: malformed tag syntax simply does not match
//! and stays plain text, and builders degrade missing fields to neutral attributes. The only
//! fallible operations are matcher construction ([`MatcherError`]) and settings parsing
//! ([`SettingsError`]).

pub mod args;
pub mod decorations;
pub mod engine;
pub mod matchers;
pub mod settings;
pub mod view;
pub mod widget;

pub use args::ParsedArgs;
pub use decorations::{DecorationSet, TagDecoration, TagSpan};
pub use engine::{DecorationEngine, ViewUpdate, build_decorations};
pub use matchers::{
    ControlKind, LabelKind, MatcherError, TagCapture, TagKind, TagMatch, TagMatcherSet,
};
pub use settings::{SettingsError, TagSettings};
pub use view::{DocumentView, EditorView, SelectionRange};
pub use widget::{
    CheckboxRadioWidget, CopyWidget, EmojiWidget, HashtagWidget, ImageWidget, InlineLabelWidget,
    NoteWidget, TAG_PALETTE, WidgetSpec, random_palette_color,
};
