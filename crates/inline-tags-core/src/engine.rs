//! Decoration rebuild engine.
//!
//! The host editor delivers view-update events synchronously on its own update cycle; each
//! qualifying event triggers one full, synchronous rebuild over the currently visible ranges.
//! The previous decoration set is discarded wholesale (no incremental patching), which keeps
//! the rebuild a pure function of (text, selection, viewport, settings).
//!
//! Non-qualifying updates keep the previous set verbatim; the generation counter makes that
//! observable to hosts.

use crate::decorations::{DecorationSet, TagDecoration};
use crate::matchers::{MatcherError, TagMatcherSet};
use crate::settings::TagSettings;
use crate::view::EditorView;
use crate::widget::WidgetSpec;

/// Which aspects of the view changed since the last update.
///
/// Mirrors the host's update payload: document edits, selection moves, viewport scrolls or
/// folds, and live-preview/source mode flips. Anything else is a no-op for decorations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    /// The document text changed.
    pub doc_changed: bool,
    /// The selection changed.
    pub selection_changed: bool,
    /// The set of visible ranges changed.
    pub viewport_changed: bool,
    /// The live-preview/source mode flag flipped.
    pub mode_changed: bool,
}

impl ViewUpdate {
    /// An update carrying no qualifying change.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if this update requires a decoration rebuild.
    pub fn requires_rebuild(&self) -> bool {
        self.doc_changed || self.selection_changed || self.viewport_changed || self.mode_changed
    }
}

/// Build the decoration set for the current view state.
///
/// This is the whole pipeline: preview-mode gating, per-visible-range tag matching, the
/// selection containment skip, widget building, and the final sort. It is a pure function of
/// its inputs (settings are injected, not ambient) and cannot fail.
pub fn build_decorations<V: EditorView + ?Sized>(
    view: &V,
    matchers: &TagMatcherSet,
    settings: &TagSettings,
) -> DecorationSet {
    // Live-preview rendering can be disabled by settings; raw source mode never renders.
    if !settings.render_in_live_preview && view.is_live_preview() {
        return DecorationSet::empty();
    }
    if !view.is_live_preview() {
        return DecorationSet::empty();
    }

    let selection = view.selection();
    let mut decorations = Vec::new();

    for range in view.visible_ranges() {
        let text = view.slice_text(range.clone());
        for tag in matchers.find_tags(&text, range.start) {
            // A selection fully inside the marker keeps the raw source editable.
            if tag.span.encloses_selection(&selection) {
                continue;
            }
            decorations.push(TagDecoration {
                span: tag.span,
                widget: WidgetSpec::build(&tag.capture, settings),
            });
        }
    }

    DecorationSet::from_unsorted(decorations)
}

/// Holds the current decoration set and rebuilds it on qualifying view updates.
#[derive(Debug)]
pub struct DecorationEngine {
    matchers: TagMatcherSet,
    settings: TagSettings,
    decorations: DecorationSet,
    generation: u64,
}

impl DecorationEngine {
    /// Create an engine with an empty decoration set.
    pub fn new(settings: TagSettings) -> Result<Self, MatcherError> {
        Ok(Self {
            matchers: TagMatcherSet::new()?,
            settings,
            decorations: DecorationSet::empty(),
            generation: 0,
        })
    }

    /// Create an engine and run the initial build against `view`.
    pub fn with_view<V: EditorView + ?Sized>(
        settings: TagSettings,
        view: &V,
    ) -> Result<Self, MatcherError> {
        let mut engine = Self::new(settings)?;
        engine.refresh(view);
        Ok(engine)
    }

    /// The current decoration set.
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// The active settings.
    pub fn settings(&self) -> &TagSettings {
        &self.settings
    }

    /// Rebuild counter; unchanged when an update is a no-op.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Process one view update: rebuild if it qualifies, keep the previous set otherwise.
    ///
    /// Returns `true` when a rebuild ran.
    pub fn apply_update<V: EditorView + ?Sized>(&mut self, update: &ViewUpdate, view: &V) -> bool {
        if !update.requires_rebuild() {
            return false;
        }
        self.refresh(view);
        true
    }

    /// Unconditionally rebuild the decoration set from the current view state.
    pub fn refresh<V: EditorView + ?Sized>(&mut self, view: &V) {
        self.decorations = build_decorations(view, &self.matchers, &self.settings);
        self.generation += 1;
        tracing::debug!(
            target: "inline_tags::rebuild",
            generation = self.generation,
            decorations = self.decorations.len(),
            "rebuilt decoration set"
        );
    }

    /// Replace the settings wholesale (a settings save) and rebuild.
    pub fn set_settings<V: EditorView + ?Sized>(&mut self, settings: TagSettings, view: &V) {
        self.settings = settings;
        self.refresh(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::DocumentView;

    fn engine() -> DecorationEngine {
        let settings =
            TagSettings::default().with_source("neko", "https://emoji.example/{name}.png");
        DecorationEngine::new(settings).unwrap()
    }

    #[test]
    fn test_initial_build_with_view() {
        let view = DocumentView::new("a {% emoji neko hi %} b");
        let engine = DecorationEngine::with_view(TagSettings::default(), &view).unwrap();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.decorations().len(), 1);
    }

    #[test]
    fn test_noop_update_keeps_set_and_generation() {
        let view = DocumentView::new("a {% emoji neko hi %} b");
        let mut engine = engine();
        engine.refresh(&view);
        let generation = engine.generation();

        assert!(!engine.apply_update(&ViewUpdate::none(), &view));
        assert_eq!(engine.generation(), generation);
    }

    #[test]
    fn test_qualifying_update_rebuilds() {
        let mut view = DocumentView::new("a {% emoji neko hi %} b");
        let mut engine = engine();
        engine.refresh(&view);

        view.set_text("plain text now");
        let update = ViewUpdate {
            doc_changed: true,
            ..ViewUpdate::none()
        };
        assert!(engine.apply_update(&update, &view));
        assert!(engine.decorations().is_empty());
    }

    #[test]
    fn test_set_settings_rebuilds() {
        let view = DocumentView::new("{% emoji neko hi %}");
        let mut engine = engine();
        engine.refresh(&view);
        let generation = engine.generation();

        engine.set_settings(TagSettings::default(), &view);
        assert_eq!(engine.generation(), generation + 1);
    }

    #[test]
    fn test_source_mode_suppresses_decorations() {
        let mut view = DocumentView::new("{% emoji neko hi %}");
        view.set_live_preview(false);
        let set = build_decorations(&view, &TagMatcherSet::new().unwrap(), &TagSettings::default());
        assert!(set.is_empty());
    }
}
