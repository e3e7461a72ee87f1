//! Host view contract.
//!
//! The engine is headless: the host editor supplies the text buffer, the visible ranges
//! (possibly discontiguous, e.g. under folding or virtualization), the current selection, and
//! the live-preview flag, all queryable at rebuild time. [`DocumentView`] is a ropey-backed
//! implementation for hosts that do not bring their own buffer, and for tests.

use ropey::Rope;
use std::ops::Range;

/// The primary selection, as ordered char offsets (`from <= to`).
///
/// An empty selection (`from == to`) is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// Selection start (inclusive).
    pub from: usize,
    /// Selection end (exclusive; equal to `from` for a caret).
    pub to: usize,
}

impl SelectionRange {
    /// Create a selection, normalizing the endpoint order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    /// Create a caret (empty selection) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            from: offset,
            to: offset,
        }
    }

    /// Returns `true` if the selection is a caret.
    pub fn is_caret(&self) -> bool {
        self.from == self.to
    }
}

/// What the engine needs from the host editor at rebuild time.
///
/// All offsets are char offsets, half-open.
pub trait EditorView {
    /// The currently visible char ranges, in document order.
    fn visible_ranges(&self) -> Vec<Range<usize>>;

    /// The text of one visible range.
    fn slice_text(&self, range: Range<usize>) -> String;

    /// The primary selection.
    fn selection(&self) -> SelectionRange;

    /// Whether the editor is showing the document in live-preview mode (as opposed to raw
    /// source mode).
    fn is_live_preview(&self) -> bool;
}

/// A self-contained [`EditorView`] over a ropey text buffer.
///
/// By default the whole document is visible, the selection is a caret at offset 0, and
/// live-preview is on.
#[derive(Debug, Clone)]
pub struct DocumentView {
    rope: Rope,
    selection: SelectionRange,
    visible: Option<Vec<Range<usize>>>,
    live_preview: bool,
}

impl DocumentView {
    /// Create a view over `text` with the whole document visible.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: SelectionRange::caret(0),
            visible: None,
            live_preview: true,
        }
    }

    /// Replace the document text. The selection is clamped to the new length.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        let len = self.rope.len_chars();
        self.selection = SelectionRange::new(self.selection.from.min(len), self.selection.to.min(len));
    }

    /// Move the selection (offsets are clamped to the document length).
    pub fn set_selection(&mut self, a: usize, b: usize) {
        let len = self.rope.len_chars();
        self.selection = SelectionRange::new(a.min(len), b.min(len));
    }

    /// Restrict visibility to explicit ranges (e.g. to model folding). Pass ranges in
    /// document order; they are clamped to the document length.
    pub fn set_visible_ranges(&mut self, ranges: Vec<Range<usize>>) {
        let len = self.rope.len_chars();
        self.visible = Some(
            ranges
                .into_iter()
                .map(|r| r.start.min(len)..r.end.min(len))
                .filter(|r| r.start < r.end)
                .collect(),
        );
    }

    /// Make the whole document visible again.
    pub fn clear_visible_ranges(&mut self) {
        self.visible = None;
    }

    /// Toggle between live-preview and raw source mode.
    pub fn set_live_preview(&mut self, on: bool) {
        self.live_preview = on;
    }

    /// Document length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }
}

impl EditorView for DocumentView {
    fn visible_ranges(&self) -> Vec<Range<usize>> {
        match &self.visible {
            Some(ranges) => ranges.clone(),
            None => {
                let len = self.rope.len_chars();
                if len == 0 { Vec::new() } else { vec![0..len] }
            }
        }
    }

    fn slice_text(&self, range: Range<usize>) -> String {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn is_live_preview(&self) -> bool {
        self.live_preview
    }
}
