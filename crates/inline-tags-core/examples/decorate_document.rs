//! Decoration walkthrough example
//!
//! Demonstrates the full pipeline: a document with inline tags, a view with a selection,
//! and the decoration sets the engine produces as the view changes.

use inline_tags_core::{DecorationEngine, DocumentView, TagSettings, ViewUpdate, WidgetSpec};

fn main() {
    let settings = TagSettings::default()
        .with_source("neko", "https://emoji.example/neko/{name}.png")
        .with_source("blob", "https://emoji.example/blob/{name}.gif");

    let text = "Welcome {% emoji neko happy %} to the demo.\n\
                {% note Heads-up&nbsp;first Read the docs before editing. %}\n\
                {% checkbox checked:true ship the release %}\n\
                Copy it: {% copy git:ssh /octocat/Hello-World prefix:clone %}\n\
                See also {% hashtag rust /tags/rust/ %}\n";

    let mut view = DocumentView::new(text);
    let mut engine =
        DecorationEngine::with_view(settings, &view).expect("tag patterns compile");

    println!("=== Initial build ===");
    print_decorations(&engine);

    // Click into the note tag: its raw source is revealed, everything else stays decorated.
    let note_start = text.find("{% note").expect("note tag present");
    view.set_selection(note_start + 4, note_start + 4);
    engine.apply_update(
        &ViewUpdate {
            selection_changed: true,
            ..ViewUpdate::none()
        },
        &view,
    );
    println!("\n=== Caret inside the note tag ===");
    print_decorations(&engine);

    // Switch to raw source mode: everything is suppressed.
    view.set_live_preview(false);
    engine.apply_update(
        &ViewUpdate {
            mode_changed: true,
            ..ViewUpdate::none()
        },
        &view,
    );
    println!("\n=== Raw source mode ===");
    print_decorations(&engine);
}

fn print_decorations(engine: &DecorationEngine) {
    let set = engine.decorations();
    println!(
        "generation {}, {} decoration(s)",
        engine.generation(),
        set.len()
    );
    for decoration in set {
        let span = decoration.span;
        let summary = match &decoration.widget {
            WidgetSpec::Emoji(w) => format!("emoji {} -> {:?}", w.name, w.src),
            WidgetSpec::InlineLabel(w) => format!("label <{}> {:?}", w.label.as_str(), w.text),
            WidgetSpec::CheckboxRadio(w) => {
                format!("{} checked={} {:?}", w.control.as_str(), w.checked, w.label)
            }
            WidgetSpec::Note(w) => format!("note title={:?} body={:?}", w.title, w.body),
            WidgetSpec::Copy(w) => format!("copy {:?}", w.payload),
            WidgetSpec::Image(w) => format!("image {} alt={:?}", w.src, w.alt),
            WidgetSpec::Hashtag(w) => format!("hashtag #{} -> {}", w.text, w.href),
        };
        println!("  [{}..{}] {}", span.start, span.end, summary);
    }
}
