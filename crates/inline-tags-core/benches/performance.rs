use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inline_tags_core::{DocumentView, TagMatcherSet, TagSettings, build_decorations};

fn tagged_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 80);
    for i in 0..line_count {
        // Every eighth line carries a tag so the scan does real work.
        if i % 8 == 0 {
            out.push_str(&format!(
                "line {i} with {{% emoji neko happy %}} and {{% mark note to self %}} inline\n"
            ));
        } else {
            out.push_str(&format!(
                "{i:06} the quick brown fox jumps over the lazy dog (inline-tags benchmark)\n"
            ));
        }
    }
    out
}

fn settings() -> TagSettings {
    TagSettings::default().with_source("neko", "https://emoji.example/neko/{name}.png")
}

fn bench_full_document_rebuild(c: &mut Criterion) {
    let text = tagged_text(50_000);
    let view = DocumentView::new(&text);
    let matchers = TagMatcherSet::new().unwrap();
    let settings = settings();

    c.bench_function("rebuild/full_50k_lines", |b| {
        b.iter(|| {
            let set = build_decorations(black_box(&view), &matchers, &settings);
            black_box(set.len());
        })
    });
}

fn bench_viewport_rebuild(c: &mut Criterion) {
    let text = tagged_text(50_000);
    let mut view = DocumentView::new(&text);
    // A realistic viewport: ~60 lines somewhere in the middle.
    let start = text.chars().count() / 2;
    view.set_visible_ranges(vec![start..start + 60 * 80]);
    let matchers = TagMatcherSet::new().unwrap();
    let settings = settings();

    c.bench_function("rebuild/viewport_60_lines", |b| {
        b.iter(|| {
            let set = build_decorations(black_box(&view), &matchers, &settings);
            black_box(set.len());
        })
    });
}

fn bench_matcher_scan(c: &mut Criterion) {
    let text = tagged_text(5_000);
    let matchers = TagMatcherSet::new().unwrap();

    c.bench_function("matchers/scan_5k_lines", |b| {
        b.iter(|| {
            let found = matchers.find_tags(black_box(&text), 0);
            black_box(found.len());
        })
    });
}

criterion_group!(
    benches,
    bench_full_document_rebuild,
    bench_viewport_rebuild,
    bench_matcher_scan
);
criterion_main!(benches);
