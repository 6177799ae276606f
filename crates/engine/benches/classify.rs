//! Benchmarks for page classification
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic page shaped like a full gallery listing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{Classifier, FilterConfig};
use metadata::{ItemRecord, MetadataTable, PageItem};

const RATINGS: [&str; 3] = ["r-general", "r-mature", "r-adult"];

fn build_page(size: u64) -> (Vec<PageItem>, MetadataTable) {
    let mut items = Vec::with_capacity(size as usize);
    let mut records = MetadataTable::with_capacity(size as usize);

    for id in 0..size {
        let rating = RATINGS[(id % 3) as usize];
        let author = format!("Artist{}", id % 50);
        let title = format!("Submission {} of the red fox series", id);
        items.push(PageItem::new(id, Some(rating)).with_caption(author.clone(), title.clone()));
        records.insert(
            id,
            ItemRecord::new(id, author, title, "A longer description with a few more words in it"),
        );
    }

    (items, records)
}

fn build_config() -> FilterConfig {
    FilterConfig::new()
        .with_rating_classes(["r-general", "r-mature"])
        .with_blocked_artists((0..10).map(|n| format!("artist{}", n)))
        .with_allowed_artists(["artist3"])
        .with_keyword_lines(["red wolf", "description words", "series 7"])
}

fn bench_classify_page(c: &mut Criterion) {
    let (items, records) = build_page(72);
    let classifier = Classifier::new(&build_config());

    c.bench_function("classify_page", |b| {
        b.iter(|| {
            let verdicts = classifier.classify(black_box(&items), black_box(&records));
            black_box(verdicts)
        })
    });
}

fn bench_compile_config(c: &mut Criterion) {
    let config = build_config();

    c.bench_function("compile_config", |b| {
        b.iter(|| {
            let classifier = Classifier::new(black_box(&config));
            black_box(classifier)
        })
    });
}

criterion_group!(benches, bench_classify_page, bench_compile_config);
criterion_main!(benches);
