use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use text_stats_core::{Counter, EngineConfig, common_words};

fn sample_text() -> String {
    "<p>The quick brown fox jumps over the lazy dog. Does it?</p>\n".repeat(200)
}

fn benchmark_compute(c: &mut Criterion) {
    let counter = Counter::new(EngineConfig::default()).unwrap();
    let text = sample_text();

    c.bench_function("compute_report", |b| {
        b.iter(|| black_box(counter.compute(black_box(&text))));
    });

    c.bench_function("common_words", |b| {
        b.iter(|| black_box(common_words(black_box(&text), 10)));
    });
}

criterion_group!(benches, benchmark_compute);
criterion_main!(benches);
