use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use text_toolbox_engine::analyze;
mod common;

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for paragraphs in [10, 1000] {
        let prose = common::generate_prose(paragraphs);
        group.bench_with_input(BenchmarkId::new("analyze", paragraphs), &prose, |b, s| {
            b.iter(|| analyze(std::hint::black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
