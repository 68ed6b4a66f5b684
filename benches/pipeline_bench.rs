//! Table pipeline benchmarks: generation, deduplication and the full filtered run.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use slider_table::pipeline::{run_pipeline, PipelineOptions};
use slider_table::report::csv_string;
use slider_table::table::{
    deduplicate, generate_table, DedupPolicy, GeneratorConfig, PrecedenceEntry,
};

fn bench_pipeline(c: &mut Criterion) {
    let config = GeneratorConfig::default();

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(100);
    group.throughput(Throughput::Elements(1));

    group.bench_function("generate_table", |b| {
        b.iter(|| black_box(generate_table(&config)))
    });

    let records = match generate_table(&config) {
        Ok(records) => records,
        Err(err) => panic!("default table should generate: {err}"),
    };

    group.bench_function("dedup_simple", |b| {
        b.iter_batched(
            || records.clone(),
            |r| black_box(deduplicate(&r, &DedupPolicy::Simple)),
            BatchSize::SmallInput,
        );
    });

    let precedence = DedupPolicy::Precedence(vec![
        PrecedenceEntry::new("x2", "Vanilla"),
        PrecedenceEntry::new("Vanilla", "x3"),
    ]);
    group.bench_function("dedup_precedence", |b| {
        b.iter(|| black_box(deduplicate(&records, &precedence)))
    });

    let options = PipelineOptions::default();
    group.bench_function("run_pipeline_filtered", |b| {
        b.iter(|| black_box(run_pipeline(&options)))
    });

    group.bench_function("run_pipeline_and_csv", |b| {
        b.iter(|| {
            let views = run_pipeline(&options).ok()?;
            black_box(csv_string(&views.primary().records).ok())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
