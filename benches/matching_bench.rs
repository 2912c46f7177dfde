use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use jobmatch::{EngineConfig, MatchingEngine, TermVector};

const ROLES: [&str; 8] = [
    "Engineer", "Developer", "Architect", "Analyst", "Manager", "Designer", "Scientist", "Lead",
];
const STACKS: [&str; 10] = [
    "java", "python", "rust", "go", "sql", "react", "kubernetes", "spark", "kafka", "terraform",
];

/// Engine with a synthetic title catalog of the given size.
fn setup_engine(title_count: usize) -> MatchingEngine {
    let titles: Vec<String> = (0..title_count)
        .map(|i| {
            let stack = STACKS[i % STACKS.len()];
            let role = ROLES[i % ROLES.len()];
            format!("{stack} {role} {i}")
        })
        .collect();
    MatchingEngine::with_titles(EngineConfig::default(), titles)
}

/// Synthetic job vectors drawing a few terms each from the shared stack.
fn setup_job_vectors(job_count: usize) -> HashMap<String, TermVector> {
    (0..job_count)
        .map(|i| {
            let terms: Vec<&str> = (0..4).map(|j| STACKS[(i + j) % STACKS.len()]).collect();
            (format!("job-{i}"), TermVector::from_terms(terms))
        })
        .collect()
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for title_count in [100, 1_000, 10_000] {
        let engine = setup_engine(title_count);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(title_count),
            &engine,
            |b, engine| b.iter(|| black_box(engine.suggest(black_box("ja")))),
        );
    }

    group.finish();
}

fn bench_rank_jobs(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_jobs");
    let engine = setup_engine(100);
    let cv = TermVector::from_terms(["java", "sql", "kubernetes", "react"]);

    for job_count in [100, 1_000, 10_000] {
        let jobs = setup_job_vectors(job_count);
        group.throughput(Throughput::Elements(job_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(job_count), &jobs, |b, jobs| {
            b.iter(|| black_box(engine.rank_jobs(black_box(&cv), jobs)))
        });
    }

    group.finish();
}

fn bench_score_percent(c: &mut Criterion) {
    let engine = setup_engine(100);
    let cv = TermVector::from_terms(STACKS);
    let jd = TermVector::from_terms(["java", "sql", "spark", "ansible", "hadoop"]);

    c.bench_function("score_percent", |b| {
        b.iter(|| black_box(engine.score_percent(black_box(&cv), black_box(&jd))))
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_titles");

    for title_count in [1_000, 10_000] {
        let titles: Vec<String> = (0..title_count)
            .map(|i| format!("{} {} {i}", STACKS[i % STACKS.len()], ROLES[i % ROLES.len()]))
            .collect();
        group.throughput(Throughput::Elements(title_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(title_count),
            &titles,
            |b, titles| {
                b.iter(|| {
                    let mut engine = MatchingEngine::new(EngineConfig::default());
                    engine.rebuild_titles(titles);
                    black_box(engine.title_count())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_suggest,
    bench_rank_jobs,
    bench_score_percent,
    bench_rebuild
);
criterion_main!(benches);
