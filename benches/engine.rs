use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use escape_time_explorer::{BackendKinds, EngineConfig, FractalState, Formula};

fn config(backend: BackendKinds, max_iter: u32) -> EngineConfig {
    EngineConfig {
        width: 550,
        height: 300,
        max_iter,
        backend,
        formula: Formula::Mandelbrot,
        ..EngineConfig::default()
    }
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");

    for &backend in BackendKinds::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(backend),
            &backend,
            |b, &backend| {
                b.iter(|| FractalState::new(black_box(config(backend, 200))));
            },
        );
    }

    group.finish();
}

fn bench_extend_vs_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow_budget_200_to_250");

    group.bench_function("extend", |b| {
        b.iter_batched(
            || FractalState::new(config(BackendKinds::Rayon, 200)),
            |engine| {
                if let Ok(mut engine) = engine {
                    let _ = engine.extend(black_box(250));
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("rebuild", |b| {
        b.iter(|| FractalState::new(black_box(config(BackendKinds::Rayon, 250))));
    });

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let Ok(mut engine) = FractalState::new(config(BackendKinds::Rayon, 100)) else {
        return;
    };

    c.bench_function("translate", |b| {
        b.iter(|| engine.translate(black_box(3), black_box(-2)));
    });
}

criterion_group!(benches, bench_rebuild, bench_extend_vs_rebuild, bench_translate);
criterion_main!(benches);
