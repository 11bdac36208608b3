use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use fractex_core::{AlgorithmVariant, IterationResult};
use fractex_render::{color_for, render_row, FractalExplorer, RenderJob};

fn bench_single_row(c: &mut Criterion) {
    let algorithm = AlgorithmVariant::Mandelbrot;
    let job = RenderJob {
        algorithm,
        viewport: algorithm.default_viewport(),
        canvas_size: 800,
        generation: 1,
    };

    // The middle row crosses the set interior, so it hits the iteration cap.
    c.bench_function("row_800px_through_interior", |b| {
        b.iter(|| render_row(&job, 400));
    });
}

fn bench_full_pass(c: &mut Criterion) {
    c.bench_function("full_pass_128x128", |b| {
        b.iter(|| {
            let mut explorer = FractalExplorer::new(128).unwrap();
            explorer.request_render();
            explorer
                .block_until_idle(Duration::from_secs(120))
                .unwrap();
        });
    });
}

fn bench_color_mapping(c: &mut Criterion) {
    c.bench_function("color_map_2000_counts", |b| {
        b.iter(|| {
            for n in 1..2000 {
                std::hint::black_box(color_for(IterationResult::Escaped(n)));
            }
        });
    });
}

criterion_group!(benches, bench_single_row, bench_full_pass, bench_color_mapping);
criterion_main!(benches);
