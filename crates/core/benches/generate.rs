//! Criterion benchmarks for maze generation and run stepping.
//!
//! Run with:
//!   cargo bench -p fogmaze
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fogmaze::prelude::*;

/// Benchmark generate() across interior sizes.
fn bench_generate_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (w, h) in [(9u32, 9u32), (38, 17), (99, 51), (255, 255)] {
        group.throughput(Throughput::Elements((w * h) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{w}x{h}")),
            &(w, h),
            |b, &(w, h)| {
                let mut rng = SeededRandom::new(42);
                b.iter(|| black_box(generate(w, h, &mut rng)));
            },
        );
    }

    group.finish();
}

/// Benchmark a full random walk on the reference maze until it is won.
fn bench_random_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    let clock = FixedClock(Duration::from_secs(1));
    let dirs = Direction::all();

    group.bench_function("random_walk_38x17", |b| {
        b.iter(|| {
            let mut run = Run::new(MazeConfig::default(), &mut SeededRandom::new(7)).unwrap();
            let mut walk = SeededRandom::new(11);
            let mut steps = 0u32;
            while !run.is_won() && steps < 200_000 {
                run.step(Some(dirs[walk.pick(dirs.len())]), &clock);
                steps += 1;
            }
            black_box(steps)
        });
    });

    group.bench_function("reveal_radius_3", |b| {
        let grid = generate(38, 17, &mut SeededRandom::new(1));
        let mut vis = Visibility::for_grid(&grid);
        b.iter(|| {
            vis.reveal(black_box(Pos::new(20, 9)), 3);
            black_box(vis.seen_count())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate_sizes, bench_random_walk);

criterion_main!(benches);
