/*
 * Paper Turtle Benchmark
 *
 * Measures the cost of the physics tick, which grows with nothing but the
 * trail, and of clearing a long trail.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use paper_turtle::{Simulation, SimulationParams, TickInput};

fn driving_input(i: usize) -> TickInput {
    TickInput {
        forward: i % 3 != 0,
        turn_right: i % 7 == 0,
        ..Default::default()
    }
}

// Benchmark a single tick with different amounts of trail already recorded
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for trail_len in [0usize, 1_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(trail_len), trail_len, |b, &n| {
            let mut sim = Simulation::new(SimulationParams::default());
            for i in 0..n {
                sim.tick(&driving_input(i));
            }

            let mut i = 0;
            b.iter(|| {
                i += 1;
                black_box(sim.tick(black_box(&driving_input(i))));
            });
        });
    }

    group.finish();
}

// Benchmark clearing a long trail through the button
fn bench_clear(c: &mut Criterion) {
    let click = TickInput {
        click: Some(pt2(700.0, 40.0)),
        ..Default::default()
    };

    c.bench_function("clear_10k_trail", |b| {
        b.iter_batched(
            || {
                let mut sim = Simulation::new(SimulationParams::default());
                for i in 0..10_000 {
                    sim.tick(&driving_input(i));
                }
                sim
            },
            |mut sim| {
                sim.tick(&click);
                sim
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_tick, bench_clear);
criterion_main!(benches);
