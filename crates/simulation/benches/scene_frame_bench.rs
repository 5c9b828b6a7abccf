//! Criterion benchmark: one headless scene frame and one pick.
//!
//! Benchmarks:
//!   - a full `Update` frame (snowfall, interaction) with 2K and 20K flakes
//!   - resolving a pick ray against every part of 30 and 300 trees
//!
//! Run with: cargo bench -p simulation --bench scene_frame_bench --features bench

use bevy::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use simulation::scene_params::SceneParams;
use simulation::test_harness::TestScene;

/// A ready scene with trees placed by the sampler.
fn ready_scene(tree_count: usize, particle_count: usize) -> TestScene {
    TestScene::with_params(SceneParams {
        tree_count,
        particle_count,
        placement_half_extent: 150.0,
        ..SceneParams::default()
    })
    .ready()
}

// ---------------------------------------------------------------------------
// Benchmark: frame
// ---------------------------------------------------------------------------

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");

    for particles in [2_000, 20_000] {
        let mut scene = ready_scene(30, particles);
        group.bench_with_input(BenchmarkId::from_parameter(particles), &particles, |b, _| {
            b.iter(|| scene.update());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: pick
// ---------------------------------------------------------------------------

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_pick");
    // Grazes the ground at crown height across the whole placement area.
    let ray = Ray3d {
        origin: Vec3::new(0.0, 6.0, 200.0),
        direction: Dir3::NEG_Z,
    };

    for trees in [30, 300] {
        let mut scene = ready_scene(trees, 0);
        group.bench_with_input(BenchmarkId::from_parameter(trees), &trees, |b, _| {
            b.iter(|| scene.pick(ray));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame, bench_pick);
criterion_main!(benches);
