//! Scale tests for the sampler and the particle recycler, driven through the
//! public API only.
//!
//! Run: cargo test -p simulation --test scene_scale

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use simulation::config::{
    PLACEMENT_HALF_EXTENT, SNOW_GROUND_Y, SNOW_HALF_EXTENT, SNOW_RESPAWN_MAX_Y, SNOW_RESPAWN_MIN_Y,
};
use simulation::exclusion_zone::{ExclusionZone, PlacementError, SampleBounds};
use simulation::snowfall::Snowfall;
use simulation::tree_placement::plan_tree_placements;

// ---------------------------------------------------------------------------
// 1. Sampler keeps every point outside the zone across radii
// ---------------------------------------------------------------------------

#[test]
fn test_sampler_respects_zone_for_many_radii() {
    let bounds = SampleBounds::square(PLACEMENT_HALF_EXTENT);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for radius in [0.0, 1.0, 5.0, 10.0, 20.0, 35.0, 39.9] {
        let zone = ExclusionZone::new(0.0, 0.0, radius);
        let placements = plan_tree_placements(2_000, &zone, &bounds, &mut rng)
            .expect("zone smaller than the bound");
        assert_eq!(placements.len(), 2_000);
        for p in &placements {
            assert!(
                zone.distance_to(p.x, p.z) >= radius,
                "radius {radius}: ({}, {}) inside zone",
                p.x,
                p.z
            );
            assert!(bounds.contains(p.x, p.z));
        }
    }
}

// ---------------------------------------------------------------------------
// 2. A zone swallowing the whole bound fails fast instead of spinning
// ---------------------------------------------------------------------------

#[test]
fn test_covering_zone_fails_fast() {
    let bounds = SampleBounds::square(PLACEMENT_HALF_EXTENT);
    let zone = ExclusionZone::new(0.0, 0.0, PLACEMENT_HALF_EXTENT * 2.0);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let start = Instant::now();
    let result = plan_tree_placements(1_000, &zone, &bounds, &mut rng);
    let elapsed = start.elapsed();

    assert!(matches!(
        result,
        Err(PlacementError::ZoneCoversBounds { .. })
    ));
    assert!(
        elapsed.as_millis() < 1000,
        "Rejecting a covering zone took {}ms",
        elapsed.as_millis()
    );
}

// ---------------------------------------------------------------------------
// 3. 100K flakes stay inside their ranges over many frames
// ---------------------------------------------------------------------------

#[test]
fn test_snowfall_100k_particles_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut snowfall = Snowfall::scatter(100_000, &mut rng);
    let initial_xz: Vec<(f32, f32)> = snowfall.positions().iter().map(|p| (p[0], p[2])).collect();

    let start = Instant::now();
    for _ in 0..600 {
        snowfall.tick(&mut rng);
    }
    let elapsed = start.elapsed();

    assert_eq!(snowfall.len(), 100_000);
    for (pos, (x, z)) in snowfall.positions().iter().zip(&initial_xz) {
        assert_eq!((pos[0], pos[2]), (*x, *z));
        assert!(pos[0] >= -SNOW_HALF_EXTENT && pos[0] <= SNOW_HALF_EXTENT);
        assert!(pos[1] >= SNOW_GROUND_Y && pos[1] < SNOW_RESPAWN_MAX_Y);
    }
    println!("600 ticks of 100K flakes: {}ms", elapsed.as_millis());
}

// ---------------------------------------------------------------------------
// 4. Every flake is recycled within a bounded number of frames
// ---------------------------------------------------------------------------

#[test]
fn test_every_flake_recycles() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut snowfall = Snowfall::scatter(5_000, &mut rng);
    let mut recycled = vec![false; snowfall.len()];

    // Only flakes that can reach the ground within the loop are checked.
    let frames = 2_000;
    let reachable: Vec<bool> = snowfall
        .positions()
        .iter()
        .zip(snowfall.velocities())
        .map(|(p, v)| v[1] < 0.0 && p[1] / -v[1] < frames as f32 - 1.0)
        .collect();

    for _ in 0..frames {
        let before: Vec<f32> = snowfall.positions().iter().map(|p| p[1]).collect();
        snowfall.tick(&mut rng);
        for (i, (p, y0)) in snowfall.positions().iter().zip(before).enumerate() {
            if p[1] > y0 {
                assert!(p[1] >= SNOW_RESPAWN_MIN_Y && p[1] < SNOW_RESPAWN_MAX_Y);
                recycled[i] = true;
            }
        }
    }

    for (i, can_reach) in reachable.iter().enumerate() {
        if *can_reach {
            assert!(recycled[i], "flake {i} never recycled");
        }
    }
}
