//! Snowfall driven by the frame loop.

use crate::config::{PARTICLE_COUNT, SNOW_RESPAWN_MAX_Y};
use crate::scene_params::SceneParams;
use crate::snowfall::Snowfall;
use crate::test_harness::TestScene;

#[test]
fn test_snowfall_initialized_at_startup() {
    let scene = TestScene::new();
    let snow = scene.resource::<Snowfall>();
    assert_eq!(snow.len(), PARTICLE_COUNT);
    assert_eq!(snow.velocities().len(), PARTICLE_COUNT);
}

#[test]
fn test_snowfall_runs_before_ready() {
    let mut scene = TestScene::new();
    let before = scene.resource::<Snowfall>().positions().to_vec();
    scene.frames(3);
    let after = scene.resource::<Snowfall>().positions();
    assert_ne!(before.as_slice(), after);
}

#[test]
fn test_many_frames_keep_particles_in_range_and_xz_fixed() {
    let mut scene = TestScene::with_params(SceneParams {
        particle_count: 200,
        ..Default::default()
    });
    let start = scene.resource::<Snowfall>().positions().to_vec();
    // 60 / 0.2 = 300 frames is enough for the fastest flakes to wrap.
    scene.frames(400);
    let snow = scene.resource::<Snowfall>();
    assert_eq!(snow.len(), 200);
    for (a, b) in start.iter().zip(snow.positions()) {
        assert_eq!((a[0], a[2]), (b[0], b[2]));
        assert!(b[1] >= 0.0 && b[1] < SNOW_RESPAWN_MAX_Y);
    }
}
