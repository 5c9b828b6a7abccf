//! Deterministic scene RNG resource.
//!
//! Wraps `ChaCha8Rng` so that tree layout and snowfall are reproducible
//! across platforms for a given seed. Systems that need randomness take
//! `ResMut<SceneRng>` instead of reaching for `rand::thread_rng()`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::scene_params::SceneParams;

/// Seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource for all scene randomness.
///
/// `rng.0` is a `ChaCha8Rng` implementing `rand::Rng`.
#[derive(Resource)]
pub struct SceneRng(pub ChaCha8Rng);

impl Default for SceneRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl SceneRng {
    /// Create a new `SceneRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct SceneRngPlugin;

impl Plugin for SceneRngPlugin {
    fn build(&self, app: &mut App) {
        // Seed from params when they were inserted before the plugin.
        let seed = app
            .world()
            .get_resource::<SceneParams>()
            .map_or(DEFAULT_SEED, |p| p.seed);
        app.insert_resource(SceneRng::from_seed_u64(seed));
    }
}
