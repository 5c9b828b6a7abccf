//! Falling snow particles.
//!
//! `Snowfall` holds two parallel arrays, one position and one velocity per
//! flake, fixed in length at startup. Each frame `tick_snowfall` moves every
//! flake by its velocity and lifts flakes that sank below the ground back to
//! a random height, leaving x and z alone. The rendering crate rebuilds the
//! snow mesh whenever the `dirty` flag is set.

pub mod systems;
pub mod types;

pub use systems::{init_snowfall, tick_snowfall};
pub use types::Snowfall;

use bevy::prelude::*;

use crate::simulation_sets::SceneUpdateSet;

pub struct SnowfallPlugin;

impl Plugin for SnowfallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_snowfall)
            .add_systems(Update, tick_snowfall.in_set(SceneUpdateSet::Snowfall));
    }
}
