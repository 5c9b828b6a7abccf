//! Snowfall systems.

use bevy::prelude::*;

use crate::scene_params::SceneParams;
use crate::scene_rng::SceneRng;

use super::types::Snowfall;

/// Scatter the initial flakes. Runs once at startup.
pub fn init_snowfall(mut commands: Commands, params: Res<SceneParams>, mut rng: ResMut<SceneRng>) {
    let snowfall = Snowfall::scatter(params.particle_count, &mut rng.0);
    debug!("Scattered {} snow particles", snowfall.len());
    commands.insert_resource(snowfall);
}

/// Recycle the particles once per frame.
pub fn tick_snowfall(snowfall: Option<ResMut<Snowfall>>, mut rng: ResMut<SceneRng>) {
    let Some(mut snowfall) = snowfall else {
        return;
    };
    snowfall.tick(&mut rng.0);
}
