use bevy::prelude::*;

pub mod config;
pub mod exclusion_zone;
pub mod flash;
pub mod scene_params;
pub mod scene_rng;
pub mod scene_state;
pub mod simulation_sets;
pub mod snowfall;
pub mod tree_placement;

mod plugin_registration;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use scene_state::SceneState;
pub use simulation_sets::SceneUpdateSet;

/// Scene logic with no rendering: exclusion zone, tree placement, snowfall
/// and the pick-and-flash interaction. Runs headless under `MinimalPlugins`
/// plus `StatesPlugin`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SceneState>();
        plugin_registration::register_feature_plugins(app);
    }
}
