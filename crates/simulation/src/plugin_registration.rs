use bevy::prelude::*;

use crate::*;

/// Register all scene feature plugins.
///
/// Order matters for the first two: `SceneRngPlugin` seeds itself from the
/// `SceneParams` that `SceneParamsPlugin` inserts.
pub(crate) fn register_feature_plugins(app: &mut App) {
    app.add_plugins(scene_params::SceneParamsPlugin);
    app.add_plugins(scene_rng::SceneRngPlugin);
    app.add_plugins(simulation_sets::SceneSetsPlugin);

    app.add_plugins(exclusion_zone::ExclusionZonePlugin);
    app.add_plugins(tree_placement::TreePlacementPlugin);
    app.add_plugins(snowfall::SnowfallPlugin);
    app.add_plugins(flash::FlashPlugin);
}
