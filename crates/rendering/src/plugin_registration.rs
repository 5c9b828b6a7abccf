use bevy::prelude::*;

use simulation::snowfall::init_snowfall;
use simulation::{SceneState, SceneUpdateSet};

use crate::*;

/// Register all rendering systems.
pub(crate) fn register_rendering_systems(app: &mut App) {
    app.add_systems(
        Startup,
        (
            camera::setup_camera,
            scene_dressing::setup_lighting,
            scene_dressing::spawn_ground,
            centerpiece::load_centerpiece,
            snow_render::spawn_snow_mesh.after(init_snowfall),
        ),
    );

    // Camera controls
    app.add_systems(
        Update,
        (
            picking_input::emit_pick_requests
                .before(camera::camera_left_drag)
                .before(SceneUpdateSet::Interaction),
            (
                camera::camera_left_drag,
                camera::camera_pan_drag,
                camera::camera_zoom,
                camera::smooth_orbit_camera,
                camera::apply_orbit_camera,
            )
                .chain(),
        ),
    );

    app.add_systems(
        Update,
        centerpiece::watch_centerpiece.run_if(in_state(SceneState::LoadingCenterpiece)),
    );

    app.add_systems(
        Update,
        (
            tree_meshes::attach_part_meshes,
            tree_meshes::sync_part_tints,
            snow_render::sync_snow_mesh,
        )
            .in_set(SceneUpdateSet::Visual),
    );
}
