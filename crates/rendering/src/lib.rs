use bevy::prelude::*;

pub mod camera;
pub mod centerpiece;
pub mod picking_input;
pub mod scene_dressing;
pub mod snow_render;
pub mod tree_meshes;

mod plugin_registration;

use camera::{CameraDrag, LeftClickDrag};
use tree_meshes::PartMeshCache;

/// Meshes, materials, lighting, camera and mouse input for the scene driven
/// by `simulation::SimulationPlugin`.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraDrag>()
            .init_resource::<LeftClickDrag>()
            .init_resource::<PartMeshCache>();
        plugin_registration::register_rendering_systems(app);
    }
}
