//! Procedural tree placement.
//!
//! Once the scene enters `SceneState::Ready`, `place_trees` draws
//! `SceneParams::tree_count` positions outside the `ExclusionZone` and spawns
//! a compound tree at each: a trunk, three shrinking foliage cones and a snow
//! cap. Every part carries an explicit `PartKind` so its base color never has
//! to be inferred from geometry. Trees are registered in `TreeIndex`, the
//! collection the picker hit-tests against.

pub mod systems;
pub mod types;

pub use systems::{place_trees, plan_tree_placements, spawn_tree};
pub use types::{PartKind, PartShape, PartSpec, PartTint, Tree, TreeIndex, TreePart, TREE_RECIPE};

use bevy::prelude::*;

use crate::scene_state::SceneState;

pub struct TreePlacementPlugin;

impl Plugin for TreePlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TreeIndex>()
            .add_systems(OnEnter(SceneState::Ready), place_trees);
    }
}
