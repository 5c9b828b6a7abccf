//! Pick-and-flash interaction.
//!
//! A click arrives as a `PickRequest` carrying a world-space ray. The nearest
//! tree part whose surface the ray hits selects its owning tree; every part
//! of that tree is tinted snow white and the tree's `FlashState` records when to revert.
//! `revert_expired_flashes` restores each part's `PartKind::base_color` once
//! that deadline passes.
//!
//! Each tree keeps a single deadline. A second hit while flashed replaces it,
//! so a tree stays white until the latest deadline and never flickers back
//! early.

pub mod picking;
pub mod systems;
pub mod types;

pub use picking::{nearest_part_hit, part_bounds, shape_ray_distance, PartBounds, PartHit};
pub use systems::{paint_parts, resolve_pick_requests, revert_expired_flashes};
pub use types::{FlashState, PickRequest, TreeFlashed, TreeReverted};

use bevy::prelude::*;

use crate::simulation_sets::SceneUpdateSet;

pub struct FlashPlugin;

impl Plugin for FlashPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PickRequest>()
            .add_event::<TreeFlashed>()
            .add_event::<TreeReverted>()
            .add_systems(
                Update,
                (revert_expired_flashes, resolve_pick_requests)
                    .chain()
                    .in_set(SceneUpdateSet::Interaction),
            );
    }
}
