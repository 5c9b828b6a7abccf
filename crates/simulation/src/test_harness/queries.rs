//! Query helpers for `TestScene`.

use std::time::Duration;

use bevy::prelude::*;

use crate::flash::FlashState;
use crate::scene_state::SceneState;
use crate::tree_placement::{PartKind, PartTint, Tree, TreeIndex, TreePart};

use super::TestScene;

impl TestScene {
    pub fn state(&self) -> SceneState {
        *self.resource::<State<SceneState>>().get()
    }

    /// Elapsed scene time as seen by the flash systems.
    pub fn elapsed(&self) -> Duration {
        self.resource::<Time>().elapsed()
    }

    /// Number of entities carrying `Tree`.
    pub fn tree_count(&mut self) -> usize {
        let world = self.world_mut();
        world.query_filtered::<(), With<Tree>>().iter(world).count()
    }

    pub fn tree_index(&self) -> Vec<Entity> {
        self.resource::<TreeIndex>().trees.clone()
    }

    /// Ground position `(x, z)` of every tree.
    pub fn tree_positions(&mut self) -> Vec<Vec2> {
        let world = self.world_mut();
        world
            .query_filtered::<&Transform, With<Tree>>()
            .iter(world)
            .map(|t| Vec2::new(t.translation.x, t.translation.z))
            .collect()
    }

    pub fn flash_state(&self, tree: Entity) -> FlashState {
        *self
            .world()
            .get::<FlashState>(tree)
            .expect("entity is not a tree")
    }

    /// `(kind, tint)` for every part of `tree`, in spawn order.
    pub fn part_tints(&self, tree: Entity) -> Vec<(PartKind, Color)> {
        let world = self.world();
        let Some(children) = world.get::<Children>(tree) else {
            return Vec::new();
        };
        children
            .iter()
            .filter_map(|&child| {
                let part = world.get::<TreePart>(child)?;
                let tint = world.get::<PartTint>(child)?;
                Some((part.kind, tint.0))
            })
            .collect()
    }

    /// True if every part of `tree` shows its base color.
    pub fn tree_at_base_colors(&self, tree: Entity) -> bool {
        self.part_tints(tree)
            .iter()
            .all(|(kind, color)| *color == kind.base_color())
    }
}
