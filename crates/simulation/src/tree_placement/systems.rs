//! Tree placement systems.

use bevy::prelude::*;
use rand::Rng;

use crate::exclusion_zone::{ExclusionZone, Placement, PlacementError, SampleBounds};
use crate::flash::FlashState;
use crate::scene_params::SceneParams;
use crate::scene_rng::SceneRng;

use super::types::{PartTint, Tree, TreeIndex, TreePart, TREE_RECIPE};

// =============================================================================
// Pure helper functions (testable without ECS)
// =============================================================================

/// Draw `count` tree positions outside `zone`.
///
/// The zone is taken as given: callers pass the final zone, so every
/// placement respects the radius in effect at call time.
pub fn plan_tree_placements<R: Rng + ?Sized>(
    count: usize,
    zone: &ExclusionZone,
    bounds: &SampleBounds,
    rng: &mut R,
) -> Result<Vec<Placement>, PlacementError> {
    (0..count).map(|_| zone.sample(bounds, rng)).collect()
}

/// Spawn one compound tree at `placement` and return its root entity.
pub fn spawn_tree(commands: &mut Commands, placement: Placement) -> Entity {
    commands
        .spawn((
            Tree,
            FlashState::Normal,
            Transform::from_translation(placement.translation()),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for spec in TREE_RECIPE {
                parent.spawn((
                    TreePart {
                        kind: spec.kind,
                        shape: spec.shape,
                    },
                    PartTint(spec.kind.base_color()),
                    Transform::from_xyz(0.0, spec.center_y, 0.0),
                    Visibility::default(),
                ));
            }
        })
        .id()
}

// =============================================================================
// Systems
// =============================================================================

/// Scatter the trees. Runs once when the scene becomes ready.
pub fn place_trees(
    mut commands: Commands,
    params: Res<SceneParams>,
    zone: Res<ExclusionZone>,
    mut rng: ResMut<SceneRng>,
    mut index: ResMut<TreeIndex>,
) {
    if !index.is_empty() {
        return;
    }

    let bounds = SampleBounds::square(params.placement_half_extent);
    let placements = match plan_tree_placements(params.tree_count, &zone, &bounds, &mut rng.0) {
        Ok(placements) => placements,
        Err(e) => {
            error!("Tree placement failed: {}", e);
            return;
        }
    };

    for placement in placements {
        let tree = spawn_tree(&mut commands, placement);
        index.trees.push(tree);
    }

    info!(
        "Placed {} trees outside radius {:.2}",
        index.len(),
        zone.radius()
    );
}
