//! Flash and revert systems.

use bevy::prelude::*;

use crate::config::SNOW_COLOR;
use crate::scene_params::SceneParams;
use crate::tree_placement::{PartKind, PartTint, Tree, TreeIndex, TreePart};

use super::picking::{nearest_part_hit, PartBounds};
use super::types::{FlashState, PickRequest, TreeFlashed, TreeReverted};

/// Set the tint of every part in `children` to `color_for(kind)`.
pub fn paint_parts(
    children: &Children,
    tints: &mut Query<(&TreePart, &mut PartTint)>,
    color_for: impl Fn(PartKind) -> Color,
) {
    for &child in children.iter() {
        if let Ok((part, mut tint)) = tints.get_mut(child) {
            tint.set_if_neq(PartTint(color_for(part.kind)));
        }
    }
}

/// Restore base colors on trees whose flash deadline has passed.
pub fn revert_expired_flashes(
    time: Res<Time>,
    mut trees: Query<(Entity, &Children, &mut FlashState), With<Tree>>,
    mut tints: Query<(&TreePart, &mut PartTint)>,
    mut reverted: EventWriter<TreeReverted>,
) {
    let now = time.elapsed();
    for (tree, children, mut state) in &mut trees {
        if !state.is_expired(now) {
            continue;
        }
        paint_parts(children, &mut tints, PartKind::base_color);
        *state = FlashState::Normal;
        reverted.send(TreeReverted { tree });
    }
}

/// Hit-test each pick ray against the registered trees and flash the nearest one.
#[allow(clippy::too_many_arguments)]
pub fn resolve_pick_requests(
    mut requests: EventReader<PickRequest>,
    time: Res<Time>,
    params: Res<SceneParams>,
    index: Res<TreeIndex>,
    mut trees: Query<(&Transform, &Children, &mut FlashState), With<Tree>>,
    shapes: Query<(&TreePart, &Transform), Without<Tree>>,
    mut tints: Query<(&TreePart, &mut PartTint)>,
    mut flashed: EventWriter<TreeFlashed>,
) {
    for request in requests.read() {
        let mut bounds = Vec::new();
        for &tree in &index.trees {
            let Ok((tree_tf, children, _)) = trees.get(tree) else {
                continue;
            };
            for &child in children.iter() {
                if let Ok((part, part_tf)) = shapes.get(child) {
                    bounds.push(PartBounds::new(tree, child, tree_tf, part_tf, part));
                }
            }
        }

        let Some(hit) = nearest_part_hit(request.ray, bounds) else {
            continue;
        };
        let Ok((_, children, mut state)) = trees.get_mut(hit.tree) else {
            continue;
        };

        paint_parts(children, &mut tints, |_| SNOW_COLOR);
        *state = FlashState::flashed_at(time.elapsed(), params.flash_duration());
        debug!(
            "Tree {:?} flashed (part {:?} at distance {:.2})",
            hit.tree, hit.part, hit.distance
        );
        flashed.send(TreeFlashed { tree: hit.tree });
    }
}
