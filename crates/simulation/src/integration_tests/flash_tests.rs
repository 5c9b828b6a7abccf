//! Pick-and-flash through the ECS with a manually stepped clock.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::{FOLIAGE_COLOR, SNOW_COLOR, TRUNK_COLOR};
use crate::flash::{FlashState, TreeFlashed, TreeReverted};
use crate::test_harness::TestScene;
use crate::tree_placement::PartKind;

const FLASH: Duration = Duration::from_millis(2000);

/// Horizontal ray at crown height pointing at a tree standing at `(x, 0)`.
fn ray_at_tree(x: f32) -> Ray3d {
    Ray3d {
        origin: Vec3::new(x, 6.0, 30.0),
        direction: Dir3::NEG_Z,
    }
}

fn ray_at_sky() -> Ray3d {
    Ray3d {
        origin: Vec3::new(0.0, 50.0, 30.0),
        direction: Dir3::Y,
    }
}

/// Scene with two hand-placed trees: left at x=-20, right at x=20.
fn two_tree_scene() -> (TestScene, Entity, Entity) {
    let mut scene = TestScene::new();
    let left = scene.spawn_tree_at(-20.0, 0.0);
    let right = scene.spawn_tree_at(20.0, 0.0);
    scene.update();
    (scene, left, right)
}

fn all_white(scene: &TestScene, tree: Entity) -> bool {
    scene
        .part_tints(tree)
        .iter()
        .all(|(_, color)| *color == SNOW_COLOR)
}

#[test]
fn test_hit_turns_tree_white_immediately() {
    let (mut scene, left, right) = two_tree_scene();
    scene.pick(ray_at_tree(20.0));

    assert!(all_white(&scene, right));
    assert!(scene.flash_state(right).is_flashed());
    // The other tree is untouched.
    assert!(scene.tree_at_base_colors(left));
    assert_eq!(scene.flash_state(left), FlashState::Normal);
}

#[test]
fn test_revert_after_flash_duration() {
    let (mut scene, _, right) = two_tree_scene();
    scene.pick(ray_at_tree(20.0));

    scene.advance(FLASH - Duration::from_millis(100));
    assert!(all_white(&scene, right), "still white before the deadline");

    scene.advance(Duration::from_millis(100));
    assert_eq!(scene.flash_state(right), FlashState::Normal);
    for (kind, color) in scene.part_tints(right) {
        match kind {
            PartKind::Foliage { .. } => assert_eq!(color, FOLIAGE_COLOR),
            PartKind::Trunk => assert_eq!(color, TRUNK_COLOR),
            PartKind::Cap => assert_eq!(color, SNOW_COLOR),
        }
    }
}

#[test]
fn test_second_hit_extends_flash_without_flicker() {
    let (mut scene, _, right) = two_tree_scene();
    scene.pick(ray_at_tree(20.0));
    scene.advance(Duration::from_millis(500));
    scene.pick(ray_at_tree(20.0));

    // First deadline (t = 2000 ms) passes: tree must stay white.
    scene.advance(Duration::from_millis(1600));
    assert!(all_white(&scene, right));
    assert!(scene.flash_state(right).is_flashed());

    // Second deadline (t = 2500 ms).
    scene.advance(Duration::from_millis(400));
    assert!(scene.tree_at_base_colors(right));
}

#[test]
fn test_each_hit_emits_flashed_event() {
    let (mut scene, _, right) = two_tree_scene();
    scene.pick(ray_at_tree(20.0));
    scene.pick(ray_at_tree(20.0));

    let events = scene.world().resource::<Events<TreeFlashed>>();
    let mut reader = events.get_cursor();
    let hits: Vec<_> = reader.read(events).map(|e| e.tree).collect();
    assert_eq!(hits, vec![right, right]);
}

#[test]
fn test_single_revert_event_after_double_hit() {
    let (mut scene, _, right) = two_tree_scene();
    scene.pick(ray_at_tree(20.0));
    scene.pick(ray_at_tree(20.0));
    scene.advance(FLASH);

    let events = scene.world().resource::<Events<TreeReverted>>();
    let mut reader = events.get_cursor();
    let reverted: Vec<_> = reader.read(events).map(|e| e.tree).collect();
    assert_eq!(reverted, vec![right]);
}

#[test]
fn test_miss_changes_nothing() {
    let (mut scene, left, right) = two_tree_scene();
    scene.pick(ray_at_sky());

    for tree in [left, right] {
        assert!(scene.tree_at_base_colors(tree));
        assert_eq!(scene.flash_state(tree), FlashState::Normal);
    }
    assert!(scene.world().resource::<Events<TreeFlashed>>().is_empty());
}

#[test]
fn test_nearest_tree_wins_when_aligned() {
    let mut scene = TestScene::new();
    let far = scene.spawn_tree_at(0.0, -20.0);
    let near = scene.spawn_tree_at(0.0, 10.0);
    scene.update();

    scene.pick(ray_at_tree(0.0));
    assert!(all_white(&scene, near));
    assert!(scene.tree_at_base_colors(far));
}

#[test]
fn test_ray_past_near_crown_flashes_far_tree() {
    let mut scene = TestScene::new();
    let near = scene.spawn_tree_at(0.0, 10.0);
    let far = scene.spawn_tree_at(2.5, -20.0);
    scene.update();

    // Inside the near tree's lowest foliage box, but clear of every cone:
    // at y = 6.9 its widest foliage radius is 1.05.
    scene.pick(Ray3d {
        origin: Vec3::new(2.5, 6.9, 30.0),
        direction: Dir3::NEG_Z,
    });

    assert!(all_white(&scene, far));
    assert!(scene.flash_state(far).is_flashed());
    assert!(scene.tree_at_base_colors(near));
    assert_eq!(scene.flash_state(near), FlashState::Normal);
}

#[test]
fn test_flashing_two_trees_is_independent() {
    let (mut scene, left, right) = two_tree_scene();
    scene.pick(ray_at_tree(-20.0));
    scene.advance(Duration::from_millis(1000));
    scene.pick(ray_at_tree(20.0));

    scene.advance(Duration::from_millis(1000));
    assert!(scene.tree_at_base_colors(left));
    assert!(all_white(&scene, right));

    scene.advance(Duration::from_millis(1000));
    assert!(scene.tree_at_base_colors(right));
}

#[test]
fn test_unregistered_tree_is_not_pickable() {
    let mut scene = TestScene::new();
    let tree = scene.spawn_tree_at(20.0, 0.0);
    scene
        .world_mut()
        .resource_mut::<crate::tree_placement::TreeIndex>()
        .trees
        .clear();
    scene.pick(ray_at_tree(20.0));
    assert!(scene.tree_at_base_colors(tree));
}
