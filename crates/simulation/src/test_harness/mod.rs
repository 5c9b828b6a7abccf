//! # TestScene: headless integration test harness for Snowscape
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so tests can drive the scene
//! without a window, renderer or asset server. The clock only moves when a
//! test calls [`TestScene::advance`], which makes flash deadlines exact.

mod queries;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::exclusion_zone::{ExclusionZone, Placement};
use crate::flash::PickRequest;
use crate::scene_params::SceneParams;
use crate::scene_state::SceneState;
use crate::tree_placement::{spawn_tree, TreeIndex};
use crate::SimulationPlugin;

/// Largest clock step per frame; stays under `Time<Virtual>`'s max delta.
const MAX_STEP: Duration = Duration::from_millis(100);

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default params, scene still waiting for the centerpiece (no trees yet).
    pub fn new() -> Self {
        Self::with_params(SceneParams::default())
    }

    /// Build with explicit params. Inserted before the plugin so the
    /// environment is never consulted.
    pub fn with_params(params: SceneParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern: consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Replace the exclusion zone. Call before [`TestScene::ready`].
    pub fn with_zone(mut self, zone: ExclusionZone) -> Self {
        self.app.world_mut().insert_resource(zone);
        self
    }

    /// Enter `SceneState::Ready`, which places the trees.
    pub fn ready(mut self) -> Self {
        self.set_state(SceneState::Ready);
        self
    }

    /// Spawn a single tree at `(x, z)` and register it, bypassing the sampler.
    pub fn with_tree_at(mut self, x: f32, z: f32) -> Self {
        self.spawn_tree_at(x, z);
        self
    }

    // -----------------------------------------------------------------------
    // Driving the app
    // -----------------------------------------------------------------------

    pub fn set_state(&mut self, state: SceneState) {
        self.app
            .world_mut()
            .resource_mut::<NextState<SceneState>>()
            .set(state);
        self.update();
    }

    /// Spawn and register one tree, returning its root entity.
    pub fn spawn_tree_at(&mut self, x: f32, z: f32) -> Entity {
        let world = self.app.world_mut();
        let tree = {
            let mut commands = world.commands();
            spawn_tree(&mut commands, Placement { x, z })
        };
        world.flush();
        world.resource_mut::<TreeIndex>().trees.push(tree);
        tree
    }

    /// Run one frame without moving the clock.
    pub fn update(&mut self) {
        self.set_step(Duration::ZERO);
        self.app.update();
    }

    /// Run `n` frames without moving the clock.
    pub fn frames(&mut self, n: u32) {
        for _ in 0..n {
            self.update();
        }
    }

    /// Move the scene clock forward by `duration`, one frame per `MAX_STEP`.
    pub fn advance(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let step = remaining.min(MAX_STEP);
            self.set_step(step);
            self.app.update();
            remaining -= step;
        }
        self.set_step(Duration::ZERO);
    }

    /// Queue a pick ray and run one frame so it is resolved.
    pub fn pick(&mut self, ray: Ray3d) {
        self.app.world_mut().send_event(PickRequest { ray });
        self.update();
    }

    fn set_step(&mut self, step: Duration) {
        self.app
            .world_mut()
            .insert_resource(TimeUpdateStrategy::ManualDuration(step));
    }

    // -----------------------------------------------------------------------
    // World access
    // -----------------------------------------------------------------------

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }
}
