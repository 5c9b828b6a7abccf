//! Per-frame ordering of scene logic via `SystemSet` phases.
//!
//! ```text
//! Snowfall  →  Interaction  →  Visual
//! ```
//!
//! * **Snowfall** – particle recycling. Writes `Snowfall` only.
//! * **Interaction** – flash reversion followed by pick resolution. Both write
//!   `PartTint`, so they run chained: an expiry and a new hit on the same tree
//!   in one frame always end with the tree flashed.
//! * **Visual** – rendering-side sync (snow mesh, material tints, camera). Reads
//!   the output of the earlier phases in the same frame.

use bevy::prelude::*;

/// Ordered phases for scene systems running in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneUpdateSet {
    /// Particle recycling.
    Snowfall,
    /// Flash reversion and pick resolution.
    Interaction,
    /// Rendering sync that consumes this frame's state.
    Visual,
}

pub struct SceneSetsPlugin;

impl Plugin for SceneSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SceneUpdateSet::Snowfall,
                SceneUpdateSet::Interaction,
                SceneUpdateSet::Visual,
            )
                .chain(),
        );
    }
}
