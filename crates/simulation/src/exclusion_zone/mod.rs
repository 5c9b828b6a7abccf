//! Exclusion zone around the centerpiece and the sampler that scatters
//! points outside it.
//!
//! The `ExclusionZone` resource is a disk on the ground plane reserved for the
//! centerpiece model. Its radius starts at `DEFAULT_EXCLUSION_RADIUS` and is
//! refitted once from the model's footprint. `ExclusionZone::sample` draws
//! uniform points in a `SampleBounds` square that lie outside the disk.

mod sampling;
pub mod types;

pub use sampling::{PlacementError, MAX_REJECTION_ATTEMPTS};
pub use types::{ExclusionZone, Placement, SampleBounds};

use bevy::prelude::*;

pub struct ExclusionZonePlugin;

impl Plugin for ExclusionZonePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExclusionZone>();
    }
}
