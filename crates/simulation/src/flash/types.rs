//! Flash state and interaction events.

use std::time::Duration;

use bevy::prelude::*;

/// Per-tree highlight state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashState {
    #[default]
    Normal,
    /// White until the scene clock reaches `until`.
    Flashed { until: Duration },
}

impl FlashState {
    /// State after a hit at `now`. Any pending deadline is replaced.
    pub fn flashed_at(now: Duration, duration: Duration) -> Self {
        FlashState::Flashed {
            until: now + duration,
        }
    }

    pub fn is_flashed(&self) -> bool {
        matches!(self, FlashState::Flashed { .. })
    }

    /// True if flashed and the deadline has been reached.
    pub fn is_expired(&self, now: Duration) -> bool {
        matches!(*self, FlashState::Flashed { until } if now >= until)
    }
}

/// A click turned into a world-space ray by the rendering side.
#[derive(Event, Debug, Clone, Copy)]
pub struct PickRequest {
    pub ray: Ray3d,
}

/// A tree was hit and turned white.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeFlashed {
    pub tree: Entity,
}

/// A flashed tree returned to its base colors.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeReverted {
    pub tree: Entity,
}
