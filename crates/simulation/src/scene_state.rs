//! Scene setup state machine.
//!
//! Tree placement depends on the exclusion zone, and the zone only reaches
//! its final radius once the centerpiece model has resolved (loaded, failed
//! or timed out). [`SceneState`] makes that dependency explicit: placement
//! runs on `OnEnter(SceneState::Ready)`.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneState {
    /// Waiting for the centerpiece to load; the exclusion zone may still change.
    #[default]
    LoadingCenterpiece,
    /// The exclusion zone is final and the scene is populated.
    Ready,
}
