use bevy::prelude::*;

/// Half-extent of the square in which trees are scattered (`[-40, 40]`).
pub const PLACEMENT_HALF_EXTENT: f32 = 40.0;
/// Side length of the ground plane.
pub const GROUND_SIZE: f32 = 100.0;

pub const TREE_COUNT: usize = 30;
pub const PARTICLE_COUNT: usize = 2000;

/// Exclusion radius used until the centerpiece footprint is known (or if it never loads).
pub const DEFAULT_EXCLUSION_RADIUS: f32 = 10.0;
/// Clearance added around the centerpiece footprint when fitting the exclusion zone.
pub const EXCLUSION_MARGIN: f32 = 2.0;
/// Uniform scale applied to the centerpiece model.
pub const CENTERPIECE_SCALE: f32 = 5.0;

/// Snow particles spawn uniformly in `[-SNOW_HALF_EXTENT, SNOW_HALF_EXTENT)` on x and z.
pub const SNOW_HALF_EXTENT: f32 = 50.0;
/// Height below which a flake is recycled.
pub const SNOW_GROUND_Y: f32 = 0.0;
/// Respawn heights are drawn from `[SNOW_RESPAWN_MIN_Y, SNOW_RESPAWN_MAX_Y)`.
pub const SNOW_RESPAWN_MIN_Y: f32 = 10.0;
pub const SNOW_RESPAWN_MAX_Y: f32 = 60.0;
/// Fastest per-frame fall speed; each flake falls at a random fraction of this.
pub const SNOW_MAX_FALL_SPEED: f32 = 0.2;

/// How long a clicked tree stays white before reverting, in milliseconds.
pub const FLASH_DURATION_MS: u64 = 2000;

/// `#8b5a2b`
pub const TRUNK_COLOR: Color = Color::srgb(0.545, 0.353, 0.169);
/// `#228b22`
pub const FOLIAGE_COLOR: Color = Color::srgb(0.133, 0.545, 0.133);
pub const SNOW_COLOR: Color = Color::WHITE;
/// `#87ceeb`
pub const SKY_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);
/// `#fff8e1`
pub const SUNLIGHT_COLOR: Color = Color::srgb(1.0, 0.973, 0.882);
