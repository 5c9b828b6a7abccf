//! Exclusion zone types.

use bevy::prelude::*;

use crate::config::{DEFAULT_EXCLUSION_RADIUS, EXCLUSION_MARGIN};

/// Disk on the ground (XZ) plane in which no tree may be placed.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    pub center_x: f32,
    pub center_z: f32,
    /// Always >= 0; only changed through [`ExclusionZone::set_radius`].
    radius: f32,
}

impl Default for ExclusionZone {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_EXCLUSION_RADIUS)
    }
}

impl ExclusionZone {
    /// Negative or NaN radii are clamped to 0.
    pub fn new(center_x: f32, center_z: f32, radius: f32) -> Self {
        let mut zone = Self {
            center_x,
            center_z,
            radius: 0.0,
        };
        zone.set_radius(radius);
        zone
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = if radius.is_nan() { 0.0 } else { radius.max(0.0) };
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_z)
    }

    /// Euclidean distance on the ground plane from the zone center.
    #[inline]
    pub fn distance_to(&self, x: f32, z: f32) -> f32 {
        let dx = x - self.center_x;
        let dz = z - self.center_z;
        (dx * dx + dz * dz).sqrt()
    }

    /// True if `(x, z)` lies strictly inside the disk. Points on the rim are outside.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        self.distance_to(x, z) < self.radius
    }

    /// Refit the radius to a centerpiece footprint of the given world-space
    /// size: half the larger horizontal extent plus `EXCLUSION_MARGIN`.
    /// Returns the new radius.
    pub fn fit_to_footprint(&mut self, size: Vec3) -> f32 {
        self.set_radius(size.x.max(size.z) / 2.0 + EXCLUSION_MARGIN);
        self.radius
    }
}

/// Axis-aligned square (or rectangle) on the ground plane that samples are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl SampleBounds {
    /// Square `[-half_extent, half_extent]` on both axes.
    pub fn square(half_extent: f32) -> Self {
        let h = half_extent.abs();
        Self {
            min: Vec2::splat(-h),
            max: Vec2::splat(h),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// A sampled ground position for one tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub z: f32,
}

impl Placement {
    /// World translation on the ground plane (y = 0).
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }
}
