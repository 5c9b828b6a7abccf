//! Rejection sampling outside the exclusion zone.

use std::fmt;

use rand::Rng;

use super::types::{ExclusionZone, Placement, SampleBounds};

/// Uniform draws attempted before falling back to the farthest bound corner.
pub const MAX_REJECTION_ATTEMPTS: u32 = 256;

/// Errors from sampling a placement.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// Every point of the sampling bounds lies inside the exclusion zone.
    ZoneCoversBounds { radius: f32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ZoneCoversBounds { radius } => write!(
                f,
                "exclusion zone (radius {radius}) covers the whole sampling area"
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

impl ExclusionZone {
    /// Draw a point inside `bounds` at distance >= radius from the zone center.
    ///
    /// Uniform rejection sampling, capped at `MAX_REJECTION_ATTEMPTS`. If every
    /// draw lands inside the zone, the bound corner farthest from the center is
    /// returned; it is outside the zone whenever any point of the bounds is.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        bounds: &SampleBounds,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        let size = bounds.size();
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let x = bounds.min.x + rng.gen::<f32>() * size.x;
            let z = bounds.min.y + rng.gen::<f32>() * size.y;
            if !self.contains(x, z) {
                return Ok(Placement { x, z });
            }
        }

        let corner = self.farthest_corner(bounds);
        if self.contains(corner.x, corner.y) {
            return Err(PlacementError::ZoneCoversBounds {
                radius: self.radius(),
            });
        }
        Ok(Placement {
            x: corner.x,
            z: corner.y,
        })
    }

    /// The corner of `bounds` with the greatest distance from the zone center.
    pub fn farthest_corner(&self, bounds: &SampleBounds) -> bevy::math::Vec2 {
        let center = self.center();
        bounds
            .corners()
            .into_iter()
            .fold(bounds.min, |best, c| {
                if c.distance_squared(center) > best.distance_squared(center) {
                    c
                } else {
                    best
                }
            })
    }
}
