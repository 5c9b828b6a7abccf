//! Snowfall particle storage.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    SNOW_GROUND_Y, SNOW_HALF_EXTENT, SNOW_MAX_FALL_SPEED, SNOW_RESPAWN_MAX_Y, SNOW_RESPAWN_MIN_Y,
};

/// Particle state as two parallel arrays.
///
/// `positions[i]` and `velocities[i]` always describe the same flake; the
/// arrays never change length and flakes are never reordered.
#[derive(Resource, Debug, Clone)]
pub struct Snowfall {
    positions: Vec<[f32; 3]>,
    velocities: Vec<[f32; 3]>,
    dirty: bool,
}

/// Height a recycled flake restarts from, uniform in `[SNOW_RESPAWN_MIN_Y, SNOW_RESPAWN_MAX_Y)`.
pub fn respawn_height<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(SNOW_RESPAWN_MIN_Y..SNOW_RESPAWN_MAX_Y)
}

impl Snowfall {
    /// Scatter `count` flakes over the ground area at random heights, each
    /// falling straight down at a random fraction of `SNOW_MAX_FALL_SPEED`.
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let span = SNOW_HALF_EXTENT * 2.0;
        for _ in 0..count {
            positions.push([
                rng.gen::<f32>() * span - SNOW_HALF_EXTENT,
                respawn_height(rng),
                rng.gen::<f32>() * span - SNOW_HALF_EXTENT,
            ]);
            velocities.push([0.0, -rng.gen::<f32>() * SNOW_MAX_FALL_SPEED, 0.0]);
        }
        Self {
            positions,
            velocities,
            dirty: true,
        }
    }

    /// Build from explicit `(position, velocity)` pairs.
    pub fn from_particles(particles: impl IntoIterator<Item = ([f32; 3], [f32; 3])>) -> Self {
        let (positions, velocities) = particles.into_iter().unzip();
        Self {
            positions,
            velocities,
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn velocities(&self) -> &[[f32; 3]] {
        &self.velocities
    }

    /// True if positions changed since the last `take_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Advance every flake by its velocity, once, in index order. Flakes that
    /// end up below the ground get a new height; their x and z are kept.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (pos, vel) in self.positions.iter_mut().zip(&self.velocities) {
            pos[0] += vel[0];
            pos[1] += vel[1];
            pos[2] += vel[2];
            if pos[1] < SNOW_GROUND_Y {
                pos[1] = respawn_height(rng);
            }
        }
        self.dirty = true;
    }
}
