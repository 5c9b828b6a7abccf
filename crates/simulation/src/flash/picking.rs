//! Ray hit-testing against tree parts.
//!
//! Each part is first tested against the axis-aligned box around its shape,
//! then against the shape itself: a capped cylinder for the trunk, a cone
//! with a closed base for foliage and cap. Trees are only ever translated and
//! scaled, so both solids stay upright in world space.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::tree_placement::{PartShape, TreePart};

/// Slack on height checks so rays grazing a rim still count.
const RIM_EPSILON: f32 = 1e-5;

/// One part in world space, tagged with its owning tree.
#[derive(Debug, Clone, Copy)]
pub struct PartBounds {
    pub tree: Entity,
    pub part: Entity,
    /// World-space center of the shape.
    pub center: Vec3,
    /// Shape with the tree and part scale applied.
    pub shape: PartShape,
}

impl PartBounds {
    pub fn new(
        tree: Entity,
        part: Entity,
        tree_tf: &Transform,
        part_tf: &Transform,
        tree_part: &TreePart,
    ) -> Self {
        let scale = (part_tf.scale * tree_tf.scale).abs();
        Self {
            tree,
            part,
            center: tree_tf.transform_point(part_tf.translation),
            shape: scaled_shape(tree_part.shape, scale),
        }
    }

    pub fn aabb(&self) -> Aabb3d {
        Aabb3d::new(self.center, self.shape.half_extents())
    }

    /// Distance along `ray` to the first point on the part's surface.
    pub fn ray_distance(&self, ray: Ray3d) -> Option<f32> {
        RayCast3d::from_ray(ray, f32::MAX).aabb_intersection_at(&self.aabb())?;
        shape_ray_distance(self.shape, ray.origin - self.center, *ray.direction)
    }
}

/// Nearest intersection along a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartHit {
    pub tree: Entity,
    pub part: Entity,
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
}

/// Radius follows the x scale, height the y scale.
fn scaled_shape(shape: PartShape, scale: Vec3) -> PartShape {
    match shape {
        PartShape::Cylinder { radius, height } => PartShape::Cylinder {
            radius: radius * scale.x,
            height: height * scale.y,
        },
        PartShape::Cone { radius, height } => PartShape::Cone {
            radius: radius * scale.x,
            height: height * scale.y,
        },
    }
}

/// World-space box of `part`, whose local transform is `part_tf`, on a tree at `tree_tf`.
pub fn part_bounds(tree_tf: &Transform, part_tf: &Transform, part: &TreePart) -> Aabb3d {
    PartBounds::new(Entity::PLACEHOLDER, Entity::PLACEHOLDER, tree_tf, part_tf, part).aabb()
}

/// Non-negative roots of `a t^2 + b t + c = 0`, smallest first.
fn quadratic_roots(a: f32, b: f32, c: f32) -> [Option<f32>; 2] {
    if a.abs() < f32::EPSILON {
        if b.abs() < f32::EPSILON {
            return [None, None];
        }
        return [Some(-c / b).filter(|t| *t >= 0.0), None];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return [None, None];
    }
    let sqrt = disc.sqrt();
    let (t0, t1) = ((-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a));
    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    [Some(lo).filter(|t| *t >= 0.0), Some(hi).filter(|t| *t >= 0.0)]
}

/// Ray parameter where a ray hits the horizontal disk of `radius` at height `y`.
fn disk_hit(origin: Vec3, dir: Vec3, y: f32, radius: f32) -> Option<f32> {
    if dir.y.abs() < f32::EPSILON {
        return None;
    }
    let t = (y - origin.y) / dir.y;
    if t < 0.0 {
        return None;
    }
    let p = origin + dir * t;
    (p.x * p.x + p.z * p.z <= radius * radius).then_some(t)
}

/// First hit of a ray against `shape` centered at the origin with its axis
/// along +Y. `origin` is relative to the shape center; `dir` is unit length.
pub fn shape_ray_distance(shape: PartShape, origin: Vec3, dir: Vec3) -> Option<f32> {
    let horizontal_b = 2.0 * (origin.x * dir.x + origin.z * dir.z);
    let horizontal_a = dir.x * dir.x + dir.z * dir.z;
    let horizontal_c = origin.x * origin.x + origin.z * origin.z;

    let mut best: Option<f32> = None;
    let mut keep = |t: f32| {
        if best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    match shape {
        PartShape::Cylinder { radius, height } => {
            let half = height * 0.5;
            let side = quadratic_roots(horizontal_a, horizontal_b, horizontal_c - radius * radius);
            for t in side.into_iter().flatten() {
                if (origin.y + dir.y * t).abs() <= half + RIM_EPSILON {
                    keep(t);
                }
            }
            for cap_y in [-half, half] {
                if let Some(t) = disk_hit(origin, dir, cap_y, radius) {
                    keep(t);
                }
            }
        }
        PartShape::Cone { radius, height } => {
            // Base at -half, apex at +half. Radius at height y is k * (half - y).
            let half = height * 0.5;
            if height <= 0.0 {
                return None;
            }
            let k = radius / height;
            let k2 = k * k;
            let q = half - origin.y;
            let side = quadratic_roots(
                horizontal_a - k2 * dir.y * dir.y,
                horizontal_b + 2.0 * k2 * q * dir.y,
                horizontal_c - k2 * q * q,
            );
            for t in side.into_iter().flatten() {
                let y = origin.y + dir.y * t;
                if y >= -half - RIM_EPSILON && y <= half + RIM_EPSILON {
                    keep(t);
                }
            }
            if let Some(t) = disk_hit(origin, dir, -half, radius) {
                keep(t);
            }
        }
    }
    best
}

/// The closest part whose surface the ray hits, if any.
pub fn nearest_part_hit(ray: Ray3d, parts: impl IntoIterator<Item = PartBounds>) -> Option<PartHit> {
    parts
        .into_iter()
        .filter_map(|b| {
            b.ray_distance(ray).map(|distance| PartHit {
                tree: b.tree,
                part: b.part,
                distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
