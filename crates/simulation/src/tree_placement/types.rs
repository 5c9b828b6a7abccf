//! Tree types, recipe and resources.

use bevy::prelude::*;

use crate::config::{FOLIAGE_COLOR, SNOW_COLOR, TRUNK_COLOR};

// =============================================================================
// Part description
// =============================================================================

/// Structural role of a tree part, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Trunk,
    /// Foliage cone; tier 0 is the widest, at the bottom.
    Foliage { tier: u8 },
    /// Snow on top of the crown.
    Cap,
}

impl PartKind {
    /// Color the part has when the tree is not flashed.
    pub fn base_color(self) -> Color {
        match self {
            PartKind::Trunk => TRUNK_COLOR,
            PartKind::Foliage { .. } => FOLIAGE_COLOR,
            PartKind::Cap => SNOW_COLOR,
        }
    }

    pub fn is_foliage(self) -> bool {
        matches!(self, PartKind::Foliage { .. })
    }
}

/// Solid used to mesh and hit-test a part. Both shapes are centered on the
/// part origin with their axis along +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32 },
}

impl PartShape {
    /// Half extents of the axis-aligned box that bounds the shape.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            PartShape::Cylinder { radius, height } | PartShape::Cone { radius, height } => {
                Vec3::new(radius, height * 0.5, radius)
            }
        }
    }
}

/// One entry of the tree recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSpec {
    pub kind: PartKind,
    pub shape: PartShape,
    /// Height of the part center above the tree origin.
    pub center_y: f32,
}

/// Number of stacked foliage cones per tree.
pub const FOLIAGE_TIERS: usize = 3;

/// Every tree is built from exactly these parts, bottom to top.
pub const TREE_RECIPE: [PartSpec; 2 + FOLIAGE_TIERS] = [
    PartSpec {
        kind: PartKind::Trunk,
        shape: PartShape::Cylinder {
            radius: 0.5,
            height: 5.0,
        },
        center_y: 2.5,
    },
    PartSpec {
        kind: PartKind::Foliage { tier: 0 },
        shape: PartShape::Cone {
            radius: 3.0,
            height: 4.0,
        },
        center_y: 5.0,
    },
    PartSpec {
        kind: PartKind::Foliage { tier: 1 },
        shape: PartShape::Cone {
            radius: 2.0,
            height: 4.0,
        },
        center_y: 7.0,
    },
    PartSpec {
        kind: PartKind::Foliage { tier: 2 },
        shape: PartShape::Cone {
            radius: 1.0,
            height: 4.0,
        },
        center_y: 9.0,
    },
    PartSpec {
        kind: PartKind::Cap,
        shape: PartShape::Cone {
            radius: 2.5,
            height: 1.0,
        },
        center_y: 9.0,
    },
];

// =============================================================================
// Components
// =============================================================================

/// Root of a compound tree. Its children are the `TreePart`s.
#[derive(Component, Debug, Default)]
pub struct Tree;

/// A single mesh-bearing part of a tree.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TreePart {
    pub kind: PartKind,
    pub shape: PartShape,
}

/// Current display color of a part. The rendering crate mirrors changes into
/// the part's material.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PartTint(pub Color);

// =============================================================================
// Resources
// =============================================================================

/// Every placed tree, in creation order. Hit-testing iterates this list.
#[derive(Resource, Debug, Default)]
pub struct TreeIndex {
    pub trees: Vec<Entity>,
}

impl TreeIndex {
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
