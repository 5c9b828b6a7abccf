//! Meshes and materials for tree parts.
//!
//! `place_trees` spawns parts with only a `TreePart` and a `PartTint`. The
//! first frame they exist, `attach_part_meshes` gives each one the shared mesh
//! for its shape and a material of its own, so tinting one tree never touches
//! another. `sync_part_tints` mirrors later `PartTint` changes into those
//! materials.

use bevy::prelude::*;

use simulation::tree_placement::{PartShape, PartTint, TreePart};

/// One mesh per distinct part shape, shared by every tree.
#[derive(Resource, Default)]
pub struct PartMeshCache {
    entries: Vec<(PartShape, Handle<Mesh>)>,
}

impl PartMeshCache {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mesh for `shape`, building and caching it on first use.
    pub fn get_or_build(&mut self, shape: PartShape, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        if let Some((_, handle)) = self.entries.iter().find(|(s, _)| *s == shape) {
            return handle.clone();
        }
        let handle = meshes.add(part_mesh(shape));
        self.entries.push((shape, handle.clone()));
        handle
    }
}

/// Both shapes are centered on the part origin with the axis along +Y.
pub fn part_mesh(shape: PartShape) -> Mesh {
    match shape {
        PartShape::Cylinder { radius, height } => Mesh::from(Cylinder::new(radius, height)),
        PartShape::Cone { radius, height } => Mesh::from(Cone { radius, height }),
    }
}

pub fn part_material(tint: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: tint,
        perceptual_roughness: 0.8,
        ..default()
    }
}

pub fn attach_part_meshes(
    mut commands: Commands,
    parts: Query<(Entity, &TreePart, &PartTint), Added<TreePart>>,
    mut cache: ResMut<PartMeshCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, part, tint) in &parts {
        let mesh = cache.get_or_build(part.shape, &mut meshes);
        commands.entity(entity).insert((
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(part_material(tint.0))),
        ));
    }
}

pub fn sync_part_tints(
    parts: Query<(&PartTint, &MeshMaterial3d<StandardMaterial>), Changed<PartTint>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (tint, material) in &parts {
        if let Some(mat) = materials.get_mut(&material.0) {
            if mat.base_color != tint.0 {
                mat.base_color = tint.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::config::{FOLIAGE_COLOR, SNOW_COLOR};
    use simulation::tree_placement::{PartKind, TREE_RECIPE};

    fn material_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<PartMeshCache>()
            .add_systems(Update, (attach_part_meshes, sync_part_tints).chain());
        app
    }

    fn foliage_part() -> TreePart {
        let spec = TREE_RECIPE[1];
        TreePart {
            kind: spec.kind,
            shape: spec.shape,
        }
    }

    fn base_color_of(app: &App, entity: Entity) -> Color {
        let handle = &app
            .world()
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .expect("part should have a material")
            .0;
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .expect("material should exist")
            .base_color
    }

    #[test]
    fn test_cache_shares_meshes_per_shape() {
        let mut meshes = Assets::<Mesh>::default();
        let mut cache = PartMeshCache::default();
        for spec in TREE_RECIPE.iter().chain(TREE_RECIPE.iter()) {
            cache.get_or_build(spec.shape, &mut meshes);
        }
        assert_eq!(cache.len(), TREE_RECIPE.len());
        assert_eq!(meshes.len(), TREE_RECIPE.len());
    }

    #[test]
    fn test_new_part_gets_mesh_and_tinted_material() {
        let mut app = material_app();
        let part = app
            .world_mut()
            .spawn((foliage_part(), PartTint(FOLIAGE_COLOR)))
            .id();
        app.update();

        assert!(app.world().get::<Mesh3d>(part).is_some());
        assert_eq!(base_color_of(&app, part), FOLIAGE_COLOR);
    }

    #[test]
    fn test_tint_change_reaches_only_that_material() {
        let mut app = material_app();
        let a = app
            .world_mut()
            .spawn((foliage_part(), PartTint(FOLIAGE_COLOR)))
            .id();
        let b = app
            .world_mut()
            .spawn((foliage_part(), PartTint(FOLIAGE_COLOR)))
            .id();
        app.update();

        app.world_mut().get_mut::<PartTint>(a).expect("tint").0 = SNOW_COLOR;
        app.update();

        assert_eq!(base_color_of(&app, a), SNOW_COLOR);
        assert_eq!(base_color_of(&app, b), PartKind::Foliage { tier: 0 }.base_color());
    }
}
