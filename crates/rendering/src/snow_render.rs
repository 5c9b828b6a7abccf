//! Snow drawn as one mesh of camera-facing quads, rebuilt from `Snowfall`
//! whenever the particles move or the camera turns.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;

use simulation::snowfall::Snowfall;

/// Side length of a single flake quad.
pub const SNOWFLAKE_SIZE: f32 = 0.5;
const SNOW_OPACITY: f32 = 0.8;

#[derive(Component)]
pub struct SnowMesh;

/// Vertex and index data for a batch of billboards.
#[derive(Debug, Default)]
pub struct BillboardBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

/// One quad per center, spanning `right` and `up` and facing `right x up`.
pub fn billboard_quads(centers: &[[f32; 3]], right: Vec3, up: Vec3, size: f32) -> BillboardBuffers {
    let half_right = right * (size * 0.5);
    let half_up = up * (size * 0.5);
    let normal = right.cross(up).normalize_or_zero().to_array();
    let corners = [
        -half_right - half_up,
        half_right - half_up,
        half_right + half_up,
        -half_right + half_up,
    ];

    let mut buffers = BillboardBuffers {
        positions: Vec::with_capacity(centers.len() * 4),
        normals: Vec::with_capacity(centers.len() * 4),
        uvs: Vec::with_capacity(centers.len() * 4),
        indices: Vec::with_capacity(centers.len() * 6),
    };

    for (i, center) in centers.iter().enumerate() {
        let center = Vec3::from_array(*center);
        for corner in corners {
            buffers.positions.push((center + corner).to_array());
            buffers.normals.push(normal);
        }
        buffers
            .uvs
            .extend_from_slice(&[[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
        let base = (i * 4) as u32;
        buffers
            .indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    buffers
}

fn write_billboards(mesh: &mut Mesh, buffers: BillboardBuffers) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, buffers.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, buffers.normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, buffers.uvs);
    mesh.insert_indices(Indices::U32(buffers.indices));
}

/// Camera right and up axes, or the world axes before a camera exists.
fn camera_basis(camera: Option<&GlobalTransform>) -> (Vec3, Vec3) {
    match camera {
        Some(transform) => (*transform.right(), *transform.up()),
        None => (Vec3::X, Vec3::Y),
    }
}

pub fn spawn_snow_mesh(
    mut commands: Commands,
    snowfall: Res<Snowfall>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let (right, up) = camera_basis(None);
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    write_billboards(
        &mut mesh,
        billboard_quads(snowfall.positions(), right, up, SNOWFLAKE_SIZE),
    );

    commands.spawn((
        SnowMesh,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, SNOW_OPACITY),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::IDENTITY,
        // Vertices move every frame, so the bounds computed at spawn are stale.
        NoFrustumCulling,
    ));
}

pub fn sync_snow_mesh(
    mut snowfall: ResMut<Snowfall>,
    cameras: Query<Ref<GlobalTransform>, With<Camera3d>>,
    snow: Query<&Mesh3d, With<SnowMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let camera = cameras.get_single().ok();
    let camera_moved = camera.as_ref().is_some_and(|t| t.is_changed());
    let particles_moved = snowfall.take_dirty();
    if !particles_moved && !camera_moved {
        return;
    }

    let (right, up) = camera_basis(camera.as_deref());
    for mesh3d in &snow {
        if let Some(mesh) = meshes.get_mut(&mesh3d.0) {
            write_billboards(
                mesh,
                billboard_quads(snowfall.positions(), right, up, SNOWFLAKE_SIZE),
            );
        }
    }
}
