use bevy::prelude::*;

use simulation::config::{GROUND_SIZE, SKY_COLOR, SNOW_COLOR, SUNLIGHT_COLOR};

/// Position of the sun; it shines toward the origin.
const SUN_POSITION: Vec3 = Vec3::new(30.0, 50.0, -10.0);

#[derive(Component)]
pub struct Ground;

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ClearColor(SKY_COLOR));

    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    commands.spawn((
        DirectionalLight {
            color: SUNLIGHT_COLOR,
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Flat snow-covered ground centered on the origin.
pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SNOW_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::IDENTITY,
    ));
}
