//! Loads the centerpiece model and fits the exclusion zone to it.
//!
//! The scene waits in `SceneState::LoadingCenterpiece` until one of three
//! things happens: the model loads and its mesh bounds are known (the zone is
//! refitted to the footprint), loading fails (error logged, default radius
//! kept), or `SceneParams::centerpiece_timeout` passes (warning logged). Each
//! path moves to `SceneState::Ready`, which places the trees.

use std::time::Duration;

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use simulation::config::CENTERPIECE_SCALE;
use simulation::exclusion_zone::ExclusionZone;
use simulation::scene_params::SceneParams;
use simulation::SceneState;

/// Root of the spawned centerpiece scene.
#[derive(Component)]
pub struct Centerpiece;

/// The pending centerpiece load.
#[derive(Resource)]
pub struct CenterpieceLoad {
    pub scene: Handle<Scene>,
    pub started: Duration,
}

/// World-space box around every mesh of a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub min: Vec3,
    pub max: Vec3,
}

impl Footprint {
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

/// Corners of a local-space `Aabb` moved into world space.
fn world_corners(aabb: &Aabb, transform: &GlobalTransform) -> [Vec3; 8] {
    let center = Vec3::from(aabb.center);
    let half = Vec3::from(aabb.half_extents);
    let mut corners = [Vec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sign = Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        );
        *corner = transform.transform_point(center + half * sign);
    }
    corners
}

/// Union of the world-space boxes of every mesh bound given. `None` when there
/// are no bounds yet (scene not spawned, or bounds not computed).
pub fn footprint<'a>(
    bounds: impl IntoIterator<Item = (&'a Aabb, &'a GlobalTransform)>,
) -> Option<Footprint> {
    let mut footprint: Option<Footprint> = None;
    for (aabb, transform) in bounds {
        for corner in world_corners(aabb, transform) {
            match footprint.as_mut() {
                Some(fp) => fp.include(corner),
                None => {
                    footprint = Some(Footprint {
                        min: corner,
                        max: corner,
                    })
                }
            }
        }
    }
    footprint
}

pub fn load_centerpiece(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    params: Res<SceneParams>,
    zone: Res<ExclusionZone>,
    time: Res<Time>,
) {
    let scene = asset_server.load(
        bevy::gltf::GltfAssetLabel::Scene(0).from_asset(params.centerpiece_path.clone()),
    );
    commands.spawn((
        Centerpiece,
        SceneRoot(scene.clone()),
        Transform::from_xyz(zone.center_x, 0.0, zone.center_z)
            .with_scale(Vec3::splat(CENTERPIECE_SCALE)),
    ));
    commands.insert_resource(CenterpieceLoad {
        scene,
        started: time.elapsed(),
    });
    info!("Loading centerpiece {}", params.centerpiece_path);
}

#[allow(clippy::too_many_arguments)]
pub fn watch_centerpiece(
    load: Option<Res<CenterpieceLoad>>,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    params: Res<SceneParams>,
    roots: Query<Entity, With<Centerpiece>>,
    children: Query<&Children>,
    bounds: Query<(&Aabb, &GlobalTransform)>,
    mut zone: ResMut<ExclusionZone>,
    mut next_state: ResMut<NextState<SceneState>>,
) {
    let Some(load) = load else {
        return;
    };

    match asset_server.load_state(&load.scene) {
        LoadState::Loaded => {
            let measured = roots.iter().find_map(|root| {
                footprint(
                    children
                        .iter_descendants(root)
                        .filter_map(|entity| bounds.get(entity).ok()),
                )
            });
            if let Some(fp) = measured {
                let radius = zone.fit_to_footprint(fp.size());
                info!(
                    "Centerpiece loaded: footprint {:.2} x {:.2}, exclusion radius {:.2}",
                    fp.size().x,
                    fp.size().z,
                    radius
                );
                next_state.set(SceneState::Ready);
                return;
            }
        }
        LoadState::Failed(err) => {
            error!(
                "Failed to load centerpiece {}: {}; keeping exclusion radius {:.2}",
                params.centerpiece_path,
                err,
                zone.radius()
            );
            next_state.set(SceneState::Ready);
            return;
        }
        _ => {}
    }

    if time.elapsed().saturating_sub(load.started) >= params.centerpiece_timeout() {
        warn!(
            "Centerpiece {} not ready after {:.1}s; placing trees with radius {:.2}",
            params.centerpiece_path,
            params.centerpiece_timeout_secs,
            zone.radius()
        );
        next_state.set(SceneState::Ready);
    }
}
