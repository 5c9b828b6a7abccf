//! Orbit camera around the centerpiece.
//!
//! Input systems write to `OrbitTarget` (the desired pose). Each frame
//! `smooth_orbit_camera` eases `OrbitCamera` toward it with
//!
//!   `value += (target - value) * (1 - exp(-speed * dt))`
//!
//! and `apply_orbit_camera` writes the result to the camera `Transform`.
//!
//! Left drag orbits, right or middle drag pans the focus along the ground and
//! the wheel zooms. A left press that never moves past `LEFT_DRAG_THRESHOLD`
//! pixels is a click and is left to the picker.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use simulation::config::{GROUND_SIZE, SKY_COLOR};

/// Where the camera starts, looking at the origin.
pub const START_POSITION: Vec3 = Vec3::new(20.0, 10.0, 30.0);

const FOV_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;
const FOG_START: f32 = 10.0;
const FOG_END: f32 = 100.0;

const ORBIT_SENSITIVITY: f32 = 0.005;
/// Focus movement per pixel of drag, per unit of camera distance.
const PAN_SENSITIVITY: f32 = 0.002;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 90.0;
const MIN_PITCH: f32 = 2.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
/// Easing speed; at 60 fps this closes about a quarter of the gap per frame.
const SMOOTHING_SPEED: f32 = 17.0;
const EPSILON: f32 = 0.0001;

pub const LEFT_DRAG_THRESHOLD: f32 = 5.0;

/// Orbital camera model: the camera orbits a focus point on the ground.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(START_POSITION, Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Orbit pose that places the camera at `position` looking at `focus`.
    pub fn looking_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let horizontal = Vec2::new(offset.x, offset.z).length();
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal).clamp(MIN_PITCH, MAX_PITCH),
            distance,
        }
    }
}

/// The pose input systems steer toward. `OrbitCamera` follows it with damping.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitTarget {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl From<&OrbitCamera> for OrbitTarget {
    fn from(orbit: &OrbitCamera) -> Self {
        Self {
            focus: orbit.focus,
            yaw: orbit.yaw,
            pitch: orbit.pitch,
            distance: orbit.distance,
        }
    }
}

impl Default for OrbitTarget {
    fn default() -> Self {
        Self::from(&OrbitCamera::default())
    }
}

/// Right- or middle-button pan drag.
#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial
/// press, it becomes an orbit and the release is not a pick.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once the mouse has moved beyond the threshold.
    pub is_dragging: bool,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
        DistanceFog {
            color: SKY_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
    commands.insert_resource(OrbitTarget::from(&orbit));
    commands.insert_resource(orbit);
}

fn clamp_focus(focus: &mut Vec3) {
    let limit = GROUND_SIZE / 2.0;
    focus.x = focus.x.clamp(-limit, limit);
    focus.z = focus.z.clamp(-limit, limit);
}

/// Camera position and look-at point for an orbit pose.
pub fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    (orbit.focus + Vec3::new(x, y, z), orbit.focus)
}

/// Move `focus` along the ground by a screen-space drag, relative to `yaw`.
fn pan_focus(focus: &mut Vec3, yaw: f32, delta: Vec2, scale: f32) {
    let cos_yaw = yaw.cos();
    let sin_yaw = yaw.sin();
    let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
    let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
    focus.x += world_x * scale;
    focus.z += world_z * scale;
    clamp_focus(focus);
}

#[inline]
fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

fn ease(value: &mut f32, target: f32, factor: f32) {
    let delta = target - *value;
    if delta.abs() > EPSILON {
        *value += delta * factor;
    } else {
        *value = target;
    }
}

/// Ease every field of `orbit` toward `target` by `factor` in `[0, 1]`.
pub fn ease_toward(orbit: &mut OrbitCamera, target: &OrbitTarget, factor: f32) {
    let focus_delta = target.focus - orbit.focus;
    if focus_delta.length_squared() > EPSILON * EPSILON {
        orbit.focus += focus_delta * factor;
    } else {
        orbit.focus = target.focus;
    }
    ease(&mut orbit.yaw, target.yaw, factor);
    ease(&mut orbit.pitch, target.pitch, factor);
    ease(&mut orbit.distance, target.distance, factor);
}

/// Left-mouse drag: orbit (with threshold to distinguish from clicks).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut left_drag: ResMut<LeftClickDrag>,
    mut target: ResMut<OrbitTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging
                && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD
            {
                left_drag.is_dragging = true;
                left_drag.last_pos = pos;
            }

            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                target.yaw -= delta.x * ORBIT_SENSITIVITY;
                target.pitch =
                    (target.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
                left_drag.last_pos = pos;
            }
        }
    }
}

/// Right- or middle-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraDrag>,
    mut target: ResMut<OrbitTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let pan_buttons = [MouseButton::Right, MouseButton::Middle];

    if buttons.any_just_pressed(pan_buttons) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if !buttons.any_pressed(pan_buttons) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            let scale = target.distance * PAN_SENSITIVITY;
            let yaw = target.yaw;
            pan_focus(&mut target.focus, yaw, delta, scale);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut target: ResMut<OrbitTarget>) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        target.distance = (target.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// System: ease `OrbitCamera` toward `OrbitTarget`.
pub fn smooth_orbit_camera(
    target: Res<OrbitTarget>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let mut next = *orbit;
    ease_toward(&mut next, &target, exp_lerp_factor(SMOOTHING_SPEED, dt));
    orbit.set_if_neq(next);
}

/// System: apply OrbitCamera state to the actual camera Transform.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}
