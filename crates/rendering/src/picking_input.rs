use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::flash::PickRequest;

use crate::camera::LeftClickDrag;

/// Left click (press and release without dragging): cast a ray from the
/// camera through the cursor and hand it to the simulation as a `PickRequest`.
///
/// Runs before `camera_left_drag`, which clears the drag flag on release.
pub fn emit_pick_requests(
    buttons: Res<ButtonInput<MouseButton>>,
    left_drag: Res<LeftClickDrag>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut picks: EventWriter<PickRequest>,
) {
    if !buttons.just_released(MouseButton::Left) || left_drag.is_dragging {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };

    if let Ok(ray) = camera.viewport_to_world(cam_transform, cursor) {
        picks.send(PickRequest { ray });
    }
}
