use bevy::prelude::*;
use bevy::window::PresentMode;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Snowscape".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            // On the web the canvas follows its parent element's size.
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((simulation::SimulationPlugin, rendering::RenderingPlugin));

    app.run();
}
