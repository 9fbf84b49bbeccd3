mod components;
mod control;
mod forces;
mod galaxy;
mod integrator;
mod resources;
mod systems;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::control::ControlEvent;
use crate::resources::{RenderSettings, SimParams, SimRng, WINDOW_SIZE};
use crate::systems::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "N-body problem".into(),
                resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_SIZE),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<SimParams>()
        .init_resource::<RenderSettings>()
        .init_resource::<SimRng>()
        .add_message::<ControlEvent>()
        .add_systems(EguiPrimaryContextPass, ui_controls)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                collect_input,
                run_simulation_frame,
                sync_planet_transforms,
                sync_mouse_ball,
            )
                .chain(),
        )
        .run();
}
