use bevy::input::ButtonState;
use bevy::prelude::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowEvent};
use bevy_egui::input::EguiWantsInput;

use crate::components::*;
use crate::control::{ControlEvent, Flow, advance_frame};
use crate::galaxy::Galaxy;
use crate::resources::*;

/// Maps a normalized galaxy position onto world space for a window of `size`.
pub fn to_world(position: Vec2, size: Vec2) -> Vec2 {
    (position - Vec2::splat(0.5)) * size
}

/// Converts a window cursor position (pixels, origin top-left) into
/// normalized coordinates with the origin at the bottom-left.
pub fn normalize_cursor(cursor: Vec2, size: Vec2) -> Vec2 {
    vec2(cursor.x / size.x, 1.0 - cursor.y / size.y)
}

/// Keyboard bindings. Anything not listed is ignored.
pub fn key_command(key: KeyCode) -> Option<ControlEvent> {
    match key {
        KeyCode::Space => Some(ControlEvent::TogglePause),
        KeyCode::KeyR => Some(ControlEvent::Reset),
        KeyCode::Escape => Some(ControlEvent::Exit),
        _ => None,
    }
}

/// Mouse bindings: left press grabs at the cursor, right press lets go.
pub fn button_command(button: MouseButton, cursor: Option<Vec2>) -> Option<ControlEvent> {
    match button {
        MouseButton::Left => cursor.map(|cursor| ControlEvent::DragStart { cursor }),
        MouseButton::Right => Some(ControlEvent::DragEnd),
        _ => None,
    }
}

/// Seeds the galaxy and spawns one circle per planet plus the drag indicator.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    params: Res<SimParams>,
    render: Res<RenderSettings>,
    mut rng: ResMut<SimRng>,
) {
    commands.spawn(Camera2d);

    let galaxy = Galaxy::new(&params, &mut rng.0);
    info!(
        planets = galaxy.planet_count(),
        dt = params.dt(),
        substeps = params.substeps,
        "galaxy seeded"
    );

    let mesh_handle = meshes.add(Circle::new(render.planet_radius));
    let material = materials.add(ColorMaterial::from(render.planet_color));
    for i in 0..galaxy.planet_count() {
        commands.spawn((
            Mesh2d(mesh_handle.clone()),
            MeshMaterial2d(material.clone()),
            Transform::default(),
            Planet(i),
        ));
    }

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(render.mouse_ball_radius))),
        MeshMaterial2d(materials.add(ColorMaterial::from(render.mouse_ball_color))),
        Transform::from_xyz(0.0, 0.0, 1.0),
        Visibility::Hidden,
        MouseBall,
    ));

    commands.insert_resource(galaxy);
}

/// Turns raw window input into [`ControlEvent`]s in the order the window
/// reported it.
///
/// The cursor is tracked from `CursorMoved` so a drag starts where the
/// pointer was when the button went down, not where it ends the frame.
pub fn collect_input(
    mut window_events: MessageReader<WindowEvent>,
    windows: Query<&Window, With<PrimaryWindow>>,
    egui_input: Option<Res<EguiWantsInput>>,
    mut last_cursor: Local<Option<Vec2>>,
    mut controls: MessageWriter<ControlEvent>,
) {
    let window = windows.single().ok();
    let size = window.map(|window| vec2(window.width(), window.height()));
    if last_cursor.is_none() {
        *last_cursor = window.and_then(Window::cursor_position);
    }

    let keyboard_blocked = egui_input
        .as_ref()
        .is_some_and(|egui| egui.wants_any_keyboard_input());
    let pointer_blocked = egui_input
        .as_ref()
        .is_some_and(|egui| egui.wants_any_pointer_input());

    for event in window_events.read() {
        match event {
            WindowEvent::CursorMoved(moved) => *last_cursor = Some(moved.position),
            WindowEvent::CursorLeft(_) => *last_cursor = None,
            WindowEvent::KeyboardInput(input) => {
                if keyboard_blocked || input.state != ButtonState::Pressed || input.repeat {
                    continue;
                }
                if let Some(command) = key_command(input.key_code) {
                    controls.write(command);
                }
            }
            WindowEvent::MouseButtonInput(input) => {
                if input.state != ButtonState::Pressed {
                    continue;
                }
                if pointer_blocked {
                    debug!(button = ?input.button, "pointer captured by ui, ignoring");
                    continue;
                }
                let cursor = (*last_cursor)
                    .zip(size)
                    .map(|(cursor, size)| normalize_cursor(cursor, size));
                if let Some(command) = button_command(input.button, cursor) {
                    controls.write(command);
                }
            }
            _ => {}
        }
    }
}

/// Applies this frame's commands and steps the physics unless paused.
pub fn run_simulation_frame(
    mut controls: MessageReader<ControlEvent>,
    mut galaxy: ResMut<Galaxy>,
    params: Res<SimParams>,
    mut rng: ResMut<SimRng>,
    mut exit: MessageWriter<AppExit>,
) {
    let flow = advance_frame(&mut galaxy, &params, &mut rng.0, controls.read().copied());
    if flow == Flow::Exit {
        exit.write(AppExit::Success);
    }
}

/// Copies planet positions into their render transforms.
pub fn sync_planet_transforms(
    galaxy: Res<Galaxy>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut planets: Query<(&Planet, &mut Transform)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = vec2(window.width(), window.height());

    for (planet, mut transform) in planets.iter_mut() {
        transform.translation = to_world(galaxy.position[**planet], size).extend(0.0);
    }
}

/// Shows the drag indicator at the mouse ball while a drag is active.
pub fn sync_mouse_ball(
    galaxy: Res<Galaxy>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut ball: Query<(&mut Transform, &mut Visibility), With<MouseBall>>,
) {
    let Ok((mut transform, mut visibility)) = ball.single_mut() else {
        return;
    };

    if !galaxy.dragging {
        *visibility = Visibility::Hidden;
        return;
    }

    if let Ok(window) = windows.single() {
        let size = vec2(window.width(), window.height());
        transform.translation = to_world(galaxy.mouse_position, size).extend(1.0);
        *visibility = Visibility::Visible;
    }
}
