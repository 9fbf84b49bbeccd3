use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::control::ControlEvent;
use crate::galaxy::Galaxy;
use crate::resources::SimParams;

pub fn ui_controls(
    mut contexts: EguiContexts,
    galaxy: Res<Galaxy>,
    params: Res<SimParams>,
    mut frames_rendered: Local<usize>,
    mut controls: MessageWriter<ControlEvent>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Simulation")
            .default_pos(egui::pos2(10.0, 10.0))
            .max_size([260.0, 240.0])
            .show(ctx, |ui| {
                ui.heading("Galaxy");
                ui.label(format!("Planets: {}", galaxy.planet_count()));
                ui.label(if galaxy.paused { "Paused" } else { "Running" });
                if galaxy.dragging {
                    ui.label(format!(
                        "Dragging at ({:.2}, {:.2})",
                        galaxy.mouse_position.x, galaxy.mouse_position.y
                    ));
                }
                ui.label(format!("Time: {:.4}", galaxy.time));
                ui.label(format!("Kinetic energy: {:.1}", galaxy.kinetic_energy(&params)));
                let momentum = galaxy.total_momentum(&params);
                ui.label(format!("Momentum: ({:.3}, {:.3})", momentum.x, momentum.y));

                ui.horizontal(|ui| {
                    let pause_label = if galaxy.paused { "Resume" } else { "Pause" };
                    if ui.button(pause_label).clicked() {
                        controls.write(ControlEvent::TogglePause);
                    }
                    if ui.button("Reset").clicked() {
                        controls.write(ControlEvent::Reset);
                    }
                });

                ui.separator();
                ui.heading("Controls");
                ui.label("Pause: Space");
                ui.label("Reset: R");
                ui.label("Drag: Left Click / Release: Right Click");
                ui.label("Quit: Esc");
            });
    }
}
