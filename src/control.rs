use bevy::prelude::*;
use rand::Rng;

use crate::galaxy::Galaxy;
use crate::integrator::substep;
use crate::resources::SimParams;

/// Discrete user commands consumed once per rendered frame.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    TogglePause,
    Reset,
    /// Start pulling planets toward `cursor`, given in normalized window
    /// coordinates with the origin at the bottom-left corner.
    DragStart {
        cursor: Vec2,
    },
    DragEnd,
    Exit,
}

/// Whether the frame loop should keep going after applying input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Applies a single command to the galaxy.
pub fn apply_event(
    galaxy: &mut Galaxy,
    params: &SimParams,
    rng: &mut impl Rng,
    event: ControlEvent,
) -> Flow {
    match event {
        ControlEvent::TogglePause => {
            galaxy.paused = !galaxy.paused;
            info!(paused = galaxy.paused, "toggled pause");
        }
        ControlEvent::Reset => {
            galaxy.initialize(params, rng);
            info!(planets = galaxy.planet_count(), "galaxy reset");
        }
        ControlEvent::DragStart { cursor } => {
            galaxy.dragging = true;
            galaxy.mouse_position = cursor;
            info!(x = cursor.x, y = cursor.y, "drag started");
        }
        ControlEvent::DragEnd => {
            galaxy.dragging = false;
            galaxy.mouse_position = Vec2::ZERO;
            info!("drag ended");
        }
        ControlEvent::Exit => {
            info!("exit requested");
            return Flow::Exit;
        }
    }
    Flow::Continue
}

/// Runs one rendered frame: every pending command in arrival order, then
/// `params.substeps` substeps unless paused.
///
/// An `Exit` command stops processing immediately; later commands are
/// dropped and no substeps run.
pub fn advance_frame(
    galaxy: &mut Galaxy,
    params: &SimParams,
    rng: &mut impl Rng,
    events: impl IntoIterator<Item = ControlEvent>,
) -> Flow {
    for event in events {
        if apply_event(galaxy, params, rng, event) == Flow::Exit {
            return Flow::Exit;
        }
    }

    if !galaxy.paused {
        for _ in 0..params.substeps {
            substep(galaxy, params);
        }
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const NO_EVENTS: [ControlEvent; 0] = [];

    fn test_params() -> SimParams {
        SimParams {
            num_planets: 128,
            ..default()
        }
    }

    fn seeded(params: &SimParams) -> (Galaxy, StdRng) {
        let mut rng = StdRng::seed_from_u64(1234);
        let galaxy = Galaxy::new(params, &mut rng);
        (galaxy, rng)
    }

    #[test]
    fn pause_toggles_back_and_forth() {
        let params = test_params();
        let (mut galaxy, mut rng) = seeded(&params);

        assert!(!galaxy.paused);
        apply_event(&mut galaxy, &params, &mut rng, ControlEvent::TogglePause);
        assert!(galaxy.paused);
        apply_event(&mut galaxy, &params, &mut rng, ControlEvent::TogglePause);
        assert!(!galaxy.paused);
    }

    #[test]
    fn paused_frames_leave_state_untouched() {
        let params = test_params();
        let (mut galaxy, mut rng) = seeded(&params);

        advance_frame(&mut galaxy, &params, &mut rng, [ControlEvent::TogglePause]);
        let positions = galaxy.position.clone();
        let velocities = galaxy.velocity.clone();

        for _ in 0..5 {
            let flow = advance_frame(&mut galaxy, &params, &mut rng, NO_EVENTS);
            assert_eq!(flow, Flow::Continue);
        }

        assert_eq!(galaxy.position, positions);
        assert_eq!(galaxy.velocity, velocities);
        assert_eq!(galaxy.time, 0.0);
    }

    #[test]
    fn running_frame_runs_every_substep() {
        let params = test_params();
        let (mut galaxy, mut rng) = seeded(&params);

        advance_frame(&mut galaxy, &params, &mut rng, NO_EVENTS);

        let expected = params.dt() * params.substeps as f32;
        assert!((galaxy.time - expected).abs() < 1e-9);
    }

    #[test]
    fn drag_cycle_pulls_planets_then_releases() {
        let params = test_params();
        let (mut dragged, mut rng_a) = seeded(&params);
        let (mut baseline, mut rng_b) = seeded(&params);
        let cursor = vec2(0.2, 0.3);

        advance_frame(
            &mut dragged,
            &params,
            &mut rng_a,
            [ControlEvent::DragStart { cursor }],
        );
        assert!(dragged.dragging);
        assert_eq!(dragged.mouse_position, cursor);
        apply_event(&mut dragged, &params, &mut rng_a, ControlEvent::DragEnd);

        advance_frame(&mut baseline, &params, &mut rng_b, NO_EVENTS);

        assert!(!dragged.dragging);
        assert_eq!(dragged.mouse_position, Vec2::ZERO);

        // the leash adds acceleration toward the cursor on top of gravity
        let mut moved_toward_cursor = 0;
        for i in 0..params.num_planets {
            let extra = dragged.velocity[i] - baseline.velocity[i];
            assert!(extra.length() > 0.0, "planet {} felt no drag", i);
            let to_cursor = cursor - baseline.position[i];
            if extra.dot(to_cursor) > 0.0 {
                moved_toward_cursor += 1;
            }
        }
        assert!(moved_toward_cursor > params.num_planets * 9 / 10);
    }

    #[test]
    fn reset_restores_disk_and_cancels_drag() {
        let params = test_params();
        let (mut galaxy, mut rng) = seeded(&params);

        advance_frame(
            &mut galaxy,
            &params,
            &mut rng,
            [
                ControlEvent::DragStart {
                    cursor: vec2(0.9, 0.9),
                },
                ControlEvent::TogglePause,
            ],
        );
        let before = galaxy.position.clone();

        advance_frame(&mut galaxy, &params, &mut rng, [ControlEvent::Reset]);

        assert!(!galaxy.dragging);
        assert!(galaxy.paused);
        assert_ne!(galaxy.position, before);
        for pos in &galaxy.position {
            let dist = pos.distance(galaxy.center);
            assert!(dist >= 0.4 * params.galaxy_size - 1e-5);
            assert!(dist <= params.galaxy_size + 1e-5);
        }
    }

    #[test]
    fn events_apply_in_arrival_order() {
        let params = test_params();
        let (mut galaxy, mut rng) = seeded(&params);

        advance_frame(
            &mut galaxy,
            &params,
            &mut rng,
            [
                ControlEvent::DragEnd,
                ControlEvent::DragStart {
                    cursor: vec2(0.7, 0.1),
                },
                ControlEvent::TogglePause,
            ],
        );
        assert!(galaxy.dragging);
        assert_eq!(galaxy.mouse_position, vec2(0.7, 0.1));
        assert!(galaxy.paused);
    }

    #[test]
    fn exit_stops_before_stepping() {
        let params = test_params();
        let (mut galaxy, mut rng) = seeded(&params);
        let positions = galaxy.position.clone();

        let flow = advance_frame(
            &mut galaxy,
            &params,
            &mut rng,
            [ControlEvent::Exit, ControlEvent::TogglePause],
        );

        assert_eq!(flow, Flow::Exit);
        assert!(!galaxy.paused, "events after exit are dropped");
        assert_eq!(galaxy.position, positions);
    }
}
