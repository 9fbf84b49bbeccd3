use crate::forces::{accumulate_mouse_force, clear_and_accumulate_gravity};
use crate::galaxy::Galaxy;
use crate::resources::SimParams;

/// Advances every planet by `dt` with symplectic Euler.
///
/// Velocity is updated from the accumulated force first, and the position
/// update uses that new velocity.
pub fn step(galaxy: &mut Galaxy, params: &SimParams, dt: f32) {
    let m = params.planet_mass;

    for ((pos, vel), force) in galaxy
        .position
        .iter_mut()
        .zip(galaxy.velocity.iter_mut())
        .zip(&galaxy.force)
    {
        *vel += dt * *force / m;
        *pos += dt * *vel;
    }

    galaxy.time += dt;
}

/// One substep: gravity, then the drag pull, then integration.
pub fn substep(galaxy: &mut Galaxy, params: &SimParams) {
    clear_and_accumulate_gravity(galaxy, params);
    accumulate_mouse_force(galaxy, params);
    step(galaxy, params, params.dt());
}
