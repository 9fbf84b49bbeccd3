use bevy::prelude::*;
use bevy::tasks::{ComputeTaskPool, ParallelSliceMut, TaskPool};

use crate::galaxy::Galaxy;
use crate::resources::SimParams;

/// Planets handled by a single task during the gravity pass.
const GRAVITY_CHUNK: usize = 128;

/// Clears every force and accumulates direct pairwise gravity.
///
/// Each directed pair `(i, j)` is evaluated on its own, so every pair is
/// computed twice. This keeps each planet's sum inside one task with no
/// writes to other planets, and makes the result independent of how the
/// work is split across threads.
pub fn clear_and_accumulate_gravity(galaxy: &mut Galaxy, params: &SimParams) {
    let Galaxy { position, force, .. } = galaxy;
    let positions: &[Vec2] = position;
    let k = -params.g * params.planet_mass * params.planet_mass;
    let eps = params.softening;

    let pool = ComputeTaskPool::get_or_init(TaskPool::default);
    force.par_chunk_map_mut(pool, GRAVITY_CHUNK, |chunk_index, chunk| {
        let start = chunk_index * GRAVITY_CHUNK;
        for (offset, f) in chunk.iter_mut().enumerate() {
            let i = start + offset;
            let p = positions[i];
            let mut total = Vec2::ZERO;
            for (j, q) in positions.iter().enumerate() {
                if i != j {
                    let diff = p - *q;
                    let r = diff.length().max(eps);
                    total += k * diff / (r * r * r);
                }
            }
            *f = total;
        }
    });
}

/// Adds the pull of the mouse ball while a drag is active.
///
/// The magnitude is `G * M * m * r / 2`, growing linearly with distance
/// rather than falling off like gravity, so far away planets are reeled in
/// hardest.
pub fn accumulate_mouse_force(galaxy: &mut Galaxy, params: &SimParams) {
    if !galaxy.dragging {
        return;
    }

    let mouse = galaxy.mouse_position;
    let k = -params.g * params.mouse_mass * params.planet_mass;
    let eps = params.softening;

    for (f, p) in galaxy.force.iter_mut().zip(&galaxy.position) {
        let diff = *p - mouse;
        let r = diff.length().max(eps);
        *f += k * (r / 2.0) * (diff / r);
    }
}
