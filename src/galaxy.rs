use bevy::prelude::*;
use rand::Rng;

use crate::resources::SimParams;

/// Per-planet state plus the interaction flags that steer the simulation.
///
/// Bodies are stored as parallel arrays indexed by planet id. The planet
/// count is fixed at construction; nothing inserts or removes bodies.
#[derive(Resource, Clone, Debug)]
pub struct Galaxy {
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    /// Accumulated force, rebuilt from zero every substep.
    pub force: Vec<Vec2>,
    pub paused: bool,
    pub dragging: bool,
    /// Cursor position in normalized window coordinates while dragging.
    pub mouse_position: Vec2,
    pub center: Vec2,
    /// Simulated time since the last reset.
    pub time: f32,
}

impl Galaxy {
    /// Allocates `params.num_planets` bodies and seeds them into a disk.
    pub fn new(params: &SimParams, rng: &mut impl Rng) -> Self {
        let n = params.num_planets;
        let mut galaxy = Self {
            position: vec![Vec2::ZERO; n],
            velocity: vec![Vec2::ZERO; n],
            force: vec![Vec2::ZERO; n],
            paused: false,
            dragging: false,
            mouse_position: Vec2::ZERO,
            center: params.center,
            time: 0.0,
        };
        galaxy.initialize(params, rng);
        galaxy
    }

    /// Overwrites every body with a fresh disk galaxy around `params.center`.
    ///
    /// Radii are drawn as `(sqrt(u) * 0.6 + 0.4) * galaxy_size`, so the
    /// disk has a hole in the middle and roughly uniform areal density.
    /// Velocities are perpendicular to the offset from the center and scale
    /// with the radius. Dragging is cancelled; the pause flag is left as is.
    pub fn initialize(&mut self, params: &SimParams, rng: &mut impl Rng) {
        self.center = params.center;
        self.dragging = false;
        self.time = 0.0;

        let center = self.center;
        for ((pos, vel), force) in self
            .position
            .iter_mut()
            .zip(self.velocity.iter_mut())
            .zip(self.force.iter_mut())
        {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let r = (rng.random::<f32>().sqrt() * 0.6 + 0.4) * params.galaxy_size;
            let offset = r * Vec2::new(theta.cos(), theta.sin());

            *pos = center + offset;
            *vel = params.init_vel * Vec2::new(-offset.y, offset.x);
            *force = Vec2::ZERO;
        }
    }

    pub fn planet_count(&self) -> usize {
        self.position.len()
    }

    /// Sum of `m * v` over all planets.
    pub fn total_momentum(&self, params: &SimParams) -> Vec2 {
        self.velocity.iter().copied().sum::<Vec2>() * params.planet_mass
    }

    /// Sum of `m * |v|^2 / 2` over all planets.
    pub fn kinetic_energy(&self, params: &SimParams) -> f32 {
        0.5 * params.planet_mass * self.velocity.iter().map(|v| v.length_squared()).sum::<f32>()
    }
}
