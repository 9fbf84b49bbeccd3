use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

// --- Simulation Defaults ---
/// Gravitational constant (6.67408e-11 in SI, 1 in simulation units).
pub const DEFAULT_G: f32 = 1.0;
/// Number of planets spawned at startup.
pub const NUM_PLANETS: usize = 3000;
/// Unit mass shared by every planet.
pub const PLANET_MASS: f32 = 1.0;
/// Mass of the ball that follows the cursor while dragging.
pub const MOUSE_BALL_MASS: f32 = 1000.0;
/// Minimum separation used in force evaluation.
pub const SOFTENING: f32 = 1e-5;
/// Galaxy radius in normalized window coordinates.
pub const GALAXY_SIZE: f32 = 0.4;
/// Scale of the initial tangential velocity.
pub const INIT_VEL: f32 = 120.0;
/// Simulated time advanced per rendered frame.
pub const DEFAULT_H: f32 = 1e-4;
/// Substeps per rendered frame.
pub const SUBSTEPS: u32 = 10;

// --- Rendering Defaults ---
/// Planet radius in pixels.
pub const PLANET_RADIUS: f32 = 2.0;
/// Drag indicator radius in pixels.
pub const MOUSE_BALL_RADIUS: f32 = 2.0;
/// Window edge length in pixels.
pub const WINDOW_SIZE: u32 = 800;

/// Physical constants and step sizes. Fixed once the app starts.
#[derive(Resource, Clone, Debug)]
pub struct SimParams {
    pub g: f32,
    pub num_planets: usize,
    pub planet_mass: f32,
    pub mouse_mass: f32,
    pub softening: f32,
    pub galaxy_size: f32,
    pub init_vel: f32,
    pub h: f32,
    pub substeps: u32,
    pub center: Vec2,
}

impl SimParams {
    /// Length of a single substep.
    pub fn dt(&self) -> f32 {
        self.h / self.substeps as f32
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            num_planets: NUM_PLANETS,
            planet_mass: PLANET_MASS,
            mouse_mass: MOUSE_BALL_MASS,
            softening: SOFTENING,
            galaxy_size: GALAXY_SIZE,
            init_vel: INIT_VEL,
            h: DEFAULT_H,
            substeps: SUBSTEPS,
            center: Vec2::splat(0.5),
        }
    }
}

/// Colors and sizes used by the render adapter.
#[derive(Resource, Clone)]
pub struct RenderSettings {
    pub planet_radius: f32,
    pub planet_color: Color,
    pub mouse_ball_radius: f32,
    pub mouse_ball_color: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            planet_radius: PLANET_RADIUS,
            planet_color: Color::srgb_u8(0xFF, 0xFF, 0xFF),
            mouse_ball_radius: MOUSE_BALL_RADIUS,
            mouse_ball_color: Color::srgb_u8(0xED, 0x55, 0x3B),
        }
    }
}

/// Random source used by the initializer, kept around for resets.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl Default for SimRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}
