use bevy::prelude::*;

/// Index of the planet this entity renders in [`crate::galaxy::Galaxy`].
#[derive(Component, Deref, Clone, Copy, Debug)]
pub struct Planet(pub usize);

/// Marker for the circle drawn under the cursor while dragging.
#[derive(Component)]
pub struct MouseBall;
