//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::Vec3;
use orrery::registry::CelestialBody;
use orrery::simulation::SimulationState;

/// A single planet with no moons.
pub fn lone_planet(orbit_radius: f32, angular_speed: f32) -> CelestialBody {
    CelestialBody::new(orbit_radius, 0.9, angular_speed, [0.0, 0.5, 1.0], "Planet")
}

/// Advance `state` by `steps` frames of `dt` seconds each.
pub fn simulate_fixed(state: &mut SimulationState, dt: f32, steps: usize) {
    for _ in 0..steps {
        state.advance(dt);
    }
}

/// Assert two points agree within `epsilon`.
pub fn assert_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        (actual - expected).length() <= epsilon,
        "expected {expected:?}, got {actual:?}"
    );
}
