//! Orbit path geometry.
//!
//! Each orbit circle is sampled once when the simulation is built and kept
//! for the lifetime of the process; orbit radii never change.

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Sample `segments` points uniformly around a circle of `radius` in the XZ plane.
///
/// Point `i` sits at angle `TAU * i / segments`, starting on +X and
/// turning toward +Z. A zero radius collapses every point onto the origin.
pub fn generate_orbit_circle(radius: f32, segments: usize) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// Precomputed, immutable closed polyline for one orbit.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    radius: f32,
    points: Vec<Vec3>,
}

impl OrbitPath {
    pub fn new(radius: f32, segments: usize) -> Self {
        Self {
            radius,
            points: generate_orbit_circle(radius, segments),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Loop vertices; the last point connects back to the first when drawn.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}
