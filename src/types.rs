//! Shared constants and small geometry helpers for the orrery.

use bevy::prelude::*;

/// System set for ordering the per-frame work.
///
/// Input runs first so a key press is visible in the same frame,
/// then the animation advances, then the scene is drawn.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard handling and camera mutation
    Input,
    /// Frame clock and orbital angle advancement
    Simulate,
    /// Camera transform and draw calls
    Draw,
}

/// Degrees advanced per simulated second for an angular speed of 1.0.
pub const ANGULAR_SPEED_SCALE: f32 = 50.0;

/// Points per precomputed orbit circle.
pub const ORBIT_SEGMENTS: usize = 100;

/// Full turn in degrees.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Elapsed time reported for the very first frame, in seconds.
///
/// There is no previous frame to measure against, so startup time must not
/// leak into the animation.
pub const FIRST_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Sun sphere radius in render units.
pub const SUN_RADIUS: f32 = 2.5;

/// Sun color (pure yellow).
pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Sun label text.
pub const SUN_NAME: &str = "Sun";

/// Sphere tessellation (slices and stacks) per body class.
pub const SUN_DETAIL: u32 = 50;
pub const PLANET_DETAIL: u32 = 30;
pub const MOON_DETAIL: u32 = 20;

/// Height of a label anchor above the top of its sphere.
pub const SUN_LABEL_LIFT: f32 = 0.2;
pub const PLANET_LABEL_LIFT: f32 = 0.2;
pub const MOON_LABEL_LIFT: f32 = 0.05;

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Negative inputs and inputs of several full turns are handled too, so a
/// long stall between frames can never push an angle out of range.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}

/// Position on a circle of `radius` in the XZ plane at `angle_deg`.
pub fn orbital_offset(radius: f32, angle_deg: f32) -> Vec3 {
    let theta = angle_deg.to_radians();
    Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
}
