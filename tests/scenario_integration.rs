//! End-to-end scenarios over the public API.
//!
//! Each test drives the animation and camera the way the frame loop does,
//! without a window or GPU.

mod common;

use approx::assert_relative_eq;
use bevy::math::Vec3;
use common::{assert_near, lone_planet, simulate_fixed};
use orrery::camera::{CameraCommand, CameraState};
use orrery::registry::{CelestialBody, solar_system};
use orrery::render::{DrawRecorder, OrbitPathSettings, render_scene};
use orrery::simulation::SimulationState;
use orrery::time::FrameClock;

#[test]
fn test_half_orbit_after_four_fixed_steps() {
    let mut state = SimulationState::new(&[lone_planet(8.0, 0.9)]).unwrap();
    simulate_fixed(&mut state, 1.0, 4);

    assert_relative_eq!(state.planets()[0].angle, 180.0, epsilon = 1e-3);
    let pos = state.world_position_of("Planet").unwrap();
    assert_near(pos, Vec3::new(-8.0, 0.0, 0.0), 1e-3);
}

#[test]
fn test_zoom_keys() {
    let mut camera = CameraState::default();
    for _ in 0..3 {
        camera.apply(CameraCommand::ZoomIn);
    }
    camera.apply(CameraCommand::ZoomOut);
    assert_eq!(camera.zoom, -28.0);
}

#[test]
fn test_yaw_keys() {
    let mut camera = CameraState::default();
    camera.apply(CameraCommand::YawRight);
    camera.apply(CameraCommand::YawRight);
    assert_eq!(camera.yaw, 40.0);
}

#[test]
fn test_moonless_bodies_render_without_satellites() {
    let bodies = vec![
        lone_planet(4.0, 0.8),
        CelestialBody::new(9.0, 1.0, 0.3, [1.0, 1.0, 1.0], "Host").with_satellites(vec![
            CelestialBody::new(1.5, 0.2, 2.0, [0.8, 0.8, 0.8], "Only"),
        ]),
        CelestialBody::new(12.0, 0.5, 0.1, [0.2, 0.2, 0.2], "Last"),
    ];
    let mut state = SimulationState::new(&bodies).unwrap();
    let mut recorder = DrawRecorder::default();

    for _ in 0..10 {
        state.advance(0.1);
        recorder.clear();
        render_scene(&state, &OrbitPathSettings::default(), &mut recorder);
        // sun + 3 planets + 1 moon
        assert_eq!(recorder.spheres().count(), 5);
    }
}

#[test]
fn test_frame_clock_drives_full_scene() {
    let mut state = SimulationState::new(&solar_system()).unwrap();
    let mut clock = FrameClock::default();

    // Startup took ten seconds; the first frame must not jump
    let first = clock.tick(10.0);
    state.advance(first);
    for planet in state.planets() {
        assert!(planet.angle < 1.0, "{} jumped to {}", planet.name(), planet.angle);
    }

    // Then 2 seconds of 60 fps
    let mut now = 10.0;
    for _ in 0..120 {
        now += 1.0 / 60.0;
        state.advance(clock.tick(now));
    }

    // Mercury: 0.8 * 50 = 40 deg/s
    let mercury = &state.planets()[0];
    assert_relative_eq!(mercury.angle, 40.0 * (2.0 + 1.0 / 60.0), epsilon = 0.05);
}

#[test]
fn test_rendered_positions_follow_state() {
    let mut state = SimulationState::new(&solar_system()).unwrap();
    simulate_fixed(&mut state, 0.25, 7);

    let mut recorder = DrawRecorder::default();
    render_scene(&state, &OrbitPathSettings::default(), &mut recorder);

    for name in ["Mercury", "Earth", "Moon", "Io", "Rhea", "Neptune"] {
        let position = state.world_position_of(name).unwrap();
        let anchor = recorder.label_anchor(name).unwrap();
        assert_relative_eq!(anchor.x, position.x, epsilon = 1e-5);
        assert_relative_eq!(anchor.z, position.z, epsilon = 1e-5);
        assert!(anchor.y > position.y);
        assert!(
            recorder
                .spheres()
                .any(|(center, _)| (center - position).length() < 1e-5),
            "no sphere drawn at {name}"
        );
    }
}

#[test]
fn test_orbit_loops_match_planet_radii() {
    let state = SimulationState::new(&solar_system()).unwrap();
    let mut recorder = DrawRecorder::default();
    render_scene(&state, &OrbitPathSettings::default(), &mut recorder);

    let radii: Vec<f32> = recorder.line_loops().map(|points| points[0].length()).collect();
    assert_eq!(radii, [4.0, 6.0, 8.0, 10.0, 13.0, 16.0, 13.0, 10.0]);
    assert!(recorder.line_loops().all(|points| points.len() == 100));
}
