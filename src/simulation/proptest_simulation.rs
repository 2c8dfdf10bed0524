//! Property-based tests for orbit geometry and animation using proptest.
//!
//! These tests verify the geometric invariants of circular orbits across a
//! wide range of radii, speeds and frame timings.

use bevy::prelude::*;
use proptest::prelude::*;

use super::{SimulationState, advance_angle};
use crate::orbit::generate_orbit_circle;
use crate::registry::CelestialBody;
use crate::types::{FULL_TURN_DEG, orbital_offset};

fn planet_with_moon(radius: f32, speed: f32, moon_radius: f32, moon_speed: f32) -> CelestialBody {
    CelestialBody::new(radius, 1.0, speed, [0.5; 3], "Planet").with_satellites(vec![
        CelestialBody::new(moon_radius, 0.2, moon_speed, [0.5; 3], "Satellite"),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every generated point lies on the circle, and neighbours are evenly spaced.
    #[test]
    fn prop_orbit_circle_on_radius_and_evenly_spaced(
        radius in 0.0f32..100.0,
        segments in 1usize..400,
    ) {
        let points = generate_orbit_circle(radius, segments);
        prop_assert_eq!(points.len(), segments);

        let tolerance = 1e-4 * radius.max(1.0);
        for p in &points {
            prop_assert!((p.length() - radius).abs() <= tolerance);
            prop_assert_eq!(p.y, 0.0);
        }

        if radius > 0.1 && segments > 1 {
            let step = FULL_TURN_DEG / segments as f32;
            for (i, p) in points.iter().enumerate() {
                let angle = p.z.atan2(p.x).to_degrees().rem_euclid(FULL_TURN_DEG);
                let expected = step * i as f32;
                let diff = (angle - expected).abs();
                // atan2 near +X may land just below 360
                let diff = diff.min(FULL_TURN_DEG - diff);
                prop_assert!(diff < 1e-2, "point {} at {} deg, expected {}", i, angle, expected);
            }
        }
    }

    /// Repeated advancement by non-negative deltas never leaves [0, 360).
    #[test]
    fn prop_angle_stays_wrapped(
        speed in 0.0f32..10.0,
        deltas in prop::collection::vec(0.0f32..30.0, 1..50),
    ) {
        let mut angle = 0.0;
        for dt in deltas {
            angle = advance_angle(angle, speed, dt);
            prop_assert!((0.0..FULL_TURN_DEG).contains(&angle), "angle {} escaped", angle);
        }
    }

    /// A planet's distance from the sun is its orbit radius at all times.
    #[test]
    fn prop_position_stays_on_orbit(
        radius in 0.0f32..50.0,
        speed in 0.0f32..5.0,
        steps in prop::collection::vec(0.0f32..2.0, 1..30),
    ) {
        let body = CelestialBody::new(radius, 1.0, speed, [0.5; 3], "Planet");
        let mut state = SimulationState::new(&[body]).unwrap();
        for dt in steps {
            state.advance(dt);
            let pos = state.planets()[0].world_position(Vec3::ZERO);
            prop_assert!((Vec2::new(pos.x, pos.z).length() - radius).abs() <= 1e-4 * radius.max(1.0));
            prop_assert_eq!(pos.y, 0.0);
        }
    }

    /// A moon sits at its parent's position plus its own local offset.
    #[test]
    fn prop_moon_position_composes_with_parent(
        radius in 1.0f32..30.0,
        speed in 0.0f32..2.0,
        moon_radius in 0.1f32..5.0,
        moon_speed in 0.0f32..5.0,
        elapsed in 0.0f32..60.0,
    ) {
        let mut state = SimulationState::new(
            &[planet_with_moon(radius, speed, moon_radius, moon_speed)],
        ).unwrap();
        state.advance(elapsed);

        let planet = &state.planets()[0];
        let moon = &planet.satellites[0];
        let planet_pos = planet.world_position(Vec3::ZERO);
        let moon_pos = state.world_position_of("Satellite").unwrap();
        let expected = planet_pos + orbital_offset(moon_radius, moon.angle);
        prop_assert!((moon_pos - expected).length() < 1e-4);
        prop_assert!(((moon_pos - planet_pos).length() - moon_radius).abs() < 1e-3);
    }

    /// Moving only the parent keeps the moon at the same offset from the parent.
    #[test]
    fn prop_moon_tracks_moved_parent(
        parent_angle in 0.0f32..360.0,
        moon_angle in 0.0f32..360.0,
    ) {
        let mut state = SimulationState::new(&[planet_with_moon(10.0, 0.3, 2.0, 1.0)]).unwrap();
        let planet = &mut state.planets_mut()[0];
        planet.satellites[0].angle = moon_angle;
        let before = state.world_position_of("Satellite").unwrap()
            - state.world_position_of("Planet").unwrap();

        state.planets_mut()[0].angle = parent_angle;
        let after = state.world_position_of("Satellite").unwrap()
            - state.world_position_of("Planet").unwrap();

        prop_assert!((before - after).length() < 1e-4);
    }
}
