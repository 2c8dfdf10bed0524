//! Static table of the bodies orbiting the sun.
//!
//! Radii, sizes and speeds are render units chosen for a pleasant view,
//! not physical data. Orbits are circles in the XZ plane around the parent.

use bevy::prelude::*;

/// A body on a circular orbit around its parent, with its own satellites.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Distance from the parent body's center.
    pub orbit_radius: f32,
    /// Sphere radius.
    pub size: f32,
    /// Angular speed, scaled by `ANGULAR_SPEED_SCALE` to degrees per second.
    pub angular_speed: f32,
    /// RGB, each channel in `[0, 1]`.
    pub color: [f32; 3],
    /// Display label.
    pub name: String,
    /// Moons, in drawing order.
    pub satellites: Vec<CelestialBody>,
}

impl CelestialBody {
    pub fn new(
        orbit_radius: f32,
        size: f32,
        angular_speed: f32,
        color: [f32; 3],
        name: impl Into<String>,
    ) -> Self {
        Self {
            orbit_radius,
            size,
            angular_speed,
            color,
            name: name.into(),
            satellites: Vec::new(),
        }
    }

    /// Builder-style satellite list.
    pub fn with_satellites(mut self, satellites: Vec<CelestialBody>) -> Self {
        self.satellites = satellites;
        self
    }

    /// Render color.
    pub fn bevy_color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }

    /// Number of bodies in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.satellites.iter().map(CelestialBody::count).sum::<usize>()
    }
}

/// Registry invariant violations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("{name}: orbit radius {radius} is negative")]
    NegativeOrbitRadius { name: String, radius: f32 },

    #[error("{name}: size {size} must be positive")]
    NonPositiveSize { name: String, size: f32 },

    #[error("{name}: angular speed {speed} is negative")]
    NegativeAngularSpeed { name: String, speed: f32 },

    #[error("{name}: color channel {value} outside [0, 1]")]
    ColorOutOfRange { name: String, value: f32 },
}

/// Check every body (and every satellite, recursively) against the data-model invariants.
pub fn validate_registry(bodies: &[CelestialBody]) -> Result<(), RegistryError> {
    for body in bodies {
        validate_body(body)?;
    }
    Ok(())
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate_body(body: &CelestialBody) -> Result<(), RegistryError> {
    // Written as negated comparisons so NaN fails too.
    if !(body.orbit_radius >= 0.0) {
        return Err(RegistryError::NegativeOrbitRadius {
            name: body.name.clone(),
            radius: body.orbit_radius,
        });
    }
    if !(body.size > 0.0) {
        return Err(RegistryError::NonPositiveSize {
            name: body.name.clone(),
            size: body.size,
        });
    }
    if !(body.angular_speed >= 0.0) {
        return Err(RegistryError::NegativeAngularSpeed {
            name: body.name.clone(),
            speed: body.angular_speed,
        });
    }
    if let Some(&value) = body.color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        return Err(RegistryError::ColorOutOfRange {
            name: body.name.clone(),
            value,
        });
    }
    validate_registry(&body.satellites)
}

/// The planets of the default scene, in drawing order, with their moons.
///
/// Uranus and Neptune deliberately share orbit radii with Jupiter and Mars;
/// the layout is compact rather than to scale.
pub fn solar_system() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new(4.0, 0.5, 0.8, [0.5, 0.5, 1.0], "Mercury"),
        CelestialBody::new(6.0, 0.7, 0.6, [1.0, 0.7, 0.2], "Venus"),
        CelestialBody::new(8.0, 0.9, 0.4, [0.0, 0.5, 1.0], "Earth").with_satellites(vec![
            CelestialBody::new(1.2, 0.2, 2.5, [0.9, 0.9, 0.9], "Moon"),
        ]),
        CelestialBody::new(10.0, 0.8, 0.3, [1.0, 0.0, 0.0], "Mars"),
        CelestialBody::new(13.0, 1.4, 0.2, [1.0, 0.9, 0.5], "Jupiter").with_satellites(vec![
            CelestialBody::new(2.0, 0.3, 1.5, [0.8, 0.7, 0.6], "Io"),
            CelestialBody::new(2.5, 0.25, 1.2, [0.7, 0.7, 0.7], "Europa"),
            CelestialBody::new(3.0, 0.4, 0.9, [0.6, 0.6, 0.6], "Ganymede"),
            CelestialBody::new(3.5, 0.35, 0.7, [0.5, 0.5, 0.5], "Callisto"),
        ]),
        CelestialBody::new(16.0, 1.2, 0.15, [0.8, 0.8, 0.7], "Saturn").with_satellites(vec![
            CelestialBody::new(2.0, 0.25, 1.7, [0.7, 0.7, 0.7], "Titan"),
            CelestialBody::new(2.7, 0.2, 1.3, [0.6, 0.6, 0.6], "Rhea"),
        ]),
        CelestialBody::new(13.0, 0.6, 0.1, [0.4, 0.8, 1.0], "Uranus"),
        CelestialBody::new(10.0, 0.9, 0.05, [0.3, 0.3, 1.0], "Neptune"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_layout() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 8);

        let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );

        let moons: usize = bodies.iter().map(|b| b.satellites.len()).sum();
        assert_eq!(moons, 7);
        assert_eq!(bodies.iter().map(CelestialBody::count).sum::<usize>(), 15);
    }

    #[test]
    fn test_moons_have_no_satellites() {
        for planet in solar_system() {
            for moon in &planet.satellites {
                assert!(moon.satellites.is_empty(), "{} has satellites", moon.name);
            }
        }
    }

    #[test]
    fn test_default_registry_is_valid() {
        assert_eq!(validate_registry(&solar_system()), Ok(()));
    }

    #[test]
    fn test_zero_orbit_radius_is_allowed() {
        let body = CelestialBody::new(0.0, 1.0, 0.0, [0.0, 0.0, 0.0], "Anchor");
        assert!(validate_registry(&[body]).is_ok());
    }

    #[test]
    fn test_rejects_negative_radius() {
        let body = CelestialBody::new(-1.0, 1.0, 0.1, [0.5; 3], "Bad");
        assert!(matches!(
            validate_registry(&[body]),
            Err(RegistryError::NegativeOrbitRadius { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_size_and_nan() {
        let zero = CelestialBody::new(1.0, 0.0, 0.1, [0.5; 3], "Flat");
        assert!(matches!(
            validate_registry(&[zero]),
            Err(RegistryError::NonPositiveSize { .. })
        ));

        let nan = CelestialBody::new(1.0, f32::NAN, 0.1, [0.5; 3], "Ghost");
        assert!(validate_registry(&[nan]).is_err());
    }

    #[test]
    fn test_rejects_bad_satellite() {
        let planet = CelestialBody::new(5.0, 1.0, 0.1, [0.5; 3], "Host").with_satellites(vec![
            CelestialBody::new(1.0, 0.2, -0.5, [0.5; 3], "Retro"),
        ]);
        let err = validate_registry(&[planet]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::NegativeAngularSpeed {
                name: "Retro".into(),
                speed: -0.5
            }
        );
        assert_eq!(err.to_string(), "Retro: angular speed -0.5 is negative");
    }

    #[test]
    fn test_rejects_color_out_of_range() {
        let body = CelestialBody::new(5.0, 1.0, 0.1, [0.5, 1.5, 0.5], "Glow");
        assert!(matches!(
            validate_registry(&[body]),
            Err(RegistryError::ColorOutOfRange { value, .. }) if value == 1.5
        ));
    }
}
