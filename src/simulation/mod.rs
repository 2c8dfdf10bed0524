//! Animation state for every body in the scene.
//!
//! Each body instance owns its current orbital angle, and moons live inside
//! their planet's state, so there is no flat angle table to index into.

#[cfg(test)]
mod proptest_simulation;

use bevy::prelude::*;

use crate::orbit::OrbitPath;
use crate::registry::{CelestialBody, RegistryError, validate_registry};
use crate::types::{ANGULAR_SPEED_SCALE, ORBIT_SEGMENTS, orbital_offset, wrap_degrees};

/// Advance an orbital angle by `angular_speed` over `dt` seconds, wrapped to `[0, 360)`.
pub fn advance_angle(angle: f32, angular_speed: f32, dt: f32) -> f32 {
    wrap_degrees(angle + angular_speed * ANGULAR_SPEED_SCALE * dt)
}

/// Runtime state of one body: its static description plus its current angle.
#[derive(Clone, Debug)]
pub struct BodyState {
    pub body: CelestialBody,
    /// Degrees in `[0, 360)`.
    pub angle: f32,
    /// Precomputed path, present for planets with a non-zero orbit.
    pub orbit: Option<OrbitPath>,
    pub satellites: Vec<BodyState>,
}

impl BodyState {
    fn planet(body: &CelestialBody) -> Self {
        let orbit = (body.orbit_radius > 0.0).then(|| OrbitPath::new(body.orbit_radius, ORBIT_SEGMENTS));
        Self::with_orbit(body, orbit)
    }

    fn moon(body: &CelestialBody) -> Self {
        Self::with_orbit(body, None)
    }

    fn with_orbit(body: &CelestialBody, orbit: Option<OrbitPath>) -> Self {
        Self {
            body: CelestialBody {
                satellites: Vec::new(),
                ..body.clone()
            },
            angle: 0.0,
            orbit,
            satellites: body.satellites.iter().map(BodyState::moon).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.body.name
    }

    /// Advance this body and, independently, each of its satellites.
    pub fn advance(&mut self, dt: f32) {
        self.angle = advance_angle(self.angle, self.body.angular_speed, dt);
        for satellite in &mut self.satellites {
            satellite.advance(dt);
        }
    }

    /// Offset from the parent's center at the current angle.
    pub fn local_offset(&self) -> Vec3 {
        orbital_offset(self.body.orbit_radius, self.angle)
    }

    /// World position given the parent's world position.
    pub fn world_position(&self, parent: Vec3) -> Vec3 {
        parent + self.local_offset()
    }

    /// This body plus every satellite below it, at any depth.
    pub fn count(&self) -> usize {
        1 + self.satellites.iter().map(BodyState::count).sum::<usize>()
    }

    /// Depth-first search for `name` in this subtree, given the parent's world position.
    fn find_position(&self, parent: Vec3, name: &str) -> Option<Vec3> {
        let position = self.world_position(parent);
        if self.name() == name {
            return Some(position);
        }
        self.satellites
            .iter()
            .find_map(|satellite| satellite.find_position(position, name))
    }
}

/// Animation state of the whole scene.
///
/// Built once at startup from the registry and mutated only by the frame
/// update; the renderer reads it.
#[derive(Resource, Clone, Debug)]
pub struct SimulationState {
    planets: Vec<BodyState>,
}

impl SimulationState {
    /// Validate the registry and build state with every angle at zero.
    pub fn new(bodies: &[CelestialBody]) -> Result<Self, RegistryError> {
        validate_registry(bodies)?;
        Ok(Self {
            planets: bodies.iter().map(BodyState::planet).collect(),
        })
    }

    pub fn planets(&self) -> &[BodyState] {
        &self.planets
    }

    pub fn planets_mut(&mut self) -> &mut [BodyState] {
        &mut self.planets
    }

    /// Advance every planet and moon by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for planet in &mut self.planets {
            planet.advance(dt);
        }
    }

    /// Total number of animated bodies, satellites of satellites included.
    pub fn body_count(&self) -> usize {
        self.planets.iter().map(BodyState::count).sum()
    }

    /// Number of precomputed orbit paths.
    pub fn orbit_count(&self) -> usize {
        self.planets.iter().filter(|p| p.orbit.is_some()).count()
    }

    /// World position of the first body called `name`, in registry order, depth first.
    pub fn world_position_of(&self, name: &str) -> Option<Vec3> {
        self.planets
            .iter()
            .find_map(|planet| planet.find_position(Vec3::ZERO, name))
    }
}

/// Registry the simulation is built from at startup.
///
/// Insert a different value before adding [`SimulationPlugin`] to animate
/// another set of bodies.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry(pub Vec<CelestialBody>);

impl Default for BodyRegistry {
    fn default() -> Self {
        Self(crate::registry::solar_system())
    }
}

/// Plugin building [`SimulationState`] from the [`BodyRegistry`].
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyRegistry>()
            .add_systems(Startup, setup_simulation);
    }
}

/// Build the simulation, or exit with an error if the registry is malformed.
pub fn setup_simulation(
    mut commands: Commands,
    registry: Res<BodyRegistry>,
    mut exit: MessageWriter<AppExit>,
) {
    match SimulationState::new(&registry.0) {
        Ok(state) => {
            info!(
                "Registered {} bodies, {} orbit paths precomputed",
                state.body_count(),
                state.orbit_count()
            );
            commands.insert_resource(state);
        }
        Err(err) => {
            error!("Invalid body registry: {err}");
            exit.write(AppExit::error());
        }
    }
}
