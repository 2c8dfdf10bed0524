//! Frame timing for the orbit animation.
//!
//! Measures wall-clock time between frames and feeds it to the simulation.

use bevy::prelude::*;

use crate::simulation::SimulationState;
use crate::types::{FIRST_FRAME_DELTA, FrameSet};

/// Wall-clock timestamp of the previous frame.
#[derive(Resource, Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Record `now` (seconds) and return the time since the previous tick.
    ///
    /// The first tick has nothing to measure against and returns
    /// [`FIRST_FRAME_DELTA`]. A clock running backwards yields zero.
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => FIRST_FRAME_DELTA,
        };
        self.last = Some(now);
        delta
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

/// Plugin providing frame-time driven animation.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>().add_systems(
            Update,
            advance_simulation
                .in_set(FrameSet::Simulate)
                .run_if(resource_exists::<SimulationState>),
        );
    }
}

/// Advance every orbital angle by the real time elapsed since the last frame.
///
/// Reads `Time<Real>`: the animation follows the wall clock, not virtual time.
pub fn advance_simulation(
    time: Res<Time<Real>>,
    mut clock: ResMut<FrameClock>,
    mut sim: ResMut<SimulationState>,
) {
    let dt = clock.tick(time.elapsed_secs_f64());
    sim.advance(dt);
}
