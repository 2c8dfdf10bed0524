//! Orrery - animated model of the solar system
//!
//! A sun, planets on circular orbits and moons orbiting their planets,
//! viewed through a keyboard-driven camera.

pub mod camera;
pub mod input;
pub mod orbit;
pub mod registry;
pub mod render;
pub mod simulation;
pub mod time;
pub mod types;

use bevy::prelude::*;

use camera::CameraPlugin;
use input::InputPlugin;
use render::RenderPlugin;
use simulation::SimulationPlugin;
use time::TimePlugin;
use types::FrameSet;

/// Plugin assembling the whole orrery on top of `DefaultPlugins` and `EguiPlugin`.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Simulate, FrameSet::Draw).chain(),
        )
        .add_plugins((
            SimulationPlugin,
            CameraPlugin,
            InputPlugin,
            TimePlugin,
            RenderPlugin,
        ));
    }
}
