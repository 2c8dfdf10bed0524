//! Background and lighting for the scene.
//!
//! Black backdrop, a point light inside the sun, and a dim ambient fill so
//! the night side of each body stays visible.

use bevy::prelude::*;

/// Light emitted from the sun's center, in lumens.
const SUN_LIGHT_INTENSITY: f32 = 10_000_000.0;

/// Reach of the sun light; the outermost orbit sits well inside it.
const SUN_LIGHT_RANGE: f32 = 100.0;

/// Ambient fill brightness.
const AMBIENT_BRIGHTNESS: f32 = 200.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_lighting);
    }
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    // No shadows: the light sits inside the sun mesh
    commands.spawn((
        PointLight {
            intensity: SUN_LIGHT_INTENSITY,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));
}
