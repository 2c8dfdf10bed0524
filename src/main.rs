//! Orrery - animated model of the solar system.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::OrreryPlugin;
use orrery::camera::{INITIAL_HEIGHT, INITIAL_WIDTH};

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System".into(),
                resolution: (INITIAL_WIDTH as u32, INITIAL_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(OrreryPlugin)
        .run()
}
