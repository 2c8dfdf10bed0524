//! Keyboard controls for the camera.
//!
//! `+`/`-` zoom, arrow keys rotate, Escape quits. Key repeats count as
//! presses, so holding a key keeps moving the camera.

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::camera::{CameraCommand, CameraState};
use crate::types::FrameSet;

impl CameraCommand {
    /// Map a logical key to a camera command.
    ///
    /// Matches on the produced character rather than the physical key, so
    /// `+` works from shift+`=` and from the keypad alike.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Character(c) if c.as_str() == "+" => Some(Self::ZoomIn),
            Key::Character(c) if c.as_str() == "-" => Some(Self::ZoomOut),
            Key::Escape => Some(Self::Quit),
            Key::ArrowLeft => Some(Self::YawLeft),
            Key::ArrowRight => Some(Self::YawRight),
            Key::ArrowUp => Some(Self::PitchUp),
            Key::ArrowDown => Some(Self::PitchDown),
            _ => None,
        }
    }
}

/// Plugin providing keyboard camera control.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_camera_controls.in_set(FrameSet::Input));
    }
}

/// Apply camera commands for every key press this frame.
///
/// Every press requests a redraw, mapped or not.
pub fn keyboard_camera_controls(
    mut key_events: MessageReader<KeyboardInput>,
    mut camera: ResMut<CameraState>,
    mut exit: MessageWriter<AppExit>,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    for event in key_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        redraw.write(RequestRedraw);

        let Some(command) = CameraCommand::from_key(&event.logical_key) else {
            continue;
        };

        if !camera.apply(command) {
            info!("Escape pressed, exiting");
            exit.write(AppExit::Success);
            return;
        }

        debug!(
            "Camera {:?}: zoom {}, pitch {}, yaw {}",
            command, camera.zoom, camera.pitch, camera.yaw
        );
    }
}
