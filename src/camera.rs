//! Camera system for the orrery.
//!
//! The camera is a flat (zoom, pitch, yaw) triple driven by discrete key
//! presses, plus a perspective projection rebuilt on window resize.

use bevy::{prelude::*, window::WindowResized};

use crate::types::FrameSet;

/// Initial distance along the view axis (negative is in front of the camera).
pub const DEFAULT_ZOOM: f32 = -30.0;

/// Initial rotation about the X axis, in degrees.
pub const DEFAULT_PITCH: f32 = 20.0;

/// Initial rotation about the Y axis, in degrees.
pub const DEFAULT_YAW: f32 = 30.0;

/// Vertical offset applied before the rotations, lifting the view slightly.
pub const CAMERA_LIFT: f32 = -1.5;

/// Zoom change per key press.
pub const ZOOM_STEP: f32 = 1.0;

/// Pitch/yaw change per key press, in degrees.
pub const ROTATE_STEP: f32 = 5.0;

/// Vertical field of view, in degrees.
pub const FOV_DEGREES: f32 = 45.0;

pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 100.0;

/// Initial window size in logical pixels.
pub const INITIAL_WIDTH: f32 = 800.0;
pub const INITIAL_HEIGHT: f32 = 600.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking camera state.
///
/// None of the values are clamped: zoom may go positive, which puts the
/// camera behind the origin.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub zoom: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pitch: DEFAULT_PITCH,
            yaw: DEFAULT_YAW,
        }
    }
}

impl CameraState {
    /// World-to-view matrix: translate, then pitch about X, then yaw about Y.
    ///
    /// The order is significant; swapping the rotations orbits the scene
    /// about the wrong axis.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, CAMERA_LIFT, self.zoom))
            * Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
    }

    /// Transform of the camera entity: the inverse of the view matrix.
    pub fn camera_transform(&self) -> Transform {
        Transform::from_matrix(self.view_matrix().inverse())
    }

    /// Apply a movement command. Returns `false` for [`CameraCommand::Quit`],
    /// which leaves the state untouched.
    pub fn apply(&mut self, command: CameraCommand) -> bool {
        match command {
            CameraCommand::ZoomIn => self.zoom += ZOOM_STEP,
            CameraCommand::ZoomOut => self.zoom -= ZOOM_STEP,
            CameraCommand::YawLeft => self.yaw -= ROTATE_STEP,
            CameraCommand::YawRight => self.yaw += ROTATE_STEP,
            CameraCommand::PitchUp => self.pitch -= ROTATE_STEP,
            CameraCommand::PitchDown => self.pitch += ROTATE_STEP,
            CameraCommand::Quit => return false,
        }
        true
    }
}

/// Discrete camera input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    /// `+`: move closer
    ZoomIn,
    /// `-`: move away
    ZoomOut,
    /// Left arrow
    YawLeft,
    /// Right arrow
    YawRight,
    /// Up arrow
    PitchUp,
    /// Down arrow
    PitchDown,
    /// Escape
    Quit,
}

/// Current viewport size.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: INITIAL_WIDTH,
            height: INITIAL_HEIGHT,
        }
    }
}

/// Perspective parameters derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveParams {
    pub fn projection(&self) -> PerspectiveProjection {
        PerspectiveProjection {
            fov: self.fov,
            aspect_ratio: self.aspect_ratio,
            near: self.near,
            far: self.far,
            ..default()
        }
    }
}

impl Viewport {
    /// Store the new size and derive the projection for it.
    ///
    /// Height is clamped to at least 1 so a minimized window never divides by zero.
    pub fn resize(&mut self, width: f32, height: f32) -> PerspectiveParams {
        self.width = width.max(0.0);
        self.height = height.max(1.0);
        self.perspective()
    }

    pub fn perspective(&self) -> PerspectiveParams {
        PerspectiveParams {
            fov: FOV_DEGREES.to_radians(),
            aspect_ratio: self.width / self.height.max(1.0),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (handle_resize, apply_camera_transform).in_set(FrameSet::Draw),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, state: Res<CameraState>, viewport: Res<Viewport>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(viewport.perspective().projection()),
        state.camera_transform(),
        MainCamera,
    ));
}

/// Move the camera entity to match [`CameraState`] whenever it changes.
pub fn apply_camera_transform(
    state: Res<CameraState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !state.is_changed() {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform = state.camera_transform();
}

/// Rebuild the projection when the window is resized.
pub fn handle_resize(
    mut resize_events: MessageReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    for event in resize_events.read() {
        if event.height <= 0.0 {
            warn!("Resize to zero height, clamping to 1");
        }

        let params = viewport.resize(event.width, event.height);
        debug!(
            "Viewport resized to {}x{} (aspect {:.3})",
            viewport.width, viewport.height, params.aspect_ratio
        );

        if let Ok(mut projection) = camera_query.single_mut() {
            *projection = Projection::from(params.projection());
        }
    }
}
