//! Orbit path rendering using Bevy Gizmos.
//!
//! Orbit loops go through their own gizmo config group so the thick line
//! width applies to orbits only and every other gizmo keeps the default.

use bevy::prelude::*;

/// Gizmo group for orbit lines.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct OrbitGizmos;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .init_gizmo_group::<OrbitGizmos>()
            .add_systems(Update, apply_orbit_line_style);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Line color, shared by every orbit.
    pub color: Color,
    /// Line width in pixels.
    pub line_width: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::srgb(0.7, 0.7, 0.7),
            line_width: 3.0,
        }
    }
}

/// Push the line width into the orbit gizmo group when the settings change.
fn apply_orbit_line_style(settings: Res<OrbitPathSettings>, mut config_store: ResMut<GizmoConfigStore>) {
    if !settings.is_changed() {
        return;
    }

    let (config, _) = config_store.config_mut::<OrbitGizmos>();
    config.enabled = settings.visible;
    config.line.width = settings.line_width;
}

/// Draw a closed loop through `points`.
pub fn draw_line_loop(gizmos: &mut Gizmos<OrbitGizmos>, points: &[Vec3], color: Color) {
    let Some(&first) = points.first() else {
        return;
    };
    gizmos.linestrip(points.iter().copied().chain(std::iter::once(first)), color);
}
