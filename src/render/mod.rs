//! Rendering for the orrery.
//!
//! [`render_scene`] walks the animation state and issues draw calls through
//! the [`SceneDrawer`] trait. The Bevy backend turns those calls into gizmo
//! lines, pooled sphere meshes and egui labels; [`DrawRecorder`] captures
//! them for inspection without a GPU.

mod background;
pub mod bodies;
pub mod labels;
pub mod orbits;

use bevy::prelude::*;

use crate::simulation::{BodyState, SimulationState};
use crate::types::{
    FrameSet, MOON_DETAIL, MOON_LABEL_LIFT, PLANET_DETAIL, PLANET_LABEL_LIFT, SUN_COLOR,
    SUN_DETAIL, SUN_LABEL_LIFT, SUN_NAME, SUN_RADIUS,
};

use self::background::BackgroundPlugin;
use self::bodies::{SpherePool, draw_scene};
use self::labels::LabelPlugin;
use self::orbits::OrbitPathPlugin;

pub use self::labels::{LabelQueue, LabelSettings};
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, OrbitPathPlugin, LabelPlugin))
            .init_resource::<SpherePool>()
            .add_systems(
                Update,
                draw_scene
                    .in_set(FrameSet::Draw)
                    .run_if(resource_exists::<SimulationState>),
            );
    }
}

/// How a sphere responds to the scene light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Lit by the sun.
    Lit,
    /// Glows with its own color; used for the light source itself.
    Emissive,
}

/// Drawing backend used by [`render_scene`].
pub trait SceneDrawer {
    /// Closed polyline through `points`, in the orbit line style.
    fn line_loop(&mut self, points: &[Vec3], color: Color);

    /// Solid sphere; `detail` is the slice and stack count.
    fn sphere(&mut self, center: Vec3, radius: f32, color: Color, detail: u32, shading: Shading);

    /// Text anchored at a fixed point in world space.
    fn label(&mut self, anchor: Vec3, text: &str);
}

/// Draw the sun, then each planet's orbit, planet and moons, in registry order.
pub fn render_scene(state: &SimulationState, orbits: &OrbitPathSettings, drawer: &mut impl SceneDrawer) {
    let [r, g, b] = SUN_COLOR;
    drawer.sphere(Vec3::ZERO, SUN_RADIUS, Color::srgb(r, g, b), SUN_DETAIL, Shading::Emissive);
    drawer.label(Vec3::Y * (SUN_RADIUS + SUN_LABEL_LIFT), SUN_NAME);

    for planet in state.planets() {
        if let Some(orbit) = planet.orbit.as_ref().filter(|_| orbits.visible) {
            drawer.line_loop(orbit.points(), orbits.color);
        }

        let planet_pos = planet.world_position(Vec3::ZERO);
        draw_body(drawer, planet, planet_pos, PLANET_DETAIL, PLANET_LABEL_LIFT);

        draw_satellites(drawer, planet, planet_pos);
    }
}

fn draw_body(drawer: &mut impl SceneDrawer, state: &BodyState, position: Vec3, detail: u32, lift: f32) {
    let body = &state.body;
    drawer.sphere(position, body.size, body.bevy_color(), detail, Shading::Lit);
    drawer.label(position + Vec3::Y * (body.size + lift), &body.name);
}

/// Moons, then their own satellites, each placed relative to its parent.
fn draw_satellites(drawer: &mut impl SceneDrawer, parent: &BodyState, parent_pos: Vec3) {
    for moon in &parent.satellites {
        let moon_pos = moon.world_position(parent_pos);
        draw_body(drawer, moon, moon_pos, MOON_DETAIL, MOON_LABEL_LIFT);
        draw_satellites(drawer, moon, moon_pos);
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    LineLoop {
        points: Vec<Vec3>,
        color: Color,
    },
    Sphere {
        center: Vec3,
        radius: f32,
        color: Color,
        detail: u32,
        shading: Shading,
    },
    Label {
        anchor: Vec3,
        text: String,
    },
}

/// [`SceneDrawer`] that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn line_loops(&self) -> impl Iterator<Item = &[Vec3]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::LineLoop { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Sphere centers and radii, in draw order.
    pub fn spheres(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sphere { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    /// Label anchor for `text`, if one was drawn.
    pub fn label_anchor(&self, text: &str) -> Option<Vec3> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Label { anchor, text: t } if t == text => Some(*anchor),
            _ => None,
        })
    }
}

impl SceneDrawer for DrawRecorder {
    fn line_loop(&mut self, points: &[Vec3], color: Color) {
        self.commands.push(DrawCommand::LineLoop {
            points: points.to_vec(),
            color,
        });
    }

    fn sphere(&mut self, center: Vec3, radius: f32, color: Color, detail: u32, shading: Shading) {
        self.commands.push(DrawCommand::Sphere {
            center,
            radius,
            color,
            detail,
            shading,
        });
    }

    fn label(&mut self, anchor: Vec3, text: &str) {
        self.commands.push(DrawCommand::Label {
            anchor,
            text: text.to_string(),
        });
    }
}
