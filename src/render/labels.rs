//! Body labels using egui for text rendering.
//!
//! The scene pass queues text at world-space anchors; the egui pass projects
//! each anchor through the main camera and paints the text there.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::camera::MainCamera;

/// Plugin providing body label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .init_resource::<LabelQueue>()
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource, Clone, Debug)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    pub font_size: f32,
    pub color: egui::Color32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 12.0,
            color: egui::Color32::from_rgb(230, 230, 230),
        }
    }
}

/// A label waiting to be painted.
#[derive(Clone, Debug, PartialEq)]
pub struct QueuedLabel {
    pub anchor: Vec3,
    pub text: String,
}

/// Labels queued by the current frame's scene pass.
#[derive(Resource, Clone, Debug, Default)]
pub struct LabelQueue {
    labels: Vec<QueuedLabel>,
}

impl LabelQueue {
    pub fn push(&mut self, anchor: Vec3, text: &str) {
        self.labels.push(QueuedLabel {
            anchor,
            text: text.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Paint every queued label with its baseline at the projected anchor.
fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    queue: Res<LabelQueue>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible || queue.is_empty() {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(settings.font_size);

            for label in queue.iter() {
                // Anchors behind the camera do not project
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, label.anchor) else {
                    continue;
                };

                painter.text(
                    egui::pos2(screen_pos.x, screen_pos.y),
                    egui::Align2::LEFT_BOTTOM,
                    &label.text,
                    font.clone(),
                    settings.color,
                );
            }
        });
}
