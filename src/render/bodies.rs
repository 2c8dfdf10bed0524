//! Bevy drawing backend for the scene.
//!
//! Spheres are immediate-mode from the caller's point of view: each call
//! claims the next slot of a pool of mesh entities, which is spawned on
//! first use and then only moved. Slots not claimed in a frame are hidden.

use std::collections::HashMap;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::render::labels::LabelQueue;
use crate::render::orbits::{OrbitGizmos, OrbitPathSettings, draw_line_loop};
use crate::render::{SceneDrawer, Shading, render_scene};
use crate::simulation::SimulationState;

/// Component marking a pooled sphere entity.
#[derive(Component)]
pub struct BodySphere;

struct SphereSlot {
    entity: Entity,
    material: Handle<StandardMaterial>,
    color: Color,
    shading: Shading,
}

/// Sphere entities reused across frames, plus one unit mesh per detail level.
#[derive(Resource, Default)]
pub struct SpherePool {
    slots: Vec<SphereSlot>,
    meshes: HashMap<u32, Handle<Mesh>>,
}

fn sphere_material(color: Color, shading: Shading) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        emissive: match shading {
            Shading::Emissive => color.to_linear() * 2.0,
            Shading::Lit => LinearRgba::BLACK,
        },
        ..default()
    }
}

/// Everything a frame of drawing touches, as one system parameter.
#[derive(SystemParam)]
pub struct SceneBackend<'w, 's> {
    gizmos: Gizmos<'w, 's, OrbitGizmos>,
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    pool: ResMut<'w, SpherePool>,
    spheres: Query<'w, 's, (&'static mut Transform, &'static mut Visibility), With<BodySphere>>,
    labels: ResMut<'w, LabelQueue>,
    next_slot: Local<'s, usize>,
}

impl SceneBackend<'_, '_> {
    fn begin_frame(&mut self) {
        *self.next_slot = 0;
        self.labels.clear();
    }

    /// Hide every slot that was not drawn this frame.
    fn finish_frame(&mut self) {
        let used = *self.next_slot;
        for slot in self.pool.slots.iter().skip(used) {
            if let Ok((_, mut visibility)) = self.spheres.get_mut(slot.entity) {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    fn spawn_slot(&mut self, transform: Transform, color: Color, detail: u32, shading: Shading) {
        let meshes = &mut self.meshes;
        let mesh = self
            .pool
            .meshes
            .entry(detail)
            .or_insert_with(|| meshes.add(Sphere::new(1.0).mesh().uv(detail, detail)))
            .clone();
        let material = self.materials.add(sphere_material(color, shading));

        let entity = self
            .commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material.clone()),
                transform,
                BodySphere,
            ))
            .id();

        debug!("Spawned sphere slot {} (detail {detail})", self.pool.slots.len());
        self.pool.slots.push(SphereSlot {
            entity,
            material,
            color,
            shading,
        });
    }
}

impl SceneDrawer for SceneBackend<'_, '_> {
    fn line_loop(&mut self, points: &[Vec3], color: Color) {
        draw_line_loop(&mut self.gizmos, points, color);
    }

    fn sphere(&mut self, center: Vec3, radius: f32, color: Color, detail: u32, shading: Shading) {
        let index = *self.next_slot;
        *self.next_slot += 1;

        let transform = Transform::from_translation(center).with_scale(Vec3::splat(radius));

        let Some(slot) = self.pool.slots.get_mut(index) else {
            self.spawn_slot(transform, color, detail, shading);
            return;
        };

        if slot.color != color || slot.shading != shading {
            if let Some(material) = self.materials.get_mut(&slot.material) {
                *material = sphere_material(color, shading);
            }
            slot.color = color;
            slot.shading = shading;
        }

        // Spawned this frame: commands are not applied yet
        if let Ok((mut current, mut visibility)) = self.spheres.get_mut(slot.entity) {
            *current = transform;
            visibility.set_if_neq(Visibility::Inherited);
        }
    }

    fn label(&mut self, anchor: Vec3, text: &str) {
        self.labels.push(anchor, text);
    }
}

/// Draw the current animation state.
pub fn draw_scene(
    sim: Res<SimulationState>,
    settings: Res<OrbitPathSettings>,
    mut backend: SceneBackend,
) {
    backend.begin_frame();
    render_scene(&sim, &settings, &mut backend);
    backend.finish_frame();
}
