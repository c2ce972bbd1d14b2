//! Shapes plugin (render-only): dress gameplay silhouettes with visible geometry.
//!
//! Gameplay only ever spawns a `Silhouette` (role + size). A `ShapeKit` decides
//! what outline each role gets, and `dress_silhouettes` turns that outline into
//! a sprite or a `Mesh2d` when the entity first appears. Swapping the kit changes
//! the art without touching a single gameplay system.

use bevy::prelude::*;

use crate::common::silhouette::{Role, Silhouette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Rect(Vec2),
    /// Isosceles, apex up; the size is the bounding box.
    Triangle(Vec2),
    Circle(f32),
    /// Six-pointed star of the given outer radius.
    Star(f32),
}

pub trait ShapeKit: Send + Sync + 'static {
    fn outline(&self, silhouette: &Silhouette) -> Outline;
}

/// Filled squares for everything, a round power-up.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockShapes;

impl ShapeKit for BlockShapes {
    fn outline(&self, s: &Silhouette) -> Outline {
        match s.role {
            Role::PowerUp => Outline::Circle(s.size.x * 0.5),
            _ => Outline::Rect(s.size),
        }
    }
}

/// Triangle ship, round enemies, star power-up.
#[derive(Debug, Default, Clone, Copy)]
pub struct VectorShapes;

impl ShapeKit for VectorShapes {
    fn outline(&self, s: &Silhouette) -> Outline {
        match s.role {
            Role::Ship => Outline::Triangle(s.size),
            Role::Bullet => Outline::Rect(s.size),
            Role::Grunt | Role::Miniboss | Role::Boss => Outline::Circle(s.size.x * 0.5),
            Role::PowerUp => Outline::Star(s.size.x * 0.5),
        }
    }
}

#[derive(Resource)]
pub struct ActiveShapeKit(pub Box<dyn ShapeKit>);

impl Default for ActiveShapeKit {
    fn default() -> Self {
        Self(Box::new(BlockShapes))
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<ActiveShapeKit>()
        .add_systems(PostUpdate, dress_silhouettes);
}

fn triangle(size: Vec2) -> Triangle2d {
    let half = size * 0.5;
    Triangle2d::new(
        Vec2::new(0.0, half.y),
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
    )
}

/// Two overlapping equilateral triangles, one pointing up and one down.
fn star_halves(radius: f32) -> [Triangle2d; 2] {
    let up = Triangle2d::new(
        Vec2::from_angle(90f32.to_radians()) * radius,
        Vec2::from_angle(210f32.to_radians()) * radius,
        Vec2::from_angle(330f32.to_radians()) * radius,
    );
    let down = Triangle2d::new(
        Vec2::from_angle(270f32.to_radians()) * radius,
        Vec2::from_angle(30f32.to_radians()) * radius,
        Vec2::from_angle(150f32.to_radians()) * radius,
    );
    [up, down]
}

pub fn dress_silhouettes(
    mut commands: Commands,
    kit: Res<ActiveShapeKit>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q: Query<(Entity, &Silhouette), Added<Silhouette>>,
) {
    for (e, silhouette) in &q {
        let color = silhouette.role.color();

        match kit.0.outline(silhouette) {
            Outline::Rect(size) => {
                commands.entity(e).insert(Sprite::from_color(color, size));
            }
            Outline::Circle(r) => {
                commands.entity(e).insert((
                    Mesh2d(meshes.add(Circle::new(r))),
                    MeshMaterial2d(materials.add(color)),
                ));
            }
            Outline::Triangle(size) => {
                commands.entity(e).insert((
                    Mesh2d(meshes.add(triangle(size))),
                    MeshMaterial2d(materials.add(color)),
                ));
            }
            Outline::Star(r) => {
                let material = materials.add(color);
                let halves = star_halves(r).map(|t| meshes.add(t));
                commands.entity(e).with_children(|parent| {
                    for mesh in halves {
                        parent.spawn((Mesh2d(mesh), MeshMaterial2d(material.clone())));
                    }
                });
            }
        }
    }
}
