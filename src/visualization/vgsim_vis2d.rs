use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, BodyIndex, NVec2};

#[derive(Component)]
struct BodyMarker(pub BodyIndex);

// Shared unit circle, scaled per body by its radius
#[derive(Resource)]
struct CircleMesh(Mesh2dHandle);

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.solver.object_count());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_system)
        .add_systems(Update, (physics_step_system, spawn_bodies_system, sync_transforms_system).chain())
        .run();
}

// world space is y-down with the origin at the top-left corner,
// Bevy is y-up with the origin at the window centre
fn to_screen(x: &NVec2, world: &NVec2) -> Vec3 {
    Vec3::new((x.x - world.x * 0.5) as f32, (world.y * 0.5 - x.y) as f32, 0.0)
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());
    commands.insert_resource(CircleMesh(Mesh2dHandle(meshes.add(Circle::new(1.0)))));
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    if let Err(e) = scenario.advance_frame() {
        log::error!("frame failed: {e}");
    }
}

// bodies can appear every frame (emitter), give each new one a sprite
fn spawn_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    circle: Res<CircleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut spawned: Local<usize>,
) {
    let world = scenario.solver.engine().world;
    let bodies: &[Body] = scenario.solver.bodies();

    for (i, body) in bodies.iter().enumerate().skip(*spawned) {
        let [r, g, b] = body.color.0;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.0.clone(),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_translation(to_screen(&body.x, &world))
                    .with_scale(Vec3::splat(body.radius as f32)),
                ..Default::default()
            },
            BodyMarker(BodyIndex(i)),
        ));
    }
    *spawned = bodies.len();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyMarker, &mut Transform)>) {
    let world = scenario.solver.engine().world;
    for (BodyMarker(i), mut transform) in &mut query {
        if let Some(b) = scenario.solver.body(*i) {
            transform.translation = to_screen(&b.x, &world);
        }
    }
}
