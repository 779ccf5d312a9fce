//! Scene domain: ground, light and the yaw-only camera rig that defines "forward".

use bevy::prelude::*;

use crate::locomotion::{LocomotionSet, Player};

/// Yaw pivot the camera hangs from. Its flattened basis drives camera-relative movement.
#[derive(Component, Debug)]
pub struct CameraRig {
    /// Orbit speed in radians per second.
    pub orbit_speed: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self { orbit_speed: 2.0 }
    }
}

/// Horizontal forward and right vectors of a rig transform.
pub fn camera_basis(transform: &Transform) -> (Vec3, Vec3) {
    let forward = transform.forward();
    let right = transform.right();
    let forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();
    (forward, right)
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                orbit_camera.before(LocomotionSet),
                follow_player.after(LocomotionSet),
            ),
        );
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(60.0, 60.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.4, 0.5, 0.4))),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands
        .spawn((
            Name::new("CameraRig"),
            CameraRig::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|rig| {
            rig.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, 4.0, 9.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
            ));
        });
}

fn orbit_camera(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&CameraRig, &mut Transform)>,
) {
    let mut direction = 0.0;
    if keyboard.pressed(KeyCode::KeyQ) {
        direction += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        direction -= 1.0;
    }
    if direction == 0.0 {
        return;
    }

    for (rig, mut transform) in &mut query {
        transform.rotate_y(direction * rig.orbit_speed * time.delta_secs());
    }
}

fn follow_player(
    player: Query<&Transform, (With<Player>, Without<CameraRig>)>,
    mut rig: Query<&mut Transform, With<CameraRig>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    for mut transform in &mut rig {
        transform.translation = player.translation;
    }
}
