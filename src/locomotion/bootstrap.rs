//! Locomotion domain: player spawn.

use bevy::prelude::*;

use crate::locomotion::{Animator, GroundPlaneBody, LocomotionController, LocomotionTuning, Player};

const CAPSULE_RADIUS: f32 = 0.4;
const CAPSULE_LENGTH: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let rest_height = CAPSULE_RADIUS + CAPSULE_LENGTH * 0.5;

    commands.spawn((
        Name::new("Player"),
        Player,
        LocomotionController::new(*tuning),
        GroundPlaneBody::new(rest_height),
        Animator::default(),
        Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.85, 0.75))),
        Transform::from_xyz(0.0, rest_height, 0.0),
    ));

    info!(
        "Spawning player: run={}, walk={}, jump={} (apex {:.2})",
        tuning.run_speed,
        tuning.walk_speed,
        tuning.jump_height,
        tuning.jump_apex()
    );
}
