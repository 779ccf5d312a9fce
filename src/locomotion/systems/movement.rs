//! Locomotion domain: controller tick and actuation.

use bevy::prelude::*;

use crate::locomotion::{
    Animator, GroundPlaneBody, LocomotionController, LocomotionInput, LocomotionTuning, MotionActuator,
    PlaneActuator, Player, TickInput,
};
use crate::scene::{CameraRig, camera_basis};

pub(crate) fn sync_tuning(
    tuning: Res<LocomotionTuning>,
    mut query: Query<&mut LocomotionController, With<Player>>,
) {
    if !tuning.is_changed() {
        return;
    }
    for mut controller in &mut query {
        controller.set_tuning(*tuning);
    }
}

pub(crate) fn tick_locomotion(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    rig: Query<&Transform, With<CameraRig>>,
    mut query: Query<
        (
            &mut LocomotionController,
            &mut GroundPlaneBody,
            &mut Animator,
            &mut Transform,
        ),
        (With<Player>, Without<CameraRig>),
    >,
) {
    let dt = time.delta_secs();
    let (camera_forward, camera_right) = match rig.single() {
        Ok(transform) => camera_basis(transform),
        Err(_) => (Vec3::Z, Vec3::X),
    };

    for (mut controller, mut body, mut animator, mut transform) in &mut query {
        let transform = &mut *transform;
        let mut actuator = PlaneActuator {
            translation: &mut transform.translation,
            body: &mut *body,
        };

        let tick = TickInput {
            direction: input.direction,
            run_modifier: input.run_modifier,
            crouch_held: input.crouch_held,
            crawl_held: input.crawl_held,
            jump_pressed: input.jump_just_pressed,
            grounded: actuator.is_grounded(),
            dt,
            camera_forward,
            camera_right,
        };

        let output = controller.drive(&tick, &mut actuator, &mut *animator);
        transform.rotation = output.facing;
    }
}
