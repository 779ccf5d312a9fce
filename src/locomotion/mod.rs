//! Locomotion domain: third-person movement state machine and its ECS wiring.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod sink;
mod systems;

pub use components::Player;
pub use controller::{
    AnimationParams, GRAVITY, GRAVITY_STICK, LocomotionController, LocomotionOutput,
    LocomotionState, MoveState, PARAM_CRAWL, PARAM_CROUCH, PARAM_JUMP, PARAM_SPEED, TickInput,
    move_towards, rotate_towards,
};
pub use resources::{LocomotionInput, LocomotionTuning};
pub use sink::{Animator, GroundPlaneBody, MotionActuator, ParamValue, ParameterSink, PlaneActuator};

use bevy::prelude::*;

use crate::locomotion::bootstrap::spawn_player;
use crate::locomotion::systems::{read_input, sync_tuning, tick_locomotion};

/// Ordering label so other domains can read the post-tick player state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, sync_tuning, tick_locomotion)
                    .chain()
                    .in_set(LocomotionSet),
            );
    }
}
