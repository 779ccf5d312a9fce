//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub crouch_speed: f32,
    pub crawl_speed: f32,
    /// Vertical speed applied as a single impulse when a jump starts.
    pub jump_height: f32,
    /// Maximum facing change in degrees per second.
    pub turn_speed: f32,
    /// Maximum change in horizontal speed per second.
    pub smooth_speed: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 6.0,
            crouch_speed: 2.0,
            crawl_speed: 1.0,
            jump_height: 10.0,
            turn_speed: 540.0,
            smooth_speed: 12.0,
        }
    }
}

impl LocomotionTuning {
    /// Peak height of a jump under the controller's fixed gravity: h = v^2 / (2g)
    pub fn jump_apex(&self) -> f32 {
        self.jump_height * self.jump_height / (2.0 * super::GRAVITY)
    }
}

/// Raw input sampled once per frame, before it is combined with body and camera state.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LocomotionInput {
    pub direction: Vec2,
    pub run_modifier: bool,
    pub crouch_held: bool,
    pub crawl_held: bool,
    pub jump_just_pressed: bool,
}
