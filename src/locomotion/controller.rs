//! Locomotion domain: the per-tick movement state machine.
//!
//! One `tick` classifies the movement state, builds camera-relative
//! horizontal velocity, integrates vertical speed and turns the facing
//! toward the direction of travel. It is independent of the ECS; systems
//! wrap it with a [`MotionActuator`] and a [`ParameterSink`].

use bevy::prelude::*;
use serde::Serialize;

use crate::locomotion::{LocomotionTuning, MotionActuator, ParameterSink};

pub const GRAVITY: f32 = 9.87;

/// Fraction of gravity applied downward while grounded so the body keeps touching terrain.
pub const GRAVITY_STICK: f32 = 0.3;

pub const PARAM_SPEED: &str = "speed";
pub const PARAM_JUMP: &str = "jump";
pub const PARAM_CROUCH: &str = "crouch";
pub const PARAM_CRAWL: &str = "crawl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MoveState {
    #[default]
    Idle,
    Walk,
    Crouch,
    /// `crouching` is set when crouch was held too; crawl still owns the state.
    Crawl { crouching: bool },
    Run,
    Jump,
}

impl MoveState {
    /// Crouch and crawl both block jumping and suppress the run branch.
    pub fn is_low(self) -> bool {
        matches!(self, MoveState::Crouch | MoveState::Crawl { .. })
    }

    pub fn label(self) -> &'static str {
        match self {
            MoveState::Idle => "idle",
            MoveState::Walk => "walk",
            MoveState::Crouch => "crouch",
            MoveState::Crawl { .. } => "crawl",
            MoveState::Run => "run",
            MoveState::Jump => "jump",
        }
    }
}

/// Parameters published to the animation sink each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AnimationParams {
    pub speed: f32,
    pub jump: bool,
    pub crouch: bool,
    pub crawl: bool,
}

impl AnimationParams {
    pub fn derive(speed: f32, state: MoveState) -> Self {
        Self {
            speed,
            jump: state == MoveState::Jump,
            crouch: matches!(
                state,
                MoveState::Crouch | MoveState::Crawl { crouching: true }
            ),
            crawl: matches!(state, MoveState::Crawl { .. }),
        }
    }

    pub fn emit(&self, sink: &mut impl ParameterSink) {
        sink.set_float(PARAM_SPEED, self.speed);
        sink.set_bool(PARAM_JUMP, self.jump);
        sink.set_bool(PARAM_CROUCH, self.crouch);
        sink.set_bool(PARAM_CRAWL, self.crawl);
    }
}

/// Everything the controller needs from the outside world for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// x is the horizontal axis, y the forward axis. Normalized by the controller.
    pub direction: Vec2,
    pub run_modifier: bool,
    pub crouch_held: bool,
    pub crawl_held: bool,
    /// True only on the tick the jump key went down.
    pub jump_pressed: bool,
    pub grounded: bool,
    pub dt: f32,
    pub camera_forward: Vec3,
    pub camera_right: Vec3,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            direction: Vec2::ZERO,
            run_modifier: false,
            crouch_held: false,
            crawl_held: false,
            jump_pressed: false,
            grounded: true,
            dt: 0.0,
            camera_forward: Vec3::Z,
            camera_right: Vec3::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionOutput {
    /// Displacement for this tick, already scaled by dt.
    pub displacement: Vec3,
    pub velocity: Vec3,
    pub params: AnimationParams,
    pub facing: Quat,
    pub state: MoveState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionState {
    pub speed: f32,
    pub vertical_speed: f32,
    pub state: MoveState,
    pub facing: Quat,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            speed: 0.0,
            vertical_speed: 0.0,
            state: MoveState::Idle,
            facing: Quat::IDENTITY,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    state: LocomotionState,
}

impl LocomotionController {
    pub fn new(tuning: LocomotionTuning) -> Self {
        Self {
            tuning,
            state: LocomotionState::default(),
        }
    }

    /// Start from an explicit state, e.g. a restored snapshot.
    pub fn with_state(tuning: LocomotionTuning, state: LocomotionState) -> Self {
        Self { tuning, state }
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn set_tuning(&mut self, tuning: LocomotionTuning) {
        self.tuning = tuning;
    }

    pub fn tick(&mut self, input: &TickInput) -> LocomotionOutput {
        let previous = self.state.state;
        let direction = input.direction.normalize_or_zero();
        let moving = direction != Vec2::ZERO;

        self.update_state(input, moving);
        let heading = input.camera_forward * direction.y + input.camera_right * direction.x;
        let horizontal = heading * self.state.speed;
        self.update_vertical(input);
        if moving {
            self.update_facing(heading, input.dt);
        }

        if self.state.state != previous {
            debug!(
                "Locomotion state {} -> {} (speed={:.2}, grounded={})",
                previous.label(),
                self.state.state.label(),
                self.state.speed,
                input.grounded
            );
        }

        let velocity = horizontal + Vec3::Y * self.state.vertical_speed;
        LocomotionOutput {
            displacement: velocity * input.dt,
            velocity,
            params: AnimationParams::derive(self.state.speed, self.state.state),
            facing: self.state.facing,
            state: self.state.state,
        }
    }

    /// Tick, then push the displacement to `actuator` and the parameters to `sink`.
    pub fn drive(
        &mut self,
        input: &TickInput,
        actuator: &mut impl MotionActuator,
        sink: &mut impl ParameterSink,
    ) -> LocomotionOutput {
        let output = self.tick(input);
        actuator.apply_displacement(output.displacement);
        output.params.emit(sink);
        output
    }

    /// Grounded-only classification. Crouch and crawl are checked after the
    /// walk/run branch, so holding either always owns the tick.
    fn update_state(&mut self, input: &TickInput, moving: bool) {
        if !input.grounded {
            return;
        }

        let tuning = self.tuning;
        let mut mode = self.state.state;
        let mut target = None;

        if moving {
            if input.run_modifier {
                target = Some(tuning.walk_speed);
                mode = MoveState::Walk;
            } else if !mode.is_low() {
                target = Some(tuning.run_speed);
                mode = MoveState::Run;
            }

            if !matches!(mode, MoveState::Walk | MoveState::Jump) {
                mode = MoveState::Run;
            }
        } else {
            target = Some(0.0);
            mode = MoveState::Idle;
        }

        if input.crouch_held {
            target = Some(if moving { tuning.crouch_speed } else { 0.0 });
            mode = MoveState::Crouch;
        }

        if input.crawl_held {
            target = Some(if moving { tuning.crawl_speed } else { 0.0 });
            mode = MoveState::Crawl {
                crouching: input.crouch_held,
            };
        }

        // No target: leaving crouch/crawl while moving holds speed for one tick.
        if let Some(target) = target {
            self.state.speed = move_towards(self.state.speed, target, tuning.smooth_speed * input.dt);
        }
        self.state.state = mode;
    }

    fn update_vertical(&mut self, input: &TickInput) {
        if input.grounded {
            self.state.vertical_speed = -GRAVITY * GRAVITY_STICK;

            let mode = self.state.state;
            if input.jump_pressed && mode != MoveState::Jump && !mode.is_low() {
                self.state.vertical_speed = self.tuning.jump_height;
                self.state.state = MoveState::Jump;
                debug!("Jump: vertical_speed={}", self.state.vertical_speed);
            }
        } else {
            self.state.vertical_speed -= GRAVITY * input.dt;
        }
    }

    fn update_facing(&mut self, heading: Vec3, dt: f32) {
        if heading.x == 0.0 && heading.z == 0.0 {
            return;
        }
        let target = Quat::from_rotation_y(heading.x.atan2(heading.z));
        self.state.facing = rotate_towards(self.state.facing, target, self.tuning.turn_speed * dt);
    }
}

/// Step `current` toward `target` by at most `max_delta`, landing exactly on it when close.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Rotate `from` toward `to` by at most `max_degrees`, never past `to`.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let max_step = max_degrees.to_radians();
    if max_step <= 0.0 {
        return from;
    }
    let angle = from.angle_between(to);
    if angle <= max_step {
        return to;
    }
    from.slerp(to, max_step / angle)
}
