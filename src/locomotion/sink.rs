//! Locomotion domain: capability seams between the controller and its host.

use bevy::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Applies a per-tick displacement to a simulated body and reports whether it rests on a surface.
pub trait MotionActuator {
    fn apply_displacement(&mut self, displacement: Vec3);

    fn is_grounded(&self) -> bool;
}

/// Receives named animation/audio parameters for blending outside the controller.
pub trait ParameterSink {
    fn set_float(&mut self, name: &str, value: f32);

    fn set_bool(&mut self, name: &str, value: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ParamValue {
    Float(f32),
    Bool(bool),
}

/// Named parameter table consumed by whatever drives the character's animation graph.
#[derive(Component, Debug, Default, Clone)]
pub struct Animator {
    params: HashMap<String, ParamValue>,
}

impl Animator {
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.params.get(name) {
            Some(ParamValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.params.get(name) {
            Some(ParamValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn params(&self) -> &HashMap<String, ParamValue> {
        &self.params
    }
}

impl ParameterSink for Animator {
    fn set_float(&mut self, name: &str, value: f32) {
        self.params.insert(name.to_string(), ParamValue::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.params.insert(name.to_string(), ParamValue::Bool(value));
    }
}

/// Kinematic body resting on an infinite horizontal plane.
/// `rest_height` is the translation.y at which the body touches the plane.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundPlaneBody {
    pub rest_height: f32,
    pub grounded: bool,
}

impl GroundPlaneBody {
    pub fn new(rest_height: f32) -> Self {
        Self {
            rest_height,
            grounded: true,
        }
    }
}

/// Borrowing adapter that moves a translation against a [`GroundPlaneBody`].
pub struct PlaneActuator<'a> {
    pub translation: &'a mut Vec3,
    pub body: &'a mut GroundPlaneBody,
}

impl MotionActuator for PlaneActuator<'_> {
    fn apply_displacement(&mut self, displacement: Vec3) {
        *self.translation += displacement;
        if self.translation.y <= self.body.rest_height {
            self.translation.y = self.body.rest_height;
            self.body.grounded = true;
        } else {
            self.body.grounded = false;
        }
    }

    fn is_grounded(&self) -> bool {
        self.body.grounded
    }
}
