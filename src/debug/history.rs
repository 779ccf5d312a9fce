//! Ring buffer of recent controller ticks.

use bevy::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;

use crate::locomotion::{LocomotionState, MoveState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickRecord {
    pub time: f32,
    pub state: MoveState,
    pub speed: f32,
    pub vertical_speed: f32,
    pub yaw_degrees: f32,
    pub grounded: bool,
    pub position: [f32; 3],
}

impl TickRecord {
    pub fn capture(time: f32, state: &LocomotionState, grounded: bool, position: Vec3) -> Self {
        let (yaw, _, _) = state.facing.to_euler(EulerRot::YXZ);
        Self {
            time,
            state: state.state,
            speed: state.speed,
            vertical_speed: state.vertical_speed,
            yaw_degrees: yaw.to_degrees(),
            grounded,
            position: position.to_array(),
        }
    }
}

#[derive(Resource, Debug)]
pub struct TickHistory {
    records: VecDeque<TickRecord>,
    capacity: usize,
}

impl Default for TickHistory {
    fn default() -> Self {
        Self::with_capacity(600)
    }
}

impl TickHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, record: TickRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickRecord> {
        self.records.iter()
    }

    /// Oldest record first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let records: Vec<&TickRecord> = self.records.iter().collect();
        serde_json::to_string_pretty(&records)
    }
}
