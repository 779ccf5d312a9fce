//! Engine audio domain: speed-to-channel mixing curves.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Upper endpoints of the running and reverse curves.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineCurves {
    /// Range 0.1..=1.0
    pub running_max_volume: f32,
    /// Range 0.1..=2.0
    pub running_max_pitch: f32,
    /// Range 0.1..=1.0
    pub reverse_max_volume: f32,
    /// Range 0.1..=2.0
    pub reverse_max_pitch: f32,
}

impl Default for EngineCurves {
    fn default() -> Self {
        Self {
            running_max_volume: 1.0,
            running_max_pitch: 1.0,
            reverse_max_volume: 0.5,
            reverse_max_pitch: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelLevels {
    pub volume: f32,
    pub pitch: f32,
}

impl Default for ChannelLevels {
    fn default() -> Self {
        Self {
            volume: 0.0,
            pitch: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChannelKind {
    Idle,
    Running,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EngineSoundFrame {
    pub idle: ChannelLevels,
    pub running: ChannelLevels,
    pub reverse: ChannelLevels,
}

impl EngineSoundFrame {
    pub fn channel(&self, kind: ChannelKind) -> ChannelLevels {
        match kind {
            ChannelKind::Idle => self.idle,
            ChannelKind::Running => self.running,
            ChannelKind::Reverse => self.reverse,
        }
    }
}

/// Maps a signed speed to channel levels. Negative speed means reversing.
///
/// Each branch only writes the channels it owns; the rest keep the value
/// from the previous tick.
#[derive(Component, Debug, Clone)]
pub struct EngineSoundMixer {
    curves: EngineCurves,
    frame: EngineSoundFrame,
}

impl EngineSoundMixer {
    pub fn new(curves: EngineCurves) -> Self {
        Self {
            curves,
            frame: EngineSoundFrame::default(),
        }
    }

    pub fn set_curves(&mut self, curves: EngineCurves) {
        self.curves = curves;
    }

    pub fn frame(&self) -> &EngineSoundFrame {
        &self.frame
    }

    /// `elapsed` is total running time in seconds and only drives the pitch wobble.
    pub fn tick(&mut self, speed: f32, elapsed: f32) -> EngineSoundFrame {
        let curves = self.curves;
        let wobble = elapsed.sin() * 0.1;
        let frame = &mut self.frame;

        frame.idle.volume = lerp(0.6, 0.0, speed * 4.0);

        if speed < 0.0 {
            frame.running.volume = 1.0;
            frame.reverse.volume = lerp(0.1, curves.reverse_max_volume, -speed * 1.2);
            frame.reverse.pitch = lerp(0.1, curves.reverse_max_pitch, -speed + wobble);
        } else {
            frame.reverse.volume = 1.0;
            frame.running.volume = lerp(0.1, curves.running_max_volume, speed * 1.2);
            frame.running.pitch = lerp(0.3, curves.running_max_pitch, speed + wobble);
        }

        *frame
    }
}

/// Linear interpolation with `t` clamped to 0..=1.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Speed magnitude, negated when `velocity` points against `forward`.
pub fn signed_speed(velocity: Vec3, forward: Vec3) -> f32 {
    let magnitude = velocity.length();
    if velocity.dot(forward) < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
