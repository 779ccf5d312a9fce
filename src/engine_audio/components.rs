//! Engine audio domain: components linking mixers, channels and the bodies they follow.

use bevy::prelude::*;

use crate::engine_audio::ChannelKind;

/// Mixer entity following the motion of `target`.
#[derive(Component, Debug, Clone, Copy)]
pub struct EngineAudio {
    pub target: Entity,
}

/// One looping audio channel fed by the mixer on `owner`.
#[derive(Component, Debug, Clone, Copy)]
pub struct EngineChannel {
    pub owner: Entity,
    pub kind: ChannelKind,
}

/// Velocity estimated from frame-to-frame translation.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct TrackedMotion {
    pub last_position: Option<Vec3>,
    pub velocity: Vec3,
}

impl TrackedMotion {
    pub fn observe(&mut self, position: Vec3, dt: f32) {
        if let Some(last) = self.last_position
            && dt > 0.0
        {
            self.velocity = (position - last) / dt;
        }
        self.last_position = Some(position);
    }
}
