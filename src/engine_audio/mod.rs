//! Engine audio domain: speed-driven idle/running/reverse channel mixing.

mod bootstrap;
mod components;
mod mixer;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{EngineAudio, EngineChannel, TrackedMotion};
pub use mixer::{
    ChannelKind, ChannelLevels, EngineCurves, EngineSoundFrame, EngineSoundMixer, lerp,
    signed_speed,
};
pub use resources::{EngineAudioTuning, EngineClips};

use bevy::prelude::*;

use crate::engine_audio::bootstrap::attach_engine_audio;
use crate::engine_audio::systems::{apply_channel_levels, mix_engine_audio, sync_curves, track_motion};
use crate::locomotion::LocomotionSet;

pub struct EngineAudioPlugin;

impl Plugin for EngineAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EngineAudioTuning>()
            .add_systems(PostStartup, attach_engine_audio)
            .add_systems(
                Update,
                (track_motion, sync_curves, mix_engine_audio, apply_channel_levels)
                    .chain()
                    .after(LocomotionSet),
            );
    }
}
