//! Engine audio domain: sampling, mixing and sink updates.

use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;

use crate::engine_audio::{
    EngineAudio, EngineAudioTuning, EngineChannel, EngineSoundMixer, TrackedMotion, signed_speed,
};

pub(crate) fn track_motion(time: Res<Time>, mut query: Query<(&Transform, &mut TrackedMotion)>) {
    let dt = time.delta_secs();
    for (transform, mut motion) in &mut query {
        motion.observe(transform.translation, dt);
    }
}

pub(crate) fn sync_curves(tuning: Res<EngineAudioTuning>, mut mixers: Query<&mut EngineSoundMixer>) {
    if !tuning.is_changed() {
        return;
    }
    for mut mixer in &mut mixers {
        mixer.set_curves(tuning.curves);
    }
}

pub(crate) fn mix_engine_audio(
    time: Res<Time>,
    targets: Query<(&Transform, &TrackedMotion)>,
    mut mixers: Query<(&EngineAudio, &mut EngineSoundMixer)>,
) {
    let elapsed = time.elapsed_secs();
    for (engine, mut mixer) in &mut mixers {
        // Heading is local +Z, matching the locomotion facing convention.
        let speed = match targets.get(engine.target) {
            Ok((transform, motion)) => signed_speed(motion.velocity, transform.rotation * Vec3::Z),
            Err(_) => 0.0,
        };
        mixer.tick(speed, elapsed);
    }
}

pub(crate) fn apply_channel_levels(
    mixers: Query<&EngineSoundMixer>,
    mut channels: Query<(&EngineChannel, &mut AudioSink)>,
) {
    for (channel, mut sink) in &mut channels {
        let Ok(mixer) = mixers.get(channel.owner) else {
            continue;
        };
        let levels = mixer.frame().channel(channel.kind);
        sink.set_volume(Volume::Linear(levels.volume));
        sink.set_speed(levels.pitch);
    }
}
