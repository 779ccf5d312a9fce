//! Engine audio domain: attaches an engine to the player.

use bevy::prelude::*;

use crate::engine_audio::{
    ChannelKind, EngineAudio, EngineAudioTuning, EngineChannel, EngineSoundMixer, TrackedMotion,
};
use crate::locomotion::Player;

pub(crate) fn attach_engine_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<EngineAudioTuning>,
    players: Query<Entity, With<Player>>,
) {
    let Ok(target) = players.single() else {
        warn!("No player to attach engine audio to");
        return;
    };

    commands.entity(target).insert(TrackedMotion::default());

    let owner = commands
        .spawn((
            Name::new("EngineAudio"),
            EngineAudio { target },
            EngineSoundMixer::new(tuning.curves),
        ))
        .id();

    let clips = &tuning.clips;
    for (kind, path) in [
        (ChannelKind::Idle, &clips.idle),
        (ChannelKind::Running, &clips.running),
        (ChannelKind::Reverse, &clips.reverse),
    ] {
        commands.spawn((
            EngineChannel { owner, kind },
            AudioPlayer::new(asset_server.load(path.clone())),
            PlaybackSettings::LOOP.with_volume(bevy::audio::Volume::Linear(0.0)),
            ChildOf(owner),
        ));
    }

    if let Some(start) = &clips.start {
        commands.spawn((
            AudioPlayer::new(asset_server.load(start.clone())),
            PlaybackSettings::DESPAWN,
        ));
    }

    info!(
        "Engine audio attached to {:?}: idle={}, running={}, reverse={}",
        target, clips.idle, clips.running, clips.reverse
    );
}
