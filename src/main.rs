mod content;
#[cfg(feature = "dev-tools")]
mod debug;
mod engine_audio;
mod locomotion;
mod scene;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stride".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin,
        scene::ScenePlugin,
        locomotion::LocomotionPlugin,
        engine_audio::EngineAudioPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
