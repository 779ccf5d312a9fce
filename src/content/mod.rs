//! Content domain: data-driven tuning loaded from `assets/data/*.ron`.

mod loader;
mod validation;

pub use loader::{ContentLoadError, load_single_file, parse_ron};
pub use validation::{ValidationError, validate_engine_audio, validate_locomotion};

use bevy::prelude::*;
use std::env;
use std::path::{Path, PathBuf};

use crate::engine_audio::EngineAudioTuning;
use crate::locomotion::LocomotionTuning;

pub const DATA_DIR_ENV: &str = "STRIDE_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "assets/data";

pub const LOCOMOTION_FILE: &str = "locomotion.ron";
pub const ENGINE_AUDIO_FILE: &str = "engine_audio.ron";

/// Where a tuning resource came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningSource {
    File,
    Default,
}

pub fn data_dir() -> PathBuf {
    env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Load and validate a tuning file, falling back to `T::default()` on any failure.
pub fn load_tuning<T>(path: &Path, validate: fn(&T) -> Vec<ValidationError>) -> (T, TuningSource)
where
    T: Default + for<'de> serde::Deserialize<'de>,
{
    let tuning = match load_single_file::<T>(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return (T::default(), TuningSource::Default);
        }
    };

    let errors = validate(&tuning);
    if errors.is_empty() {
        info!("Loaded tuning from {}", path.display());
        return (tuning, TuningSource::File);
    }

    for e in &errors {
        error!("{}: {}", path.display(), e);
    }
    warn!(
        "{} invalid value(s) in {}, using default tuning",
        errors.len(),
        path.display()
    );
    (T::default(), TuningSource::Default)
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let dir = data_dir();

        let (locomotion, _) =
            load_tuning::<LocomotionTuning>(&dir.join(LOCOMOTION_FILE), validate_locomotion);
        let (engine_audio, _) =
            load_tuning::<EngineAudioTuning>(&dir.join(ENGINE_AUDIO_FILE), validate_engine_audio);

        app.insert_resource(locomotion).insert_resource(engine_audio);
    }
}
