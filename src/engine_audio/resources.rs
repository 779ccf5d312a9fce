//! Engine audio domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine_audio::EngineCurves;

#[derive(Resource, Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineAudioTuning {
    pub curves: EngineCurves,
    pub clips: EngineClips,
}

/// Asset paths, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineClips {
    /// Played once when the engine is attached.
    pub start: Option<String>,
    pub idle: String,
    pub running: String,
    pub reverse: String,
}

impl Default for EngineClips {
    fn default() -> Self {
        Self {
            start: None,
            idle: "audio/engine_idle.ogg".to_string(),
            running: "audio/engine_running.ogg".to_string(),
            reverse: "audio/engine_reverse.ogg".to_string(),
        }
    }
}
