//! Range checks for loaded tuning values.

use crate::engine_audio::EngineAudioTuning;
use crate::locomotion::LocomotionTuning;

/// A field whose value falls outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub min: f32,
    pub max: Option<f32>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(
                f,
                "{} field '{}' is {} but must be within {}..={}",
                self.source_type, self.field, self.value, self.min, max
            ),
            None => write!(
                f,
                "{} field '{}' is {} but must be at least {}",
                self.source_type, self.field, self.value, self.min
            ),
        }
    }
}

/// Helper macro for checking a value against a range
macro_rules! check_range {
    ($errors:expr, $source_type:expr, $field:literal, $value:expr, $min:expr) => {
        if !($value >= $min) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                value: $value,
                min: $min,
                max: None,
            });
        }
    };
    ($errors:expr, $source_type:expr, $field:literal, $value:expr, $min:expr, $max:expr) => {
        if !($value >= $min && $value <= $max) {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                value: $value,
                min: $min,
                max: Some($max),
            });
        }
    };
}

/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_locomotion(tuning: &LocomotionTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let source = "LocomotionTuning";

    check_range!(errors, source, "walk_speed", tuning.walk_speed, 0.0);
    check_range!(errors, source, "run_speed", tuning.run_speed, 0.0);
    check_range!(errors, source, "crouch_speed", tuning.crouch_speed, 0.0);
    check_range!(errors, source, "crawl_speed", tuning.crawl_speed, 0.0);
    check_range!(errors, source, "jump_height", tuning.jump_height, 0.0);
    check_range!(errors, source, "turn_speed", tuning.turn_speed, 0.0);
    // Zero would freeze speed in place forever.
    check_range!(errors, source, "smooth_speed", tuning.smooth_speed, f32::MIN_POSITIVE);

    errors
}

pub fn validate_engine_audio(tuning: &EngineAudioTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let source = "EngineAudioTuning";
    let curves = &tuning.curves;

    check_range!(errors, source, "running_max_volume", curves.running_max_volume, 0.1, 1.0);
    check_range!(errors, source, "running_max_pitch", curves.running_max_pitch, 0.1, 2.0);
    check_range!(errors, source, "reverse_max_volume", curves.reverse_max_volume, 0.1, 1.0);
    check_range!(errors, source, "reverse_max_pitch", curves.reverse_max_pitch, 0.1, 2.0);

    errors
}
