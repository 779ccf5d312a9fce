//! Debug tooling for tuning locomotion by feel.
//!
//! Features:
//! - Log every movement state transition
//! - F3: log a snapshot of the player's controller and animator
//! - F4: write the recent tick history to `logs/locomotion_trace.json`

mod history;

pub use history::{TickHistory, TickRecord};

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::locomotion::{Animator, GroundPlaneBody, LocomotionController, LocomotionSet, MoveState, Player};

pub const TRACE_PATH: &str = "logs/locomotion_trace.json";

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickHistory>().add_systems(
            Update,
            (record_ticks, log_state_transitions, handle_debug_hotkeys)
                .chain()
                .after(LocomotionSet),
        );
    }
}

fn record_ticks(
    mut history: ResMut<TickHistory>,
    time: Res<Time>,
    query: Query<(&LocomotionController, &GroundPlaneBody, &Transform), With<Player>>,
) {
    for (controller, body, transform) in &query {
        history.push(TickRecord::capture(
            time.elapsed_secs(),
            controller.state(),
            body.grounded,
            transform.translation,
        ));
    }
}

fn log_state_transitions(
    mut last: Local<Option<MoveState>>,
    query: Query<&LocomotionController, With<Player>>,
) {
    let Ok(controller) = query.single() else {
        return;
    };
    let state = controller.state().state;
    if *last != Some(state) {
        if let Some(previous) = *last {
            info!("[DEBUG] {} -> {}", previous.label(), state.label());
        }
        *last = Some(state);
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    history: Res<TickHistory>,
    query: Query<(&LocomotionController, &Animator), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        for (controller, animator) in &query {
            let state = controller.state();
            info!(
                "[DEBUG] state={} speed={:.2} vertical={:.2} params={:?}",
                state.state.label(),
                state.speed,
                state.vertical_speed,
                animator.params()
            );
        }
    }

    if keyboard.just_pressed(KeyCode::F4) {
        match write_trace(&history, Path::new(TRACE_PATH)) {
            Ok(()) => info!("[DEBUG] Wrote {} ticks to {}", history.len(), TRACE_PATH),
            Err(e) => warn!("[DEBUG] Could not write {}: {}", TRACE_PATH, e),
        }
    }
}

fn write_trace(history: &TickHistory, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = history.to_json()?;
    fs::write(path, json)
}
