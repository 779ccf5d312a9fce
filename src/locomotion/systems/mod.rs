//! Locomotion domain: system modules for per-frame updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{sync_tuning, tick_locomotion};
