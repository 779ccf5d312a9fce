//! Locomotion domain: entity markers.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;
