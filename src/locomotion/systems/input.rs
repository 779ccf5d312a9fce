//! Locomotion domain: keyboard sampling.

use bevy::prelude::*;

use crate::locomotion::LocomotionInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.direction = Vec2::new(x, y);
    input.run_modifier = keyboard.pressed(KeyCode::ShiftLeft);
    input.crouch_held = keyboard.pressed(KeyCode::KeyC);
    input.crawl_held = keyboard.pressed(KeyCode::ControlLeft);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
}
