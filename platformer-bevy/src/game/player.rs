//! Keyboard input for the player body

use bevy::prelude::*;

use platformer::InputFrame;

use super::PendingInput;

/// Sample the keyboard into this frame's input flags.
///
/// Arrow keys or A/D move, Space or Up jumps. Holding both directions
/// resolves to right.
pub fn read_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingInput>,
) {
    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    let jump = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::ArrowUp);

    pending.0 = InputFrame::from_keys(left, right, jump);
}

/// Close the window on Escape
pub fn exit_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, quitting");
        exit.send(AppExit::Success);
    }
}
