//! UI module - debug overlay text

use bevy::prelude::*;

use platformer::game::DebugSnapshot;

use crate::game::Simulation;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, setup_overlay)
            .add_systems(Update, (
                update_overlay.after(crate::game::step_simulation),
                toggle_overlay,
            ));
    }
}

/// Marker for the overlay text block
#[derive(Component)]
struct OverlayText;

/// Spawn the overlay text in the top-left corner, over the overlay panel
fn setup_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(8.0),
            ..default()
        },
        OverlayText,
    ));
}

/// Refresh the overlay from the last step.
///
/// The panel shows wall-clock time since startup rather than the sum of
/// simulated deltas.
fn update_overlay(
    time: Res<Time>,
    sim: Res<Simulation>,
    mut query: Query<(&mut Text, &mut Visibility), With<OverlayText>>,
) {
    let Ok((mut text, mut visibility)) = query.get_single_mut() else {
        return;
    };

    if !sim.world.overlay_enabled() {
        *visibility = Visibility::Hidden;
        return;
    }

    *visibility = Visibility::Inherited;
    let snapshot = DebugSnapshot::capture(&sim.world, time.elapsed_secs_f64());
    text.0 = snapshot.to_string();
}

/// F1 shows or hides the overlay
fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    let enabled = !sim.world.overlay_enabled();
    sim.world.set_overlay(enabled);
    info!("Debug overlay {}", if enabled { "on" } else { "off" });
}
