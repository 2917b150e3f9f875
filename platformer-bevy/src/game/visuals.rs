//! Visuals - mirror the simulation draw list into sprites

use bevy::prelude::*;

use platformer::game::DrawCommand;
use platformer::Rect;

use super::{palette_color, SceneSprite, Simulation};

// ============================================================================
// COORDINATES
// ============================================================================

/// Place a screen-space rectangle (origin top-left, y down) in Bevy's 2D
/// world (origin at the window centre, y up). Later draw commands sit on
/// top of earlier ones.
pub fn rect_to_transform(rect: Rect, screen: Vec2, order: usize) -> Transform {
    let center = rect.center();
    Transform::from_xyz(
        center.x as f32 - screen.x / 2.0,
        screen.y / 2.0 - center.y as f32,
        order as f32,
    )
}

fn rect_size(rect: Rect) -> Vec2 {
    Vec2::new(rect.w as f32, rect.h as f32)
}

// ============================================================================
// SCENE SPRITES
// ============================================================================

/// Spawn one sprite per draw command
pub fn spawn_scene(mut commands: Commands, sim: Res<Simulation>) {
    let screen = sim.world.config().screen_size.to_f32();
    let screen = Vec2::new(screen.0, screen.1);

    for command in sim.world.draw_list() {
        commands.spawn((
            sprite_for(&command),
            rect_to_transform(command.rect, screen, command.handle.0),
            SceneSprite { handle: command.handle },
            Name::new(format!("{:?}", command.entity)),
        ));
    }

    info!("Scene spawned with {} sprites", sim.world.entities().len());
}

/// Copy the latest draw list onto the sprites
pub fn sync_sprites(
    sim: Res<Simulation>,
    mut query: Query<(&SceneSprite, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let screen = sim.world.config().screen_size.to_f32();
    let screen = Vec2::new(screen.0, screen.1);
    let draw_list = sim.world.draw_list();

    for (scene_sprite, mut transform, mut sprite, mut visibility) in query.iter_mut() {
        // Entities can leave the list (the overlay can be switched off)
        let Some(command) = draw_list.get(scene_sprite.handle.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        *visibility = Visibility::Inherited;
        *transform = rect_to_transform(command.rect, screen, command.handle.0);
        sprite.custom_size = Some(rect_size(command.rect));
        sprite.color = palette_color(command.color);
    }
}

fn sprite_for(command: &DrawCommand) -> Sprite {
    Sprite {
        color: palette_color(command.color),
        custom_size: Some(rect_size(command.rect)),
        ..default()
    }
}
