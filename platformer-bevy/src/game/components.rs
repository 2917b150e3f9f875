//! Components linking Bevy sprites to simulation entities

use bevy::prelude::*;

use platformer::game::EntityHandle;

/// Sprite that mirrors one entry of the simulation's draw list
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneSprite {
    pub handle: EntityHandle,
}
