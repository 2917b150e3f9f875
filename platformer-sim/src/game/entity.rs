//! Scene Entities
//!
//! The scene is a fixed, ordered list of three kinds of entity. Each kind
//! has an `update` (called once per step, in list order) and a `draw`
//! (producing a [`DrawCommand`] for the renderer).

use serde::{Serialize, Deserialize};

use crate::core::rect::Rect;
use crate::game::config::Rgba;
use crate::game::input::InputFrame;
use crate::game::stepper::{StepResult, World};

/// Index of an entity in the world's entity list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityHandle(pub usize);

/// Closed set of scene entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    /// The player-controlled kinematic body
    Player,
    /// A static platform, by registration index
    Platform(usize),
    /// Debug overlay panel
    Overlay,
}

/// What the renderer should draw for one entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    /// Entity this command belongs to
    pub handle: EntityHandle,
    /// Entity kind
    pub entity: Entity,
    /// Screen-space rectangle
    pub rect: Rect,
    /// Fill colour
    pub color: Rgba,
}

impl Entity {
    /// Advance this entity by one step.
    pub(crate) fn update(self, world: &mut World, input: InputFrame, dt: f64, result: &mut StepResult) {
        match self {
            Entity::Player => world.step_player(input, dt, result),
            // Platforms are static
            Entity::Platform(_) => {}
            Entity::Overlay => world.capture_overlay(),
        }
    }

    /// Produce this entity's draw command.
    pub fn draw(self, handle: EntityHandle, world: &World) -> DrawCommand {
        let palette = &world.config().palette;
        let (rect, color) = match self {
            Entity::Player => (world.body().bounding_box(), palette.player),
            Entity::Platform(index) => (world.platform_rect(index).unwrap_or_default(), palette.platform),
            Entity::Overlay => (
                Rect::new(0.0, 0.0, palette.overlay_size.x, palette.overlay_size.y),
                palette.overlay,
            ),
        };
        DrawCommand {
            handle,
            entity: self,
            rect,
            color,
        }
    }
}
