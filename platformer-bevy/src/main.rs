//! Platformer 2D - Windowed Host
//!
//! Opens a window the size of the configured screen, feeds keyboard input
//! and the measured frame delta into the simulation, and draws whatever
//! the simulation's draw list says.
//!
//! Usage: `platformer-bevy [CONFIG.json]`

mod game;
mod ui;

use bevy::prelude::*;
use bevy::window::{WindowMode, WindowResolution};

use anyhow::{bail, Context};

use platformer::WorldConfig;

use game::{GamePlugin, Simulation};
use ui::UiPlugin;

fn main() -> anyhow::Result<()> {
    let simulation = load_simulation(std::env::args().nth(1))?;

    let screen = simulation.world.config().screen_size;
    let background = game::palette_color(simulation.world.config().palette.background);

    let exit = App::new()
        // Bevy defaults with a fixed-size window matching the screen
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer".into(),
                resolution: WindowResolution::new(screen.x as f32, screen.y as f32),
                mode: WindowMode::Windowed,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(background))
        .insert_resource(simulation)
        // Our plugins
        .add_plugins((
            GamePlugin,
            UiPlugin,
        ))
        // Startup
        .add_systems(Startup, setup_2d_camera)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {}", code),
    }
}

/// Build the simulation from an optional config path
fn load_simulation(path: Option<String>) -> anyhow::Result<Simulation> {
    let config = match path {
        Some(path) => WorldConfig::load(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => WorldConfig::default(),
    };

    Simulation::new(config).context("invalid world config")
}

/// Plain 2D camera; one world unit per pixel, origin at the window centre
fn setup_2d_camera(mut commands: Commands) {
    commands.spawn(Camera2d);

    info!("Platformer 2D initialized!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let simulation = load_simulation(None).unwrap();
        assert_eq!(simulation.world.step_count(), 0);
    }

    #[test]
    fn test_missing_config_reports_path() {
        let err = load_simulation(Some("/no/such/platformer.json".into())).err().unwrap();
        assert!(format!("{:#}", err).contains("/no/such/platformer.json"));
    }
}
