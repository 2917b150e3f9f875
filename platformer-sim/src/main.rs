//! Platformer Headless Runner
//!
//! Runs a scripted session without a window, logs the debug overlay at
//! intervals and verifies the run replays bit-identically. A saved
//! recording can be replayed instead of the script.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use platformer::{
    core::hash::hash_trajectory,
    game::{
        snapshot::DebugSnapshot,
        stepper::{replay, replay_trajectory, World},
        StepEvent,
    },
    InputFrame, InputRecording, WorldConfig, TARGET_FPS, VERSION,
};

/// Length of the scripted session, in steps.
const SESSION_STEPS: u32 = 600;

#[derive(Parser)]
#[command(name = "platformer-sim")]
#[command(about = "Headless platformer session with determinism check")]
#[command(version)]
struct Args {
    /// World config as JSON (defaults to the built-in layout)
    config: Option<PathBuf>,

    /// Save the scripted session's input recording to this file
    #[arg(long, value_name = "OUT")]
    record: Option<PathBuf>,

    /// Replay a saved recording instead of the scripted session
    #[arg(long, value_name = "FILE", conflicts_with = "record")]
    replay: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Platformer Sim v{}", VERSION);
    info!("Target FPS: {}", TARGET_FPS);

    let config = match &args.config {
        Some(path) => WorldConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WorldConfig::default(),
    };

    let recording = match &args.replay {
        Some(path) => {
            let recording = InputRecording::load(path)
                .with_context(|| format!("reading recording from {}", path.display()))?;
            replay_session(config.clone(), &recording)?;
            recording
        }
        None => {
            let recording = run_session(config.clone())?;
            if let Some(path) = &args.record {
                recording
                    .save(path)
                    .with_context(|| format!("writing recording to {}", path.display()))?;
                info!(
                    "Recording written to {} ({} steps, {:.3}s)",
                    path.display(),
                    recording.len(),
                    recording.duration()
                );
            }
            recording
        }
    };

    verify_replay(config, &recording)
}

/// Scripted input for step `t`: walk right, hop, walk back left.
fn scripted_input(t: u32) -> InputFrame {
    let phase = t % 240;
    let left = (120..200).contains(&phase);
    let right = phase < 100;
    let jump = phase == 40 || phase == 160;
    InputFrame::from_keys(left, right, jump)
}

fn run_session(config: WorldConfig) -> Result<InputRecording> {
    info!("=== Starting Session ===");

    let dt = config.target_dt();
    let mut world = World::try_new(config).context("invalid world config")?;
    let mut recording = InputRecording::new();

    info!(
        "Screen {} over virtual world {}, {} platforms",
        world.config().screen_size,
        world.config().virtual_size,
        world.platforms().len()
    );
    for (index, platform) in world.platforms().iter().enumerate() {
        info!("Platform {}: {:?}", index, platform.world_rect());
    }

    let mut total_events = 0;
    for t in 0..SESSION_STEPS {
        let input = scripted_input(t);
        // The first frame has no previous frame to measure against
        let step_dt = if t == 0 { 0.0 } else { dt };

        recording.record(input, step_dt);
        let result = world.step(input, step_dt);
        total_events += result.events.len();

        for event in &result.events {
            match event {
                StepEvent::Jumped | StepEvent::Landed { .. } => {
                    info!("Step {}: {}", world.step_count(), event);
                }
                _ => {}
            }
        }

        if t % 120 == 0 {
            let snapshot = world
                .snapshot()
                .cloned()
                .unwrap_or_else(|| DebugSnapshot::capture(&world, world.elapsed()));
            info!("Step {}: {}", snapshot.step, snapshot.lines().join(", "));
        }
    }

    info!("=== Session Results ===");
    info!("Final position: {}", world.body().position());
    info!("Camera: {}", world.camera().position());
    info!("Total events: {}", total_events);
    info!("Final State Hash: {}", hex::encode(world.compute_hash()));

    Ok(recording)
}

fn replay_session(config: WorldConfig, recording: &InputRecording) -> Result<()> {
    info!("=== Replaying Recording ===");
    if recording.is_empty() {
        bail!("recording has no steps");
    }
    World::try_new(config.clone()).context("invalid world config")?;

    let (world, events) = replay(config, recording);
    let landings = events
        .iter()
        .filter(|e| matches!(e, StepEvent::Landed { .. }))
        .count();

    info!(
        "Replayed {} steps ({:.3}s): {} events, {} landings",
        recording.len(),
        recording.duration(),
        events.len(),
        landings
    );
    info!("Final position: {}", world.body().position());
    info!("Final State Hash: {}", hex::encode(world.compute_hash()));
    Ok(())
}

fn verify_replay(config: WorldConfig, recording: &InputRecording) -> Result<()> {
    info!("=== Verifying Determinism ===");

    let first = hash_trajectory(replay_trajectory(config.clone(), recording));
    let second = hash_trajectory(replay_trajectory(config, recording));

    info!("Trajectory Hash: {}", hex::encode(first));
    info!("Replay Hash:     {}", hex::encode(second));

    if first == second {
        info!("DETERMINISM VERIFIED: Hashes match!");
        Ok(())
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
        bail!("replay diverged from recorded trajectory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_config_and_record() {
        let args = Args::try_parse_from(["platformer-sim", "world.json", "--record", "out.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("world.json")));
        assert_eq!(args.record, Some(PathBuf::from("out.json")));
        assert!(args.replay.is_none());
    }

    #[test]
    fn test_args_help_prints_usage() {
        let err = Args::try_parse_from(["platformer-sim", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--replay"));
    }

    #[test]
    fn test_args_record_conflicts_with_replay() {
        let err = Args::try_parse_from(["platformer-sim", "--record", "a.json", "--replay", "b.json"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_saved_session_replays_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let recording = run_session(WorldConfig::default()).unwrap();
        recording.save(&path).unwrap();
        let loaded = InputRecording::load(&path).unwrap();

        assert_eq!(loaded.len(), SESSION_STEPS as usize);
        assert_eq!(
            hash_trajectory(replay_trajectory(WorldConfig::default(), &loaded)),
            hash_trajectory(replay_trajectory(WorldConfig::default(), &recording)),
        );
        replay_session(WorldConfig::default(), &loaded).unwrap();
        verify_replay(WorldConfig::default(), &loaded).unwrap();
    }

    #[test]
    fn test_empty_recording_is_rejected() {
        assert!(replay_session(WorldConfig::default(), &InputRecording::new()).is_err());
    }
}
