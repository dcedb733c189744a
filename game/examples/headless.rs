//! Drive a session from a key script and log what happens.
//!
//! ```text
//! cargo run -p gridmon-game --example headless -- [script.txt] [config.toml]
//! ```
//!
//! Set `RUST_LOG=gridmon_game=debug` for per-key logging.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use gridmon_battle::Hit;
use gridmon_game::{GameConfig, GameHandler, RewardOption, SceneKind, Session, channel};
use gridmon_input::parse_script;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_SCRIPT: &str = "\
space
right
enter
z
wait 1500
up
z
wait 1500
enter
space
z
wait 1500
";

struct Logger;

#[async_trait]
impl GameHandler for Logger {
    async fn on_scene_changed(&mut self, from: SceneKind, to: SceneKind) {
        info!("{from} -> {to}");
    }

    async fn on_round_started(&mut self, round: u32, player: &str, enemy: &str) {
        info!("Round {round}: {player} vs {enemy}");
    }

    async fn on_hit(&mut self, hit: &Hit) {
        info!(
            "{} hit for {} (x{}), enemy at {} HP",
            hit.attack_type, hit.damage, hit.multiplier, hit.enemy_hp
        );
    }

    async fn on_enemy_fainted(&mut self, name: &str) {
        info!("{name} fainted");
    }

    async fn on_rewards_offered(&mut self, options: &[RewardOption]) {
        for (i, option) in options.iter().enumerate() {
            info!("  [{i}] {}", option.description());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let script = match args.next() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script {path}"))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let config = match args.next() {
        Some(path) => GameConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load config {path}"))?,
        None => GameConfig::default(),
    };

    let steps = parse_script(&script)?;
    let session = Session::from_config(config)?;
    let (mut runner, handle) = channel(session);

    handle.play(steps)?;
    drop(handle);

    let mut logger = Logger;
    runner.run(&mut logger).await?;

    let progress = &runner.session().context().progress;
    info!(
        "Finished on round {} with {} reward(s), power {:.2}",
        progress.current_round,
        progress.selected_rewards.len(),
        progress.player_power
    );
    Ok(())
}
