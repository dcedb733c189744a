//! A single run of the game, driven by key presses and elapsed time

use gridmon_battle::Move;
use gridmon_input::Key;
use gridmon_roster::{Roster, builtin_moves};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::GameError;
use crate::config::{ConfigError, GameConfig};
use crate::context::GameContext;
use crate::event::GameEvent;
use crate::scene::{Scene, SceneEnv, SceneKind};

pub struct Session {
    config: GameConfig,
    roster: Roster,
    moves: Vec<Move>,
    rng: StdRng,
    context: GameContext,
    scene: Scene,
}

impl Session {
    /// Start at the boot screen
    pub fn new(config: GameConfig, roster: Roster) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let context = GameContext::new(config.progression.starting_round);
        Self {
            config,
            roster,
            moves: builtin_moves(),
            rng,
            context,
            scene: Scene::Boot,
        }
    }

    /// Validate the config and load its roster
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let roster = config.load_roster()?;
        Ok(Self::new(config, roster))
    }

    /// Replace the move pool rewards are drawn from
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    /// Handle one key press
    pub fn press(&mut self, key: Key) -> Result<Vec<GameEvent>, GameError> {
        let mut env = SceneEnv {
            config: &self.config,
            roster: &self.roster,
            moves: &self.moves,
            rng: &mut self.rng,
            context: &mut self.context,
        };
        let mut events = Vec::new();
        self.scene.on_key(key, &mut env, &mut events)?;

        for event in &events {
            if let GameEvent::SceneChanged { from, to } = event {
                info!(%from, %to, round = self.context.progress.current_round, "scene changed");
            }
        }
        debug!(%key, scene = %self.scene.kind(), count = events.len(), "key handled");
        Ok(events)
    }

    /// Advance the current scene by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: u32) -> Vec<GameEvent> {
        let env = SceneEnv {
            config: &self.config,
            roster: &self.roster,
            moves: &self.moves,
            rng: &mut self.rng,
            context: &mut self.context,
        };
        self.scene.tick(dt_ms, &env)
    }
}
