//! Headless game flow for gridmon.
//!
//! A [`Session`] walks through boot, character select, battle and reward
//! screens as keys arrive, and emits [`GameEvent`]s for a presentation
//! layer to draw. [`Runner`] wraps a session in an async input loop that
//! dispatches those events to a [`GameHandler`].
//!
//! ```
//! use gridmon_game::{GameConfig, Key, SceneKind, Session};
//! use gridmon_roster::Roster;
//!
//! let mut session = Session::new(GameConfig::default(), Roster::builtin());
//! session.press(Key::Space)?;
//! session.press(Key::Enter)?;
//! assert_eq!(session.scene_kind(), SceneKind::Battle);
//! # Ok::<(), gridmon_game::GameError>(())
//! ```

pub mod config;
mod context;
mod event;
mod handler;
mod progress;
mod runner;
pub mod scene;
mod session;

use gridmon_battle::GridError;
use thiserror::Error;

pub use config::{BattleConfig, ConfigError, DisplayConfig, GameConfig, ProgressionConfig};
pub use context::GameContext;
pub use event::GameEvent;
pub use gridmon_input::Key;
pub use handler::GameHandler;
pub use progress::{GameProgress, RewardOption};
pub use runner::{Input, InputHandle, Runner, channel};
pub use scene::{Scene, SceneKind, next_scene};
pub use session::Session;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Failed to set up battle: {0}")]
    Grid(#[from] GridError),

    #[error("No fighter selected")]
    NoFighterSelected,
}
