use async_trait::async_trait;
use gridmon_battle::{GridPos, Hit};

use crate::event::GameEvent;
use crate::progress::RewardOption;
use crate::scene::SceneKind;

/// Trait for reacting to game events.
///
/// Implement this trait to drive a presentation layer or a bot. All methods
/// have default no-op implementations, so you only need to implement the
/// events you care about.
///
/// # Example
///
/// ```ignore
/// struct Hud;
///
/// #[async_trait]
/// impl GameHandler for Hud {
///     async fn on_round_started(&mut self, round: u32, player: &str, enemy: &str) {
///         println!("Round {round}: {player} vs {enemy}");
///     }
/// }
/// ```
#[async_trait]
pub trait GameHandler: Send {
    /// Called after the active scene switched.
    async fn on_scene_changed(&mut self, from: SceneKind, to: SceneKind) {
        let _ = (from, to);
    }

    /// Called when a battle round begins.
    async fn on_round_started(&mut self, round: u32, player: &str, enemy: &str) {
        let _ = (round, player, enemy);
    }

    /// Called when the player steps to a new tile.
    async fn on_player_moved(&mut self, from: GridPos, to: GridPos) {
        let _ = (from, to);
    }

    /// Called when a shot connects with the enemy.
    async fn on_hit(&mut self, hit: &Hit) {
        let _ = hit;
    }

    /// Called when the enemy's HP reaches zero.
    async fn on_enemy_fainted(&mut self, name: &str) {
        let _ = name;
    }

    /// Called when the reward screen opens.
    async fn on_rewards_offered(&mut self, options: &[RewardOption]) {
        let _ = options;
    }

    /// Called for every event, after any specific method above.
    async fn on_event(&mut self, event: &GameEvent) {
        let _ = event;
    }

    /// Called when a key could not be applied. Returning `false` stops the runner.
    async fn on_error(&mut self, error: &crate::GameError) -> bool {
        let _ = error;
        true
    }
}
