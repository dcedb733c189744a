//! Events emitted by a session as it reacts to input and time

use gridmon_battle::{GridPos, Hit, Type};
use gridmon_input::Key;

use crate::progress::RewardOption;
use crate::scene::SceneKind;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SceneChanged {
        from: SceneKind,
        to: SceneKind,
    },
    /// Selection cursor on the select or reward screen moved
    CursorMoved {
        scene: SceneKind,
        index: usize,
    },
    FighterSelected {
        name: String,
    },
    RoundStarted {
        round: u32,
        player: String,
        enemy: String,
        /// Enemy stat multiplier for this round
        difficulty: f32,
    },
    PlayerMoved {
        from: GridPos,
        to: GridPos,
    },
    MoveBlocked {
        at: GridPos,
    },
    ShotFired {
        move_name: String,
        attack_type: Type,
        row: usize,
        damage: u32,
    },
    ShotCoolingDown {
        remaining_ms: u32,
    },
    Hit(Hit),
    Missed {
        row: usize,
    },
    EnemyFainted {
        name: String,
    },
    RewardsOffered {
        options: Vec<RewardOption>,
    },
    RewardClaimed {
        reward: RewardOption,
    },
    /// Key has no meaning in the current scene
    InputIgnored {
        scene: SceneKind,
        key: Key,
    },
}
