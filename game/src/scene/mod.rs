//! Scene state machine
//!
//! Four screens, switched by keys according to [`next_scene`]. A scene
//! owns its local state; anything that survives a switch lives in
//! [`GameContext`].

mod battle;
mod reward;
mod select;

pub use battle::{BattleState, REFERENCE_POWER, buster, shot_damage};
pub use reward::{MOVE_OFFERS, RewardState, roll_offers};
pub use select::{SELECT_COLUMNS, SelectCursor, SelectState};

use gridmon_battle::{Direction, Move};
use gridmon_input::Key;
use gridmon_roster::Roster;
use rand::rngs::StdRng;
use tracing::debug;

use crate::GameError;
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::event::GameEvent;
use crate::progress::GameProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Boot,
    CharacterSelect,
    Battle,
    Reward,
}

impl SceneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneKind::Boot => "boot",
            SceneKind::CharacterSelect => "character_select",
            SceneKind::Battle => "battle",
            SceneKind::Reward => "reward",
        }
    }
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scene switches triggered by a key. Every pair not listed is handled
/// inside the current scene or ignored.
pub fn next_scene(from: SceneKind, key: Key) -> Option<SceneKind> {
    match (from, key) {
        (SceneKind::Boot, Key::Space) => Some(SceneKind::CharacterSelect),
        (SceneKind::CharacterSelect, Key::Space | Key::Enter) => Some(SceneKind::Battle),
        (SceneKind::Battle, Key::Enter) => Some(SceneKind::Reward),
        (SceneKind::Reward, Key::Space) => Some(SceneKind::Battle),
        _ => None,
    }
}

fn arrow_direction(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Borrowed session state a scene works against
pub(crate) struct SceneEnv<'a> {
    pub config: &'a GameConfig,
    pub roster: &'a Roster,
    pub moves: &'a [Move],
    pub rng: &'a mut StdRng,
    pub context: &'a mut GameContext,
}

#[derive(Debug, Clone)]
pub enum Scene {
    Boot,
    CharacterSelect(SelectState),
    Battle(Box<BattleState>),
    Reward(RewardState),
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Boot => SceneKind::Boot,
            Scene::CharacterSelect(_) => SceneKind::CharacterSelect,
            Scene::Battle(_) => SceneKind::Battle,
            Scene::Reward(_) => SceneKind::Reward,
        }
    }

    /// React to a key, switching scenes when the transition table says so.
    /// On error the current scene is left as it was.
    pub(crate) fn on_key(
        &mut self,
        key: Key,
        env: &mut SceneEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        let from = self.kind();
        match next_scene(from, key) {
            Some(to) => {
                let mut entered = vec![GameEvent::SceneChanged { from, to }];
                *self = self.leave(env, &mut entered)?;
                events.append(&mut entered);
            }
            None => self.handle_local(key, env, events),
        }
        Ok(())
    }

    /// Advance time in the current scene
    pub(crate) fn tick(&mut self, dt_ms: u32, env: &SceneEnv<'_>) -> Vec<GameEvent> {
        match self {
            Scene::Battle(state) => state.tick(dt_ms, env),
            _ => Vec::new(),
        }
    }

    /// Build the scene that follows this one in the transition table
    fn leave(&self, env: &mut SceneEnv<'_>, events: &mut Vec<GameEvent>) -> Result<Scene, GameError> {
        match self {
            Scene::Boot => Ok(Scene::CharacterSelect(SelectState::new(env.roster.len()))),
            Scene::CharacterSelect(state) => {
                let species = env
                    .roster
                    .get(state.cursor.index())
                    .cloned()
                    .ok_or(GameError::NoFighterSelected)?;
                let starting_round = env.config.progression.starting_round;
                events.push(GameEvent::FighterSelected {
                    name: species.name.clone(),
                });
                let battle =
                    BattleState::start(env, &species, &GameProgress::new(starting_round), events)?;
                env.context.select(species, starting_round);
                Ok(Scene::Battle(Box::new(battle)))
            }
            Scene::Battle(state) => {
                let offers = roll_offers(
                    &mut *env.rng,
                    env.moves,
                    u32::from(env.config.progression.stat_boost_amount),
                );
                events.push(GameEvent::RewardsOffered {
                    options: offers.clone(),
                });
                Ok(Scene::Reward(RewardState::new(state.round, offers)))
            }
            Scene::Reward(state) => {
                let species = env
                    .context
                    .selected()
                    .cloned()
                    .ok_or(GameError::NoFighterSelected)?;
                let mut progress = env.context.progress.clone();
                if let Some(reward) = state.highlighted().cloned() {
                    events.push(GameEvent::RewardClaimed {
                        reward: reward.clone(),
                    });
                    progress.claim(reward);
                }
                progress.advance_round();
                let battle = BattleState::start(env, &species, &progress, events)?;
                env.context.progress = progress;
                Ok(Scene::Battle(Box::new(battle)))
            }
        }
    }

    fn handle_local(&mut self, key: Key, env: &SceneEnv<'_>, events: &mut Vec<GameEvent>) {
        let scene = self.kind();
        let handled = match (self, arrow_direction(key)) {
            (Scene::CharacterSelect(state), Some(dir)) => {
                if state.cursor.step(dir) {
                    events.push(GameEvent::CursorMoved {
                        scene,
                        index: state.cursor.index(),
                    });
                }
                true
            }
            (Scene::Battle(state), Some(dir)) => {
                events.push(state.step_player(dir));
                true
            }
            (Scene::Battle(state), None) if key == Key::Z => match state.fire(env) {
                Some(event) => {
                    events.push(event);
                    true
                }
                None => false,
            },
            (Scene::Reward(state), Some(dir @ (Direction::Left | Direction::Right))) => {
                if state.shift(dir == Direction::Right) {
                    events.push(GameEvent::CursorMoved {
                        scene,
                        index: state.cursor(),
                    });
                }
                true
            }
            _ => false,
        };

        if !handled {
            debug!(%scene, %key, "input ignored");
            events.push(GameEvent::InputIgnored { scene, key });
        }
    }
}
