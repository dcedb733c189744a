//! Battle round

use gridmon_battle::{
    Arena, ArenaEvent, BattlePokemon, Direction, FireOutcome, GridLayout, Move, MoveCategory,
    MoveOutcome, Type,
};
use tracing::{debug, info};

use gridmon_roster::Species;

use super::{SceneEnv, SceneKind};
use crate::GameError;
use crate::event::GameEvent;
use crate::progress::GameProgress;

/// Power the base projectile damage is calibrated against
pub const REFERENCE_POWER: u16 = 40;

/// Shot used until a move reward has been claimed
pub fn buster(move_type: Type) -> Move {
    Move::new("buster", "Buster", move_type, MoveCategory::Special, REFERENCE_POWER)
        .with_description("A plain energy shot.")
}

/// Damage carried by one shot before type effectiveness
pub fn shot_damage(base_damage: u32, player_power: f32, move_power: u16) -> u32 {
    let scaled = base_damage as f32 * player_power * move_power as f32 / REFERENCE_POWER as f32;
    scaled.round().max(0.0) as u32
}

#[derive(Debug, Clone)]
pub struct BattleState {
    pub round: u32,
    pub arena: Arena,
}

impl BattleState {
    /// Set up a round for `species` against a random enemy. Only the rng in
    /// `env` is touched, so a failure leaves the game context as it was.
    pub(crate) fn start(
        env: &mut SceneEnv<'_>,
        species: &Species,
        progress: &GameProgress,
        events: &mut Vec<GameEvent>,
    ) -> Result<Self, GameError> {
        let config = env.config;
        let level = config.battle.level;
        let round = progress.current_round;
        let difficulty = progress.difficulty_multiplier(config.progression.difficulty_scaling);

        let player_data = species.to_pokemon_data();
        let shot = progress
            .equipped_move()
            .cloned()
            .unwrap_or_else(|| buster(player_data.types.primary()));
        let player = BattlePokemon::new(player_data, level, config.battle.arena.player_start)
            .with_moves(vec![shot]);

        let mut enemy_data = env.roster.random(&mut *env.rng).to_pokemon_data();
        enemy_data.base_stats = enemy_data.base_stats.scaled(difficulty);
        let enemy = BattlePokemon::new(enemy_data, level, config.battle.arena.enemy_start);

        let layout = GridLayout::new(
            &config.grid,
            config.display.width as f32,
            config.display.height as f32,
        );
        let arena = Arena::new(
            &config.grid,
            layout,
            player,
            enemy,
            config.battle.arena.clone(),
        )?;

        info!(
            round,
            player = arena.player.name(),
            enemy = arena.enemy.name(),
            difficulty,
            "round started"
        );
        events.push(GameEvent::RoundStarted {
            round,
            player: arena.player.name().to_string(),
            enemy: arena.enemy.name().to_string(),
            difficulty,
        });

        Ok(Self { round, arena })
    }

    /// Move fired with Z
    pub fn shot(&self) -> Option<&Move> {
        self.arena.player.active_move()
    }

    pub(crate) fn step_player(&mut self, dir: Direction) -> GameEvent {
        match self.arena.move_player(dir) {
            MoveOutcome::Moved { from, to } => GameEvent::PlayerMoved { from, to },
            MoveOutcome::Blocked { at } => GameEvent::MoveBlocked { at },
        }
    }

    /// Fire the equipped shot. `None` when there is nothing to fire or the
    /// enemy is already down.
    pub(crate) fn fire(&mut self, env: &SceneEnv<'_>) -> Option<GameEvent> {
        let shot = self.shot()?;
        let (move_name, attack_type) = (shot.name.clone(), shot.move_type);
        let damage = shot_damage(
            env.config.battle.projectile_damage,
            env.context.progress.player_power,
            shot.power,
        );
        match self.arena.fire(attack_type, damage) {
            FireOutcome::Fired { row } => Some(GameEvent::ShotFired {
                move_name,
                attack_type,
                row,
                damage,
            }),
            FireOutcome::CoolingDown { remaining_ms } => {
                Some(GameEvent::ShotCoolingDown { remaining_ms })
            }
            FireOutcome::TargetDown => None,
        }
    }

    pub(crate) fn tick(&mut self, dt_ms: u32, env: &SceneEnv<'_>) -> Vec<GameEvent> {
        let chart = env.config.chart.table();
        let mut events = Vec::new();

        for event in self.arena.tick(dt_ms, chart) {
            match event {
                ArenaEvent::Hit(hit) => {
                    events.push(GameEvent::Hit(hit));
                    if hit.fainted {
                        let name = self.arena.enemy.name().to_string();
                        info!(round = self.round, enemy = %name, "enemy fainted");
                        events.push(GameEvent::EnemyFainted { name });
                    }
                }
                ArenaEvent::Missed { row } => events.push(GameEvent::Missed { row }),
            }
        }

        if !events.is_empty() {
            debug!(scene = %SceneKind::Battle, count = events.len(), "tick produced events");
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_damage_reference_power() {
        assert_eq!(shot_damage(10, 1.0, 40), 10);
        assert_eq!(shot_damage(10, 1.0, 60), 15);
        assert_eq!(shot_damage(10, 1.2, 40), 12);
        assert_eq!(shot_damage(10, 1.0, 15), 4);
    }

    #[test]
    fn test_buster_matches_type() {
        let shot = buster(Type::Electric);
        assert_eq!(shot.move_type, Type::Electric);
        assert_eq!(shot.power, REFERENCE_POWER);
    }
}
