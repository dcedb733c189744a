//! Arena - live state of one battle round
//!
//! Holds the board, both battlers and any projectiles in flight. Battlers
//! are confined to their own half of the board; shots travel along a row
//! and hit the enemy if they sweep across its tile.

mod projectile;

pub use projectile::{DEFAULT_PROJECTILE_DAMAGE, Projectile};

use tracing::debug;

use crate::grid::{BattleGrid, Direction, GridConfig, GridError, GridLayout, GridPos, Side};
use crate::types::{BattlePokemon, EffectivenessTable, Type};

/// Starting tiles and timings for a round
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    pub player_start: GridPos,
    pub enemy_start: GridPos,
    /// Milliseconds between shots
    pub move_cooldown: u32,
    /// Pixels per second
    pub projectile_speed: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            player_start: GridPos::new(0, 1),
            enemy_start: GridPos::new(5, 1),
            move_cooldown: 1000,
            projectile_speed: 300.0,
        }
    }
}

/// Result of a movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: GridPos, to: GridPos },
    /// Target was off the board, on the other half, broken or occupied
    Blocked { at: GridPos },
}

/// Result of a fire request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired { row: usize },
    CoolingDown { remaining_ms: u32 },
    TargetDown,
}

/// A projectile connecting with the enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub attack_type: Type,
    pub multiplier: f32,
    pub damage: u32,
    pub enemy_hp: u32,
    pub fainted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArenaEvent {
    Hit(Hit),
    /// A shot left the board without hitting anything
    Missed { row: usize },
}

#[derive(Debug, Clone)]
pub struct Arena {
    grid: BattleGrid,
    layout: GridLayout,
    pub player: BattlePokemon,
    pub enemy: BattlePokemon,
    projectiles: Vec<Projectile>,
    cooldown_remaining: u32,
    config: ArenaConfig,
}

impl Arena {
    /// Set up a round, placing both battlers on their starting tiles
    pub fn new(
        grid_config: &GridConfig,
        layout: GridLayout,
        mut player: BattlePokemon,
        mut enemy: BattlePokemon,
        config: ArenaConfig,
    ) -> Result<Self, GridError> {
        let speed = config.projectile_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "projectile speed must be positive and finite, got {speed}"
            )));
        }

        let mut grid = BattleGrid::new(grid_config)?;

        for (side, start) in [
            (Side::Player, config.player_start),
            (Side::Enemy, config.enemy_start),
        ] {
            if !grid.contains(start) {
                return Err(GridError::OutOfBounds(start));
            }
            if !grid.can_enter(side.into(), start) {
                return Err(GridError::WrongSide {
                    pos: start,
                    owner: side.into(),
                });
            }
            grid.set_occupied(start, true)?;
        }

        player.position = config.player_start;
        enemy.position = config.enemy_start;

        Ok(Self {
            grid,
            layout,
            player,
            enemy,
            projectiles: Vec::new(),
            cooldown_remaining: 0,
            config,
        })
    }

    pub fn grid(&self) -> &BattleGrid {
        &self.grid
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn battler(&self, side: Side) -> &BattlePokemon {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn battler_mut(&mut self, side: Side) -> &mut BattlePokemon {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Screen anchor for a battler's sprite
    pub fn sprite_anchor(&self, side: Side) -> (f32, f32) {
        self.layout.sprite_anchor(self.battler(side).position, side)
    }

    /// Step a battler one tile, staying on its own half
    pub fn move_battler(&mut self, side: Side, dir: Direction) -> MoveOutcome {
        let from = self.battler(side).position;
        let Some(to) = from.step(dir) else {
            return MoveOutcome::Blocked { at: from };
        };
        if !self.grid.can_enter(side.into(), to) {
            debug!(?side, %from, %to, "move blocked");
            return MoveOutcome::Blocked { at: from };
        }

        // `to` passed can_enter and `from` is the tile we stand on
        let vacated = self.grid.set_occupied(from, false);
        let entered = self.grid.set_occupied(to, true);
        debug_assert!(
            vacated.is_ok() && entered.is_ok(),
            "occupancy out of sync at {from} -> {to}"
        );
        self.battler_mut(side).position = to;

        debug!(?side, %from, %to, "battler moved");
        MoveOutcome::Moved { from, to }
    }

    pub fn move_player(&mut self, dir: Direction) -> MoveOutcome {
        self.move_battler(Side::Player, dir)
    }

    /// Launch a shot from the player toward the enemy half
    pub fn fire(&mut self, attack_type: Type, damage: u32) -> FireOutcome {
        if self.enemy.is_fainted() {
            return FireOutcome::TargetDown;
        }
        if self.cooldown_remaining > 0 {
            return FireOutcome::CoolingDown {
                remaining_ms: self.cooldown_remaining,
            };
        }

        let row = self.player.position.row;
        let (x, y) = self.sprite_anchor(Side::Player);
        let mut projectile = Projectile::new(x, y, row, attack_type).with_damage(damage);
        projectile.fire(self.config.projectile_speed, 0.0);
        self.projectiles.push(projectile);
        self.cooldown_remaining = self.config.move_cooldown;

        debug!(%attack_type, damage, row, "projectile fired");
        FireOutcome::Fired { row }
    }

    /// Advance time: cool down, move shots, resolve hits
    pub fn tick(&mut self, dt_ms: u32, chart: &EffectivenessTable) -> Vec<ArenaEvent> {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(dt_ms);

        let enemy_pos = self.enemy.position;
        let (tile_start, _) = self.layout.tile_origin(enemy_pos);
        let tile_end = tile_start + self.layout.tile_width();
        let right_edge = self.layout.right_edge();

        let mut events = Vec::new();
        let mut in_flight = Vec::with_capacity(self.projectiles.len());

        for mut projectile in std::mem::take(&mut self.projectiles) {
            let prev_x = projectile.x;
            projectile.advance(dt_ms);

            let swept_enemy = projectile.row == enemy_pos.row
                && prev_x < tile_end
                && projectile.x >= tile_start;

            if swept_enemy && !self.enemy.is_fainted() {
                let hit = self.apply_hit(&projectile, chart);
                events.push(ArenaEvent::Hit(hit));
            } else if projectile.x > right_edge {
                debug!(row = projectile.row, "projectile left the board");
                events.push(ArenaEvent::Missed {
                    row: projectile.row,
                });
            } else {
                in_flight.push(projectile);
            }
        }

        self.projectiles = in_flight;
        events
    }

    fn apply_hit(&mut self, projectile: &Projectile, chart: &EffectivenessTable) -> Hit {
        let multiplier = chart.resolve(projectile.attack_type, self.enemy.types());
        let damage = (projectile.damage as f32 * multiplier).round() as u32;
        self.enemy.take_damage(damage);

        debug!(
            attack_type = %projectile.attack_type,
            multiplier,
            damage,
            enemy_hp = self.enemy.current_hp,
            "projectile hit"
        );

        Hit {
            attack_type: projectile.attack_type,
            multiplier,
            damage,
            enemy_hp: self.enemy.current_hp,
            fainted: self.enemy.is_fainted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, DefenderTypes, PokemonData, PROTOTYPE_CHART, STANDARD_CHART};

    fn battler(name: &str, types: DefenderTypes) -> BattlePokemon {
        let data = PokemonData::new(1, name, types, BaseStats::new(100, 50, 50, 50, 50, 50));
        BattlePokemon::new(data, 50, GridPos::default())
    }

    fn arena_with(enemy_types: DefenderTypes) -> Arena {
        let grid = GridConfig::default();
        let layout = GridLayout::new(&grid, 800.0, 600.0);
        Arena::new(
            &grid,
            layout,
            battler("Pikachu", DefenderTypes::single(Type::Electric)),
            battler("Target", enemy_types),
            ArenaConfig::default(),
        )
        .unwrap()
    }

    fn arena() -> Arena {
        arena_with(DefenderTypes::single(Type::Water))
    }

    #[test]
    fn test_starting_positions() {
        let arena = arena();
        assert_eq!(arena.player.position, GridPos::new(0, 1));
        assert_eq!(arena.enemy.position, GridPos::new(5, 1));
        assert!(arena.grid().tile(GridPos::new(0, 1)).unwrap().occupied);
        assert!(arena.grid().tile(GridPos::new(5, 1)).unwrap().occupied);
    }

    #[test]
    fn test_start_on_wrong_side_rejected() {
        let grid = GridConfig::default();
        let layout = GridLayout::new(&grid, 800.0, 600.0);
        let config = ArenaConfig {
            player_start: GridPos::new(4, 1),
            ..ArenaConfig::default()
        };
        let result = Arena::new(
            &grid,
            layout,
            battler("A", DefenderTypes::single(Type::Fire)),
            battler("B", DefenderTypes::single(Type::Fire)),
            config,
        );
        assert!(matches!(result, Err(GridError::WrongSide { .. })));
    }

    #[test]
    fn test_non_finite_speed_rejected() {
        let grid = GridConfig::default();
        let layout = GridLayout::new(&grid, 800.0, 600.0);
        for speed in [f32::INFINITY, f32::NAN, 0.0] {
            let config = ArenaConfig {
                projectile_speed: speed,
                ..ArenaConfig::default()
            };
            let result = Arena::new(
                &grid,
                layout,
                battler("A", DefenderTypes::single(Type::Fire)),
                battler("B", DefenderTypes::single(Type::Fire)),
                config,
            );
            assert!(matches!(result, Err(GridError::InvalidConfig(_))), "{speed}");
        }
    }

    #[test]
    fn test_zero_tick_keeps_shot_in_flight() {
        let mut arena = arena();
        arena.fire(Type::Electric, 10);
        assert!(arena.tick(0, &PROTOTYPE_CHART).is_empty());
        assert!(arena.projectiles()[0].x.is_finite());

        let events: Vec<_> = (0..50).flat_map(|_| arena.tick(100, &PROTOTYPE_CHART)).collect();
        assert!(matches!(events.as_slice(), [ArenaEvent::Hit(_)]));
        assert!(arena.projectiles().is_empty());
    }

    #[test]
    fn test_player_movement_is_bounded() {
        let mut arena = arena();

        assert_eq!(
            arena.move_player(Direction::Left),
            MoveOutcome::Blocked {
                at: GridPos::new(0, 1)
            }
        );

        assert_eq!(
            arena.move_player(Direction::Up),
            MoveOutcome::Moved {
                from: GridPos::new(0, 1),
                to: GridPos::new(0, 0)
            }
        );
        assert!(matches!(
            arena.move_player(Direction::Up),
            MoveOutcome::Blocked { .. }
        ));

        arena.move_player(Direction::Right);
        arena.move_player(Direction::Right);
        assert_eq!(arena.player.position, GridPos::new(2, 0));

        // Column 3 belongs to the enemy
        assert!(matches!(
            arena.move_player(Direction::Right),
            MoveOutcome::Blocked { .. }
        ));
        assert_eq!(arena.player.position, GridPos::new(2, 0));
        assert!(!arena.grid().tile(GridPos::new(0, 1)).unwrap().occupied);
        assert!(arena.grid().tile(GridPos::new(2, 0)).unwrap().occupied);
    }

    #[test]
    fn test_enemy_movement_is_bounded() {
        let mut arena = arena();
        arena.move_battler(Side::Enemy, Direction::Left);
        arena.move_battler(Side::Enemy, Direction::Left);
        assert_eq!(arena.enemy.position, GridPos::new(3, 1));
        assert!(matches!(
            arena.move_battler(Side::Enemy, Direction::Left),
            MoveOutcome::Blocked { .. }
        ));
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut arena = arena();
        assert_eq!(arena.fire(Type::Electric, 10), FireOutcome::Fired { row: 1 });
        assert_eq!(
            arena.fire(Type::Electric, 10),
            FireOutcome::CoolingDown { remaining_ms: 1000 }
        );

        arena.tick(400, &PROTOTYPE_CHART);
        assert_eq!(
            arena.fire(Type::Electric, 10),
            FireOutcome::CoolingDown { remaining_ms: 600 }
        );

        arena.tick(600, &PROTOTYPE_CHART);
        assert_eq!(arena.fire(Type::Electric, 10), FireOutcome::Fired { row: 1 });
    }

    #[test]
    fn test_projectile_hits_with_effectiveness() {
        let mut arena = arena();
        arena.fire(Type::Electric, 10);
        let start_hp = arena.enemy.current_hp;

        let mut hits = Vec::new();
        for _ in 0..100 {
            for event in arena.tick(50, &PROTOTYPE_CHART) {
                if let ArenaEvent::Hit(hit) = event {
                    hits.push(hit);
                }
            }
        }

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].multiplier, 2.0);
        assert_eq!(hits[0].damage, 20);
        assert_eq!(arena.enemy.current_hp, start_hp - 20);
        assert!(arena.projectiles().is_empty());
    }

    #[test]
    fn test_large_step_does_not_tunnel() {
        let mut arena = arena();
        arena.fire(Type::Electric, 10);
        let events = arena.tick(5000, &PROTOTYPE_CHART);
        assert!(matches!(events.as_slice(), [ArenaEvent::Hit(_)]));
    }

    #[test]
    fn test_immune_target_takes_nothing() {
        let mut arena = arena_with(DefenderTypes::single(Type::Ground));
        let start_hp = arena.enemy.current_hp;
        arena.fire(Type::Electric, 10);
        let events = arena.tick(5000, &STANDARD_CHART);
        match events.as_slice() {
            [ArenaEvent::Hit(hit)] => {
                assert_eq!(hit.multiplier, 0.0);
                assert_eq!(hit.damage, 0);
            }
            other => panic!("expected a hit, got {other:?}"),
        }
        assert_eq!(arena.enemy.current_hp, start_hp);
    }

    #[test]
    fn test_shot_on_other_row_misses() {
        let mut arena = arena();
        arena.move_player(Direction::Up);
        arena.fire(Type::Electric, 10);
        let events = arena.tick(5000, &PROTOTYPE_CHART);
        assert_eq!(events, vec![ArenaEvent::Missed { row: 0 }]);
        assert_eq!(arena.enemy.hp_percent(), 100);
    }

    #[test]
    fn test_fainted_enemy_stops_fire() {
        let mut arena = arena();
        arena.enemy.take_damage(u32::MAX);
        assert_eq!(arena.fire(Type::Electric, 10), FireOutcome::TargetDown);
    }
}
