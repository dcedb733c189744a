//! Species data and in-battle state

use crate::grid::GridPos;

use super::moves::Move;
use super::stats::BaseStats;
use super::typing::DefenderTypes;

/// Static data for a species
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonData {
    /// National dex number
    pub id: u16,
    pub name: String,
    pub types: DefenderTypes,
    pub base_stats: BaseStats,
}

impl PokemonData {
    pub fn new(id: u16, name: impl Into<String>, types: DefenderTypes, base_stats: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            base_stats,
        }
    }
}

/// A species instance standing on the battle grid
#[derive(Debug, Clone, PartialEq)]
pub struct BattlePokemon {
    pub data: PokemonData,

    /// Current HP (0 = fainted)
    pub current_hp: u32,

    pub max_hp: u32,

    /// Equipped moves, the first is the one fired
    pub moves: Vec<Move>,

    /// Level (1-100)
    pub level: u8,

    /// Tile the battler stands on
    pub position: GridPos,
}

impl BattlePokemon {
    /// Create at full HP for the given level
    pub fn new(data: PokemonData, level: u8, position: GridPos) -> Self {
        let level = level.clamp(1, 100);
        let max_hp = data.base_stats.hp_at_level(level);
        Self {
            data,
            current_hp: max_hp,
            max_hp,
            moves: Vec::new(),
            level,
            position,
        }
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Move used when this battler attacks
    pub fn active_move(&self) -> Option<&Move> {
        self.moves.first()
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn types(&self) -> &DefenderTypes {
        &self.data.types
    }

    /// Apply damage, returns HP actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP up to max, returns HP actually restored
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp - self.current_hp);
        self.current_hp += restored;
        restored
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        (self.current_hp * 100) / self.max_hp
    }
}
