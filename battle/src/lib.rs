//! Battle core for a grid-based monster battler.
//!
//! This crate holds the rules that sit underneath the presentation layer:
//! the elemental type system, the battle board and the state of a round.
//!
//! # Overview
//!
//! `gridmon-battle` is the leaf of the workspace:
//!
//! ```text
//! gridmon-battle (types + grid + arena) ← THIS CRATE
//!        │
//!        ├─> gridmon-roster (selectable species)
//!        └─> gridmon-game (scene machine and session)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types
//! - [`EffectivenessTable`] - Sparse attack × defend multiplier table,
//!   with [`PROTOTYPE_CHART`] and [`STANDARD_CHART`] built in
//! - [`DefenderTypes`] - The one or two types of a battler
//! - [`Move`], [`BaseStats`], [`PokemonData`], [`BattlePokemon`]
//!
//! ## Board
//! - [`BattleGrid`] - Tiles split into a player half and an enemy half
//! - [`GridLayout`] - Grid to screen-space transforms
//!
//! ## Round State
//! - [`Arena`] - Battlers, bounded movement and projectiles
//!
//! # Example Usage
//!
//! ```
//! use gridmon_battle::{resolve_effectiveness, DefenderTypes, Type, STANDARD_CHART};
//!
//! let grass = DefenderTypes::single(Type::Grass);
//! assert_eq!(resolve_effectiveness(Type::Fire, &grass), 2.0);
//!
//! let fire_rock = DefenderTypes::dual(Type::Fire, Type::Rock).unwrap();
//! assert_eq!(STANDARD_CHART.resolve(Type::Water, &fire_rock), 4.0);
//! ```

pub mod arena;
pub mod grid;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use arena::{Arena, ArenaConfig, ArenaEvent, FireOutcome, Hit, MoveOutcome, Projectile};
pub use grid::{
    BattleGrid, Direction, GridConfig, GridError, GridLayout, GridPos, GridTile, Rect, Side,
    TileOwner, TileType,
};
pub use types::{
    BaseStats, BattlePokemon, ChartKind, DefenderTypes, EffectivenessTable, Move, MoveCategory,
    PROTOTYPE_CHART, PokemonData, STANDARD_CHART, Stat, Type, TypingError, resolve_effectiveness,
};
