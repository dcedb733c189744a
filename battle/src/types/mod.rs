//! Domain types for the battle core

mod effectiveness;
mod moves;
mod pokemon;
mod pokemon_type;
mod stats;
mod typing;

pub use effectiveness::{
    ChartKind, ChartRow, EffectivenessTable, PROTOTYPE_CHART, STANDARD_CHART,
    resolve_effectiveness,
};
pub use moves::{Move, MoveCategory};
pub use pokemon::{BattlePokemon, PokemonData};
pub use pokemon_type::Type;
pub use stats::{BaseStats, Stat};
pub use typing::{DefenderTypes, TypingError};
