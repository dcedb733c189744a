//! Selectable fighter catalog.
//!
//! The built-in roster is the twenty fighters offered on the character
//! select screen. Custom rosters can be loaded from JSON. A small move
//! catalog with one starter move per type backs the round rewards.

mod builtin;
mod moves;
mod roster;
mod species;

use thiserror::Error;

pub use builtin::builtin_species;
pub use moves::{builtin_moves, starter_move};
pub use roster::Roster;
pub use species::{Species, icon_url, sprite_key};

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Roster has no species")]
    Empty,

    #[error("Duplicate species id: {0}")]
    DuplicateId(u16),

    #[error("Duplicate species name: {0}")]
    DuplicateName(String),

    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}
