//! Query helpers for battle decision making
//!
//! This module provides utilities for analyzing type matchups against
//! any effectiveness table.

mod matchup;

pub use matchup::{
    best_multiplier, immunities, is_immune_to, is_weak_to_any, resistances, resists_all,
    weaknesses,
};
