//! Type matchup helpers for decision making

use crate::types::{DefenderTypes, EffectivenessTable, Type};

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(
    chart: &EffectivenessTable,
    defender: &DefenderTypes,
    attacking_types: &[Type],
) -> bool {
    attacking_types
        .iter()
        .any(|t| chart.resolve(*t, defender) > 1.0)
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(
    chart: &EffectivenessTable,
    defender: &DefenderTypes,
    attacking_types: &[Type],
) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|t| chart.resolve(*t, defender) < 1.0)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(chart: &EffectivenessTable, defender: &DefenderTypes, attacking_type: Type) -> bool {
    chart.resolve(attacking_type, defender) == 0.0
}

/// Get all types that are super effective against the defender
pub fn weaknesses(chart: &EffectivenessTable, defender: &DefenderTypes) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| chart.resolve(*t, defender) > 1.0)
        .collect()
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(chart: &EffectivenessTable, defender: &DefenderTypes) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = chart.resolve(*t, defender);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all types that the defender is immune to
pub fn immunities(chart: &EffectivenessTable, defender: &DefenderTypes) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| chart.resolve(*t, defender) == 0.0)
        .collect()
}

/// Best multiplier any of `attacking_types` gets against the defender
pub fn best_multiplier(
    chart: &EffectivenessTable,
    defender: &DefenderTypes,
    attacking_types: &[Type],
) -> Option<f32> {
    attacking_types
        .iter()
        .map(|t| chart.resolve(*t, defender))
        .reduce(f32::max)
}
