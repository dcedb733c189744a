//! Type effectiveness tables and resolution
//!
//! Tables are sparse: each attacking type owns a (possibly empty) row of
//! `(defending type, multiplier)` pairs. Any pair missing from a row is
//! neutral (1.0).

use super::pokemon_type::Type;
use super::typing::DefenderTypes;

use Type::*;

/// One attacking type's recorded modifiers
pub type ChartRow = &'static [(Type, f32)];

/// Sparse attack × defend multiplier table
///
/// Indexed by attacking type, so every attacking type always has a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivenessTable {
    rows: [ChartRow; Type::COUNT],
}

/// Which built-in table to resolve against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartKind {
    /// The partially populated chart the game shipped with
    #[default]
    Prototype,
    /// The full Gen 6+ chart
    Standard,
}

impl ChartKind {
    pub fn table(self) -> &'static EffectivenessTable {
        match self {
            ChartKind::Prototype => &PROTOTYPE_CHART,
            ChartKind::Standard => &STANDARD_CHART,
        }
    }
}

impl EffectivenessTable {
    /// Build a table from rows in `Type::ALL` order
    pub const fn from_rows(rows: [ChartRow; Type::COUNT]) -> Self {
        Self { rows }
    }

    /// Recorded modifiers for an attacking type
    pub fn row(&self, attack: Type) -> ChartRow {
        self.rows[attack.index()]
    }

    /// Explicitly recorded modifier for a pair, if any
    pub fn modifier(&self, attack: Type, defend: Type) -> Option<f32> {
        self.row(attack)
            .iter()
            .find(|(t, _)| *t == defend)
            .map(|(_, m)| *m)
    }

    /// Modifier against a single defending type (1.0 when unrecorded)
    pub fn effectiveness(&self, attack: Type, defend: Type) -> f32 {
        self.modifier(attack, defend).unwrap_or(1.0)
    }

    /// Combined multiplier against a full typing
    pub fn resolve(&self, attack: Type, defenders: &DefenderTypes) -> f32 {
        defenders
            .iter()
            .fold(1.0, |acc, t| acc * self.effectiveness(attack, t))
    }

    /// Combined multiplier against a raw slice of defending types
    ///
    /// # Panics
    ///
    /// Panics unless `defenders` holds one or two distinct types.
    pub fn resolve_slice(&self, attack: Type, defenders: &[Type]) -> f32 {
        match DefenderTypes::try_from(defenders) {
            Ok(typing) => self.resolve(attack, &typing),
            Err(e) => panic!("cannot resolve {attack} effectiveness against {defenders:?}: {e}"),
        }
    }

    /// Number of recorded (non-default) pairs
    pub fn recorded_pairs(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }
}

impl Default for EffectivenessTable {
    fn default() -> Self {
        PROTOTYPE_CHART
    }
}

/// Resolve against the prototype chart
pub fn resolve_effectiveness(attack: Type, defenders: &DefenderTypes) -> f32 {
    PROTOTYPE_CHART.resolve(attack, defenders)
}

const NORMAL_ROW: ChartRow = &[(Rock, 0.5), (Ghost, 0.0), (Steel, 0.5)];

const FIRE_ROW: ChartRow = &[
    (Fire, 0.5),
    (Water, 0.5),
    (Grass, 2.0),
    (Ice, 2.0),
    (Bug, 2.0),
    (Rock, 0.5),
    (Dragon, 0.5),
    (Steel, 2.0),
];

const WATER_ROW: ChartRow = &[
    (Fire, 2.0),
    (Water, 0.5),
    (Grass, 0.5),
    (Ground, 2.0),
    (Rock, 2.0),
    (Dragon, 0.5),
];

const ELECTRIC_ROW: ChartRow = &[
    (Water, 2.0),
    (Electric, 0.5),
    (Grass, 0.5),
    (Ground, 0.0),
    (Flying, 2.0),
    (Dragon, 0.5),
];

const GRASS_ROW: ChartRow = &[
    (Fire, 0.5),
    (Water, 2.0),
    (Grass, 0.5),
    (Poison, 0.5),
    (Ground, 2.0),
    (Flying, 0.5),
    (Bug, 0.5),
    (Rock, 2.0),
    (Dragon, 0.5),
    (Steel, 0.5),
];

/// The chart as the prototype shipped it
///
/// Only Normal, Fire, Water, Electric and Grass attacks carry modifiers;
/// every other attacking type is neutral against everything.
pub static PROTOTYPE_CHART: EffectivenessTable = EffectivenessTable::from_rows([
    NORMAL_ROW,
    FIRE_ROW,
    WATER_ROW,
    ELECTRIC_ROW,
    GRASS_ROW,
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
]);

/// Full Gen 6+ chart
#[rustfmt::skip]
pub static STANDARD_CHART: EffectivenessTable = EffectivenessTable::from_rows([
    NORMAL_ROW,
    FIRE_ROW,
    WATER_ROW,
    ELECTRIC_ROW,
    GRASS_ROW,
    // Ice
    &[(Fire, 0.5), (Water, 0.5), (Grass, 2.0), (Ice, 0.5), (Ground, 2.0), (Flying, 2.0), (Dragon, 2.0), (Steel, 0.5)],
    // Fighting
    &[(Normal, 2.0), (Ice, 2.0), (Poison, 0.5), (Flying, 0.5), (Psychic, 0.5), (Bug, 0.5), (Rock, 2.0), (Ghost, 0.0), (Dark, 2.0), (Steel, 2.0), (Fairy, 0.5)],
    // Poison
    &[(Grass, 2.0), (Poison, 0.5), (Ground, 0.5), (Rock, 0.5), (Ghost, 0.5), (Steel, 0.0), (Fairy, 2.0)],
    // Ground
    &[(Fire, 2.0), (Electric, 2.0), (Grass, 0.5), (Poison, 2.0), (Flying, 0.0), (Bug, 0.5), (Rock, 2.0), (Steel, 2.0)],
    // Flying
    &[(Electric, 0.5), (Grass, 2.0), (Fighting, 2.0), (Bug, 2.0), (Rock, 0.5), (Steel, 0.5)],
    // Psychic
    &[(Fighting, 2.0), (Poison, 2.0), (Psychic, 0.5), (Dark, 0.0), (Steel, 0.5)],
    // Bug
    &[(Fire, 0.5), (Grass, 2.0), (Fighting, 0.5), (Poison, 0.5), (Flying, 0.5), (Psychic, 2.0), (Ghost, 0.5), (Dark, 2.0), (Steel, 0.5), (Fairy, 0.5)],
    // Rock
    &[(Fire, 2.0), (Ice, 2.0), (Fighting, 0.5), (Ground, 0.5), (Flying, 2.0), (Bug, 2.0), (Steel, 0.5)],
    // Ghost
    &[(Normal, 0.0), (Psychic, 2.0), (Ghost, 2.0), (Dark, 0.5)],
    // Dragon
    &[(Dragon, 2.0), (Steel, 0.5), (Fairy, 0.0)],
    // Dark
    &[(Fighting, 0.5), (Psychic, 2.0), (Ghost, 2.0), (Dark, 0.5), (Fairy, 0.5)],
    // Steel
    &[(Fire, 0.5), (Water, 0.5), (Electric, 0.5), (Ice, 2.0), (Rock, 2.0), (Steel, 0.5), (Fairy, 2.0)],
    // Fairy
    &[(Fire, 0.5), (Fighting, 2.0), (Poison, 0.5), (Dragon, 2.0), (Dark, 2.0), (Steel, 0.5)],
]);
