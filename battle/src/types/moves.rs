//! Moves

use super::effectiveness::EffectivenessTable;
use super::pokemon_type::Type;
use super::typing::DefenderTypes;

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "physical",
            MoveCategory::Special => "special",
            MoveCategory::Status => "status",
        }
    }
}

/// A move a battler can use
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Lowercase id, e.g. "thunderbolt"
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u16,
    /// Accuracy in percent (1-100)
    pub accuracy: u8,
    /// Cooldown in milliseconds before the move can be used again
    pub cooldown: u32,
    pub description: String,
}

impl Move {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        move_type: Type,
        category: MoveCategory,
        power: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            move_type,
            category,
            power,
            accuracy: 100,
            cooldown: 1000,
            description: String::new(),
        }
    }

    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy.clamp(1, 100);
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Status moves never deal direct damage
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.power > 0
    }

    /// Multiplier this move gets against a typing
    pub fn effectiveness_against(&self, chart: &EffectivenessTable, target: &DefenderTypes) -> f32 {
        chart.resolve(self.move_type, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::STANDARD_CHART;

    #[test]
    fn test_builder() {
        let mv = Move::new("thunderbolt", "Thunderbolt", Type::Electric, MoveCategory::Special, 90)
            .with_accuracy(150)
            .with_cooldown(1500)
            .with_description("A strong electric blast");

        assert_eq!(mv.accuracy, 100);
        assert_eq!(mv.cooldown, 1500);
        assert!(mv.is_damaging());
    }

    #[test]
    fn test_status_moves_do_not_damage() {
        let mv = Move::new("growl", "Growl", Type::Normal, MoveCategory::Status, 0);
        assert!(!mv.is_damaging());
    }

    #[test]
    fn test_effectiveness_against() {
        let mv = Move::new("earthquake", "Earthquake", Type::Ground, MoveCategory::Physical, 100);
        let gyarados = DefenderTypes::dual(Type::Water, Type::Flying).unwrap();
        assert_eq!(mv.effectiveness_against(&STANDARD_CHART, &gyarados), 0.0);
    }
}
