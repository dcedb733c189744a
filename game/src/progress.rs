//! Round progression and rewards

use gridmon_battle::Move;
use serde::{Deserialize, Serialize};

/// A reward offered after winning a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardOption {
    /// Equip a new move for the shots that follow
    Move(Move),
    /// Raise player power by `amount` percent
    StatBoost { amount: u32 },
}

impl RewardOption {
    pub fn description(&self) -> String {
        match self {
            RewardOption::Move(mv) => {
                format!("Learn {} ({}, power {})", mv.name, mv.move_type, mv.power)
            }
            RewardOption::StatBoost { amount } => format!("Boost all stats by {amount}%"),
        }
    }
}

/// Progress carried across rounds of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProgress {
    pub current_round: u32,
    pub selected_rewards: Vec<RewardOption>,
    /// Damage multiplier earned from stat boosts, starts at 1.0
    pub player_power: f32,
}

impl GameProgress {
    pub fn new(starting_round: u32) -> Self {
        Self {
            current_round: starting_round,
            selected_rewards: Vec::new(),
            player_power: 1.0,
        }
    }

    pub fn advance_round(&mut self) -> u32 {
        self.current_round += 1;
        self.current_round
    }

    /// Enemy stat multiplier for the current round: `scaling^(round - 1)`
    pub fn difficulty_multiplier(&self, scaling: f32) -> f32 {
        let exponent = self.current_round.saturating_sub(1);
        scaling.powi(exponent.min(i32::MAX as u32) as i32)
    }

    /// Record a claimed reward and apply its passive effect
    pub fn claim(&mut self, reward: RewardOption) {
        if let RewardOption::StatBoost { amount } = reward {
            self.player_power += amount as f32 / 100.0;
        }
        self.selected_rewards.push(reward);
    }

    /// Most recently claimed move, if any
    pub fn equipped_move(&self) -> Option<&Move> {
        self.selected_rewards.iter().rev().find_map(|r| match r {
            RewardOption::Move(mv) => Some(mv),
            RewardOption::StatBoost { .. } => None,
        })
    }
}

impl Default for GameProgress {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmon_battle::{MoveCategory, Type};

    fn ember() -> Move {
        Move::new("ember", "Ember", Type::Fire, MoveCategory::Special, 40)
    }

    #[test]
    fn test_new_progress() {
        let progress = GameProgress::default();
        assert_eq!(progress.current_round, 1);
        assert!(progress.selected_rewards.is_empty());
        assert_eq!(progress.player_power, 1.0);
    }

    #[test]
    fn test_difficulty_multiplier() {
        let mut progress = GameProgress::new(1);
        assert_eq!(progress.difficulty_multiplier(1.15), 1.0);

        progress.advance_round();
        assert!((progress.difficulty_multiplier(1.15) - 1.15).abs() < 1e-6);

        progress.advance_round();
        assert!((progress.difficulty_multiplier(1.15) - 1.3225).abs() < 1e-5);
    }

    #[test]
    fn test_claim_stat_boost() {
        let mut progress = GameProgress::new(1);
        progress.claim(RewardOption::StatBoost { amount: 10 });
        progress.claim(RewardOption::StatBoost { amount: 10 });
        assert!((progress.player_power - 1.2).abs() < 1e-6);
        assert_eq!(progress.selected_rewards.len(), 2);
        assert!(progress.equipped_move().is_none());
    }

    #[test]
    fn test_claim_move_equips_latest() {
        let mut progress = GameProgress::new(1);
        progress.claim(RewardOption::Move(ember()));
        progress.claim(RewardOption::StatBoost { amount: 10 });
        assert_eq!(progress.equipped_move().map(|m| m.id.as_str()), Some("ember"));
        assert!((progress.player_power - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_reward_descriptions() {
        assert_eq!(
            RewardOption::StatBoost { amount: 10 }.description(),
            "Boost all stats by 10%"
        );
        assert_eq!(
            RewardOption::Move(ember()).description(),
            "Learn Ember (Fire, power 40)"
        );
    }

    #[test]
    fn test_reward_json_shape() {
        let json = serde_json::to_value(RewardOption::StatBoost { amount: 10 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "stat_boost", "amount": 10 }));
    }
}
