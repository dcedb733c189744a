//! Game configuration loaded from TOML

use std::fs;
use std::path::{Path, PathBuf};

use gridmon_battle::{ArenaConfig, BattleGrid, ChartKind, GridConfig, GridError, Side};
use gridmon_roster::{Roster, RosterError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),

    #[error("Configuration validation error: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: "#1a1a2e".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    #[serde(flatten)]
    pub arena: ArenaConfig,
    /// Level both battlers fight at
    pub level: u8,
    /// Base damage of a 40-power shot at 1.0 player power
    pub projectile_damage: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            level: 50,
            projectile_damage: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub starting_round: u32,
    pub stat_boost_amount: u16,
    /// Enemy stat multiplier applied once per round after the first
    pub difficulty_scaling: f32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            starting_round: 1,
            stat_boost_amount: 10,
            difficulty_scaling: 1.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub display: DisplayConfig,
    pub grid: GridConfig,
    pub battle: BattleConfig,
    pub progression: ProgressionConfig,
    pub chart: ChartKind,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// JSON roster to use instead of the built-in fighters
    pub roster_path: Option<PathBuf>,
}

impl GameConfig {
    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::Invalid("display size must be nonzero".into()));
        }

        let grid = BattleGrid::new(&self.grid)?;
        for (side, start) in [
            (Side::Player, self.battle.arena.player_start),
            (Side::Enemy, self.battle.arena.enemy_start),
        ] {
            if !grid.contains(start) {
                return Err(GridError::OutOfBounds(start).into());
            }
            if !grid.can_enter(side.into(), start) {
                return Err(GridError::WrongSide {
                    pos: start,
                    owner: side.into(),
                }
                .into());
            }
        }

        let speed = self.battle.arena.projectile_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "battle.projectile_speed must be positive and finite".into(),
            ));
        }
        if !(1..=100).contains(&self.battle.level) {
            return Err(ConfigError::Invalid(format!(
                "battle.level must be 1-100, got {}",
                self.battle.level
            )));
        }
        if self.progression.starting_round == 0 {
            return Err(ConfigError::Invalid(
                "progression.starting_round starts at 1".into(),
            ));
        }
        let scaling = self.progression.difficulty_scaling;
        if !scaling.is_finite() || scaling <= 0.0 {
            return Err(ConfigError::Invalid(
                "progression.difficulty_scaling must be positive and finite".into(),
            ));
        }
        Ok(())
    }

    /// The configured roster, or the built-in one
    pub fn load_roster(&self) -> Result<Roster, ConfigError> {
        match &self.roster_path {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                Ok(Roster::from_json(&json)?)
            }
            None => Ok(Roster::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmon_battle::GridPos;

    #[test]
    fn test_defaults_match_prototype_constants() {
        let config = GameConfig::default();
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 600);
        assert_eq!(config.display.background_color, "#1a1a2e");
        assert_eq!(config.grid.cols, 6);
        assert_eq!(config.battle.arena.move_cooldown, 1000);
        assert_eq!(config.battle.arena.projectile_speed, 300.0);
        assert_eq!(config.battle.arena.player_start, GridPos::new(0, 1));
        assert_eq!(config.battle.arena.enemy_start, GridPos::new(5, 1));
        assert_eq!(config.progression.starting_round, 1);
        assert_eq!(config.progression.stat_boost_amount, 10);
        assert_eq!(config.progression.difficulty_scaling, 1.15);
        assert_eq!(config.chart, ChartKind::Prototype);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            chart = "standard"
            seed = 42

            [battle]
            move_cooldown = 500
            player_start = { col = 1, row = 2 }

            [progression]
            difficulty_scaling = 1.5
        "#;
        let config = GameConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.chart, ChartKind::Standard);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.battle.arena.move_cooldown, 500);
        assert_eq!(config.battle.arena.player_start, GridPos::new(1, 2));
        assert_eq!(config.battle.level, 50);
        assert_eq!(config.progression.difficulty_scaling, 1.5);
        assert_eq!(config.display.width, 800);
    }

    #[test]
    fn test_bad_toml() {
        let err = GameConfig::from_toml_str("chart = 7").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_start_on_enemy_half_rejected() {
        let toml = r#"
            [battle]
            player_start = { col = 4, row = 1 }
        "#;
        let err = GameConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Grid(GridError::WrongSide { .. })));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_toml_str("[progression]\nstarting_round = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("[grid]\ncols = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Grid(GridError::InvalidConfig(_))));

        let err = GameConfig::from_toml_str("[battle]\nlevel = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for toml in [
            "[battle]\nprojectile_speed = inf",
            "[battle]\nprojectile_speed = nan",
            "[battle]\nprojectile_speed = -1.0",
            "[progression]\ndifficulty_scaling = inf",
            "[progression]\ndifficulty_scaling = 0.0",
        ] {
            let err = GameConfig::from_toml_str(toml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{toml}");
        }
    }

    #[test]
    fn test_missing_roster_file() {
        let config = GameConfig {
            roster_path: Some(PathBuf::from("/nonexistent/roster.json")),
            ..GameConfig::default()
        };
        assert!(matches!(config.load_roster(), Err(ConfigError::Io(_))));
        assert_eq!(GameConfig::default().load_roster().unwrap().len(), 20);
    }
}
