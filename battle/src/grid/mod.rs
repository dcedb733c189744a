//! Battle board: tiles, coordinates and screen layout

mod board;
mod layout;
mod position;
mod tile;

use thiserror::Error;

pub use board::BattleGrid;
pub use layout::{GridLayout, Rect, TILE_INSET, VERTICAL_NUDGE};
pub use position::{Direction, GridPos};
pub use tile::{GridTile, Side, TileOwner, TileType};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Position {0} is outside the grid")]
    OutOfBounds(GridPos),

    #[error("Position {pos} is not a {owner:?} tile")]
    WrongSide { pos: GridPos, owner: TileOwner },

    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}

/// Board dimensions in tiles and pixels
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    pub tile_width: u32,
    /// Shorter than the width for perspective
    pub tile_height: u32,
    /// Height of the depth band under the front row
    pub tile_depth: u32,
    pub player_cols: usize,
    pub enemy_cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 6,
            rows: 3,
            tile_width: 70,
            tile_height: 50,
            tile_depth: 25,
            player_cols: 3,
            enemy_cols: 3,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidConfig(
                "grid must have at least one row and column".into(),
            ));
        }
        if self.player_cols == 0 || self.enemy_cols == 0 {
            return Err(GridError::InvalidConfig(
                "each side needs at least one column".into(),
            ));
        }
        if self.player_cols + self.enemy_cols != self.cols {
            return Err(GridError::InvalidConfig(format!(
                "player_cols ({}) + enemy_cols ({}) must equal cols ({})",
                self.player_cols, self.enemy_cols, self.cols
            )));
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(GridError::InvalidConfig("tiles must have a size".into()));
        }
        Ok(())
    }
}
