//! The tile board

use super::position::GridPos;
use super::tile::{GridTile, TileOwner, TileType};
use super::{GridConfig, GridError};

/// Row-major board of tiles split into a player half and an enemy half
#[derive(Debug, Clone, PartialEq)]
pub struct BattleGrid {
    cols: usize,
    rows: usize,
    tiles: Vec<GridTile>,
}

impl BattleGrid {
    /// Build a board; columns left of `player_cols` belong to the player
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;

        let mut tiles = Vec::with_capacity(config.cols * config.rows);
        for row in 0..config.rows {
            for col in 0..config.cols {
                let owner = if col < config.player_cols {
                    TileOwner::Player
                } else {
                    TileOwner::Enemy
                };
                tiles.push(GridTile::new(GridPos::new(col, row), owner));
            }
        }

        Ok(Self {
            cols: config.cols,
            rows: config.rows,
            tiles,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    pub fn tile(&self, pos: GridPos) -> Option<&GridTile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, pos: GridPos) -> Option<&mut GridTile> {
        self.index(pos).map(move |i| &mut self.tiles[i])
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[GridTile] {
        &self.tiles
    }

    pub fn tiles_owned_by(&self, owner: TileOwner) -> impl Iterator<Item = &GridTile> {
        self.tiles.iter().filter(move |t| t.owner == owner)
    }

    /// Whether a battler of `owner` may move onto `pos`
    pub fn can_enter(&self, owner: TileOwner, pos: GridPos) -> bool {
        self.tile(pos).is_some_and(|t| t.accepts(owner))
    }

    pub fn set_occupied(&mut self, pos: GridPos, occupied: bool) -> Result<(), GridError> {
        let tile = self.tile_mut(pos).ok_or(GridError::OutOfBounds(pos))?;
        tile.occupied = occupied;
        Ok(())
    }

    /// Damage a tile one step, returning its new condition
    pub fn crack(&mut self, pos: GridPos) -> Result<TileType, GridError> {
        let tile = self.tile_mut(pos).ok_or(GridError::OutOfBounds(pos))?;
        tile.tile_type = tile.tile_type.crack();
        Ok(tile.tile_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> BattleGrid {
        BattleGrid::new(&GridConfig::default()).unwrap()
    }

    #[test]
    fn test_default_layout_ownership() {
        let grid = grid();
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.tiles().len(), 18);
        assert_eq!(grid.tiles_owned_by(TileOwner::Player).count(), 9);
        assert_eq!(grid.tiles_owned_by(TileOwner::Enemy).count(), 9);
        assert_eq!(grid.tile(GridPos::new(2, 0)).unwrap().owner, TileOwner::Player);
        assert_eq!(grid.tile(GridPos::new(3, 0)).unwrap().owner, TileOwner::Enemy);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = grid();
        assert!(grid.tile(GridPos::new(6, 0)).is_none());
        assert!(grid.tile(GridPos::new(0, 3)).is_none());
        assert_eq!(
            grid.set_occupied(GridPos::new(9, 9), true),
            Err(GridError::OutOfBounds(GridPos::new(9, 9)))
        );
    }

    #[test]
    fn test_can_enter() {
        let mut grid = grid();
        let pos = GridPos::new(1, 1);
        assert!(grid.can_enter(TileOwner::Player, pos));
        assert!(!grid.can_enter(TileOwner::Enemy, pos));

        grid.set_occupied(pos, true).unwrap();
        assert!(!grid.can_enter(TileOwner::Player, pos));
    }

    #[test]
    fn test_crack_breaks_tile() {
        let mut grid = grid();
        let pos = GridPos::new(0, 0);
        assert_eq!(grid.crack(pos), Ok(TileType::Cracked));
        assert!(grid.can_enter(TileOwner::Player, pos));
        assert_eq!(grid.crack(pos), Ok(TileType::Broken));
        assert!(!grid.can_enter(TileOwner::Player, pos));
    }
}
