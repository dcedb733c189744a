//! Tile ownership and condition

use super::position::GridPos;

/// Which half of the field a battler fights from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileOwner {
    Player,
    Enemy,
    Neutral,
}

impl From<Side> for TileOwner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => TileOwner::Player,
            Side::Enemy => TileOwner::Enemy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileType {
    #[default]
    Normal,
    Cracked,
    Broken,
}

impl TileType {
    /// Next, more damaged condition
    pub fn crack(self) -> TileType {
        match self {
            TileType::Normal => TileType::Cracked,
            TileType::Cracked | TileType::Broken => TileType::Broken,
        }
    }

    pub fn is_walkable(self) -> bool {
        self != TileType::Broken
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTile {
    pub pos: GridPos,
    pub owner: TileOwner,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tile_type: TileType,
    pub occupied: bool,
}

impl GridTile {
    pub fn new(pos: GridPos, owner: TileOwner) -> Self {
        Self {
            pos,
            owner,
            tile_type: TileType::Normal,
            occupied: false,
        }
    }

    /// Whether a battler of `owner` may step here
    pub fn accepts(&self, owner: TileOwner) -> bool {
        self.owner == owner && self.tile_type.is_walkable() && !self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crack_progression() {
        let t = TileType::Normal;
        assert_eq!(t.crack(), TileType::Cracked);
        assert_eq!(t.crack().crack(), TileType::Broken);
        assert_eq!(TileType::Broken.crack(), TileType::Broken);
        assert!(TileType::Cracked.is_walkable());
        assert!(!TileType::Broken.is_walkable());
    }

    #[test]
    fn test_accepts() {
        let mut tile = GridTile::new(GridPos::new(0, 0), TileOwner::Player);
        assert!(tile.accepts(TileOwner::Player));
        assert!(!tile.accepts(TileOwner::Enemy));

        tile.occupied = true;
        assert!(!tile.accepts(TileOwner::Player));

        tile.occupied = false;
        tile.tile_type = TileType::Broken;
        assert!(!tile.accepts(TileOwner::Player));
    }

    #[test]
    fn test_side_owner() {
        assert_eq!(TileOwner::from(Side::Enemy), TileOwner::Enemy);
        assert_eq!(Side::Player.opponent(), Side::Enemy);
    }
}
