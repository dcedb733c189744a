//! Grid to screen-space transforms
//!
//! The board is drawn as flat rectangles with a single band of depth under
//! the bottom row. The grid is centred in the viewport and nudged down to
//! leave room for the round banner.

use super::GridConfig;
use super::position::GridPos;
use super::tile::Side;

/// Extra downward shift applied after centring
pub const VERTICAL_NUDGE: f32 = 30.0;

/// Inset between a tile's cell and its drawn face
pub const TILE_INSET: f32 = 2.0;

const PLAYER_FOOT_OFFSET: f32 = 20.0;
const ENEMY_FOOT_OFFSET: f32 = -3.0;
const SPRITE_BASE_DEPTH: u32 = 10;

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Screen position of the board for a given viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    cols: usize,
    rows: usize,
    tile_width: f32,
    tile_height: f32,
    tile_depth: f32,
    offset_x: f32,
    offset_y: f32,
}

impl GridLayout {
    pub fn new(config: &GridConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let tile_width = config.tile_width as f32;
        let tile_height = config.tile_height as f32;
        let tile_depth = config.tile_depth as f32;

        let grid_width = config.cols as f32 * tile_width;
        let grid_height = config.rows as f32 * tile_height + tile_depth;

        Self {
            cols: config.cols,
            rows: config.rows,
            tile_width,
            tile_height,
            tile_depth,
            offset_x: (viewport_width - grid_width) / 2.0,
            offset_y: (viewport_height - grid_height) / 2.0 + VERTICAL_NUDGE,
        }
    }

    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> f32 {
        self.tile_height
    }

    /// Top-left corner of the board
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Board size in pixels, including the bottom depth band
    pub fn size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.tile_width,
            self.rows as f32 * self.tile_height + self.tile_depth,
        )
    }

    /// Top-left corner of a tile's cell
    pub fn tile_origin(&self, pos: GridPos) -> (f32, f32) {
        (
            self.offset_x + pos.col as f32 * self.tile_width,
            self.offset_y + pos.row as f32 * self.tile_height,
        )
    }

    /// Drawn top face of a tile
    pub fn tile_face(&self, pos: GridPos) -> Rect {
        let (x, y) = self.tile_origin(pos);
        Rect {
            x: x + TILE_INSET,
            y: y + TILE_INSET,
            width: self.tile_width - 2.0 * TILE_INSET,
            height: self.tile_height - 2.0 * TILE_INSET,
        }
    }

    /// Only the front row shows depth
    pub fn has_depth(&self, row: usize) -> bool {
        row + 1 == self.rows
    }

    /// Bottom-centre anchor for a battler's sprite
    pub fn sprite_anchor(&self, pos: GridPos, side: Side) -> (f32, f32) {
        let (x, y) = self.tile_origin(pos);
        let foot = match side {
            Side::Player => PLAYER_FOOT_OFFSET,
            Side::Enemy => ENEMY_FOOT_OFFSET,
        };
        (x + self.tile_width / 2.0, y + self.tile_height + foot)
    }

    /// Draw order for a sprite standing on `row`; lower rows draw on top
    pub fn sprite_depth(&self, row: usize) -> u32 {
        SPRITE_BASE_DEPTH + row as u32
    }

    /// Column under a screen x coordinate, if over the board
    pub fn column_at(&self, x: f32) -> Option<usize> {
        let rel = x - self.offset_x;
        if rel < 0.0 {
            return None;
        }
        let col = (rel / self.tile_width) as usize;
        (col < self.cols).then_some(col)
    }

    /// Right edge of the board
    pub fn right_edge(&self) -> f32 {
        self.offset_x + self.cols as f32 * self.tile_width
    }
}
