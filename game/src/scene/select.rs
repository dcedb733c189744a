//! Character select screen

use gridmon_battle::Direction;

/// Icons per row on the select grid
pub const SELECT_COLUMNS: usize = 5;

/// Cursor over a grid of `len` fighters laid out `SELECT_COLUMNS` wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectCursor {
    index: usize,
    len: usize,
}

impl SelectCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor, clamping to the ends of the list. Returns whether it moved.
    pub fn step(&mut self, dir: Direction) -> bool {
        let last = self.len.saturating_sub(1);
        let next = match dir {
            Direction::Left => self.index.saturating_sub(1),
            Direction::Right => (self.index + 1).min(last),
            Direction::Up => self.index.saturating_sub(SELECT_COLUMNS),
            Direction::Down => (self.index + SELECT_COLUMNS).min(last),
        };
        let moved = next != self.index;
        self.index = next;
        moved
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    pub cursor: SelectCursor,
}

impl SelectState {
    pub fn new(roster_len: usize) -> Self {
        Self {
            cursor: SelectCursor::new(roster_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_clamps() {
        let mut cursor = SelectCursor::new(20);
        assert!(!cursor.step(Direction::Left));
        assert_eq!(cursor.index(), 0);

        assert!(cursor.step(Direction::Right));
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_vertical_jumps_a_row() {
        let mut cursor = SelectCursor::new(20);
        cursor.step(Direction::Down);
        assert_eq!(cursor.index(), 5);
        cursor.step(Direction::Down);
        cursor.step(Direction::Down);
        cursor.step(Direction::Down);
        assert_eq!(cursor.index(), 19);

        cursor.step(Direction::Up);
        assert_eq!(cursor.index(), 14);
    }

    #[test]
    fn test_up_from_first_row_clamps_to_start() {
        let mut cursor = SelectCursor::new(20);
        cursor.step(Direction::Right);
        cursor.step(Direction::Right);
        cursor.step(Direction::Up);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_short_roster() {
        let mut cursor = SelectCursor::new(3);
        cursor.step(Direction::Down);
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.step(Direction::Right));
    }
}
