use core::fmt;

use serde::Serialize;

pub const GRID_SIZE: usize = 5;
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A tile position `(col, row)` on the 5x5 board. The top left corner is
/// `Coord { col: 0, row: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Linear index `0..25` to coordinate, row-major.
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < TILE_COUNT);
        Self {
            col: index % GRID_SIZE,
            row: index / GRID_SIZE,
        }
    }

    /// Whether both components fall inside the 5x5 grid. Fields are public,
    /// so coordinates from outside the board must be checked before use.
    pub const fn is_on_board(&self) -> bool {
        self.col < GRID_SIZE && self.row < GRID_SIZE
    }

    pub const fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// The coordinate that receives focus after this one, wrapping from the
    /// last tile back to the first.
    pub const fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % TILE_COUNT)
    }

    pub fn offset_by(self, (d_col, d_row): (isize, isize)) -> Option<Self> {
        let next = Self {
            col: self.col.checked_add_signed(d_col)?,
            row: self.row.checked_add_signed(d_row)?,
        };
        next.is_on_board().then_some(next)
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..TILE_COUNT).map(Coord::from_index)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

pub fn to_coord(index: usize) -> Coord {
    Coord::from_index(index)
}

pub fn to_index(col: usize, row: usize) -> usize {
    Coord::new(col, row).index()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for i in 0..TILE_COUNT {
            let coord = to_coord(i);
            assert_eq!(to_index(coord.col, coord.row), i);
        }
    }

    #[test]
    fn test_row_major_layout() {
        assert_eq!(to_coord(0), Coord::new(0, 0));
        assert_eq!(to_coord(2), Coord::new(2, 0));
        assert_eq!(to_coord(5), Coord::new(0, 1));
        assert_eq!(to_coord(24), Coord::new(4, 4));
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(to_coord(3).next(), to_coord(4));
        assert_eq!(to_coord(4).next(), Coord::new(0, 1));
        assert_eq!(to_coord(24).next(), to_coord(0));
    }

    #[test]
    fn test_offset_by_respects_bounds() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset_by((-1, 0)), None);
        assert_eq!(corner.offset_by((0, -1)), None);
        assert_eq!(corner.offset_by((1, 1)), Some(Coord::new(1, 1)));

        let far = Coord::new(4, 4);
        assert_eq!(far.offset_by((1, 0)), None);
        assert_eq!(far.offset_by((-1, -1)), Some(Coord::new(3, 3)));
    }

    #[test]
    fn test_is_on_board() {
        assert!(Coord::new(0, 0).is_on_board());
        assert!(Coord::new(4, 4).is_on_board());
        assert!(!Coord::new(5, 0).is_on_board());
        assert!(!Coord::new(0, 5).is_on_board());
    }

    #[test]
    fn test_all_visits_every_tile_once() {
        let coords: Vec<Coord> = Coord::all().collect();
        assert_eq!(coords.len(), TILE_COUNT);
        for (i, coord) in coords.iter().enumerate() {
            assert_eq!(coord.index(), i);
        }
    }
}
