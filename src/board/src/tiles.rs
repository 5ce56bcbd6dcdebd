use core::fmt;

use crate::grid::{Coord, GRID_SIZE, TILE_COUNT};

/// Placeholder written into the solver payload for a tile with no letter.
/// Solvers must read this character as "no letter here".
pub const EMPTY_TILE: char = '.';

/// The authoritative letters of the 25 tiles. Only user input writes here;
/// hover previews change what is displayed, never what is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileStore {
    letters: [Option<char>; TILE_COUNT],
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TileStore {
    pub fn new() -> Self {
        Self {
            letters: [None; TILE_COUNT],
        }
    }

    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.letters[coord.index()]
    }

    /// Stores `letter` lower-cased. Any character is accepted.
    pub fn set_letter(&mut self, coord: Coord, letter: char) {
        self.letters[coord.index()] = Some(lowercase(letter));
    }

    pub fn clear(&mut self, coord: Coord) {
        self.letters[coord.index()] = None;
    }

    /// Applies the raw content of a tile's input field. The field can hold
    /// more than one character after a paste or an append; the most recently
    /// typed (last) character is kept.
    pub fn set_content(&mut self, coord: Coord, content: &str) {
        match content.chars().last() {
            Some(letter) => self.set_letter(coord, letter),
            None => self.clear(coord),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }

    /// The 25-character solver payload: row-major, lower-cased, with
    /// [`EMPTY_TILE`] for tiles without a letter.
    pub fn snapshot(&self) -> String {
        self.letters
            .iter()
            .map(|letter| letter.unwrap_or(EMPTY_TILE))
            .collect()
    }
}

fn lowercase(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl fmt::Display for TileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.letter(Coord::new(col, row)) {
                    Some(letter) => write!(f, " {} ", letter.to_uppercase())?,
                    None => write!(f, " {} ", EMPTY_TILE)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
