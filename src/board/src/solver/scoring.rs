use phf::phf_map;

use crate::bridge::PathTile;
use crate::config::SolverConfig;
use crate::grid::Coord;

static LETTER_POINTS: phf::Map<char, u32> = phf_map! {
    'a' => 1, 'b' => 4, 'c' => 5, 'd' => 3, 'e' => 1, 'f' => 5, 'g' => 3,
    'h' => 4, 'i' => 1, 'j' => 7, 'k' => 6, 'l' => 3, 'm' => 4, 'n' => 2,
    'o' => 1, 'p' => 4, 'q' => 8, 'r' => 2, 's' => 2, 't' => 2, 'u' => 4,
    'v' => 5, 'w' => 5, 'x' => 7, 'y' => 4, 'z' => 8,
};

pub fn letter_points(letter: char) -> u32 {
    LETTER_POINTS.get(&letter).copied().unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct Scorer {
    long_word_length: usize,
    long_word_bonus: u32,
}

impl Scorer {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            long_word_length: config.long_word_length,
            long_word_bonus: config.long_word_bonus,
        }
    }

    /// Letter values, times any letter multiplier on the tile; doubled when a
    /// tile of the path carries the word multiplier; plus the long word bonus.
    pub fn score(&self, path: &[PathTile], word_mult: Option<Coord>, letter_mults: &[(Coord, u32)]) -> u32 {
        let mut doubled = false;
        let mut total: u32 = path
            .iter()
            .map(|step| {
                doubled |= word_mult == Some(step.coord);
                letter_mults
                    .iter()
                    .filter(|(coord, _)| *coord == step.coord)
                    .fold(letter_points(step.letter), |points, (_, factor)| points * factor)
            })
            .sum();

        if doubled {
            total *= 2;
        }
        if path.len() >= self.long_word_length {
            total += self.long_word_bonus;
        }
        total
    }
}
