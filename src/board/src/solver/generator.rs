use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_seeder::Seeder;

use crate::grid::TILE_COUNT;

const LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('a', 0.078),
    ('b', 0.02),
    ('c', 0.04),
    ('d', 0.038),
    ('e', 0.11),
    ('f', 0.014),
    ('g', 0.03),
    ('h', 0.023),
    ('i', 0.086),
    ('j', 0.0021),
    ('k', 0.0097),
    ('l', 0.053),
    ('m', 0.027),
    ('n', 0.072),
    ('o', 0.061),
    ('p', 0.028),
    ('q', 0.0019),
    ('r', 0.073),
    ('s', 0.087),
    ('t', 0.067),
    ('u', 0.033),
    ('v', 0.01),
    ('w', 0.0091),
    ('x', 0.0027),
    ('y', 0.016),
    ('z', 0.0044),
];

/// Fills boards with letters drawn by English letter frequency.
pub struct BoardGenerator {
    letters: Vec<char>,
    distribution: WeightedIndex<f64>,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator {
    pub fn new() -> Self {
        let letters = LETTER_FREQUENCIES.iter().map(|(c, _)| *c).collect();
        let distribution = WeightedIndex::new(LETTER_FREQUENCIES.iter().map(|(_, w)| *w))
            .expect("letter frequencies are positive");
        Self {
            letters,
            distribution,
        }
    }

    /// 25 letters, row-major, ready to be typed into the board.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> String {
        (0..TILE_COUNT)
            .map(|_| self.letters[self.distribution.sample(rng)])
            .collect()
    }

    /// Same seed string, same board.
    pub fn generate_seeded(&self, seed: &str) -> String {
        let seed: [u8; 32] = Seeder::from(seed).make_seed();
        self.generate(&mut StdRng::from_seed(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fills_every_tile_with_a_letter() {
        let generator = BoardGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let board = generator.generate(&mut rng);
        assert_eq!(board.chars().count(), TILE_COUNT);
        assert!(board.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_seeded_boards_are_reproducible() {
        let generator = BoardGenerator::new();
        assert_eq!(generator.generate_seeded("2024-01-01"), generator.generate_seeded("2024-01-01"));
        assert_ne!(generator.generate_seeded("2024-01-01"), generator.generate_seeded("2024-01-02"));
    }

    #[test]
    fn test_common_letters_dominate() {
        let generator = BoardGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut e_count = 0;
        let mut q_count = 0;
        for _ in 0..200 {
            for c in generator.generate(&mut rng).chars() {
                match c {
                    'e' => e_count += 1,
                    'q' => q_count += 1,
                    _ => {}
                }
            }
        }
        assert!(e_count > q_count * 5);
    }
}
