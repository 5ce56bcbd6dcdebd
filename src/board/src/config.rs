use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub wordlist: PathBuf,
    pub min_word_length: usize,
    /// Tiles a path may re-letter when solving in swap mode.
    pub max_swaps: usize,
    pub long_word_length: usize,
    pub long_word_bonus: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from("wordlist"),
            min_word_length: 2,
            max_swaps: 1,
            long_word_length: 6,
            long_word_bonus: 10,
        }
    }
}

impl SolverConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("SPELLBOARD_WORDLIST") {
            config.wordlist = PathBuf::from(path);
        }

        if let Ok(length) = env::var("SPELLBOARD_MIN_WORD_LENGTH") {
            if let Ok(value) = length.parse::<usize>() {
                config.min_word_length = value.max(1);
            }
        }

        if let Ok(swaps) = env::var("SPELLBOARD_MAX_SWAPS") {
            if let Ok(value) = swaps.parse::<usize>() {
                config.max_swaps = value;
            }
        }

        if let Ok(length) = env::var("SPELLBOARD_LONG_WORD_LENGTH") {
            if let Ok(value) = length.parse::<usize>() {
                config.long_word_length = value;
            }
        }

        if let Ok(bonus) = env::var("SPELLBOARD_LONG_WORD_BONUS") {
            if let Ok(value) = bonus.parse::<u32>() {
                config.long_word_bonus = value;
            }
        }

        config
    }
}
