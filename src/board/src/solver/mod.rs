//! Reference Spellcast solver: finds dictionary words along paths of adjacent
//! tiles, optionally re-lettering a bounded number of tiles per path.

pub mod directions;
pub mod generator;
pub mod scoring;
pub mod trie;

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::{debug, info};

use crate::bridge::{PathTile, ResultEntry, Solver, SolverError};
use crate::config::SolverConfig;
use crate::grid::{Coord, TILE_COUNT};

pub use generator::BoardGenerator;
pub use scoring::Scorer;
pub use trie::Trie;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Candidate {
    word: String,
    score: u32,
    path: Vec<PathTile>,
}

impl Candidate {
    fn swaps(&self) -> usize {
        self.path.iter().filter(|step| step.swap).count()
    }

    fn beats(&self, other: &Candidate) -> bool {
        (self.score, Reverse(self.swaps())) > (other.score, Reverse(other.swaps()))
    }

    fn summary(&self) -> String {
        match self.swaps() {
            0 => format!("{} {}", self.score, self.word),
            1 => format!("{} {} (1 swap)", self.score, self.word),
            n => format!("{} {} ({} swaps)", self.score, self.word, n),
        }
    }
}

/// Mutable state of one depth-first walk.
struct Walk {
    visited: [bool; TILE_COUNT],
    path: Vec<PathTile>,
    word: String,
}

#[derive(Clone, Debug)]
pub struct SpellSolver {
    dictionary: Trie,
    scorer: Scorer,
    config: SolverConfig,
    board: [Option<char>; TILE_COUNT],
    word_mult: Option<Coord>,
    letter_mults: Vec<(Coord, u32)>,
}

impl SpellSolver {
    pub fn new(dictionary: Trie, config: SolverConfig) -> Self {
        Self {
            dictionary,
            scorer: Scorer::new(&config),
            config,
            board: [None; TILE_COUNT],
            word_mult: None,
            letter_mults: Vec::new(),
        }
    }

    /// Loads the dictionary named by `config.wordlist`.
    pub fn from_config(config: SolverConfig) -> Result<Self, SolverError> {
        let dictionary = Trie::from_file(&config.wordlist).map_err(|source| SolverError::Dictionary {
            path: config.wordlist.clone(),
            source,
        })?;
        info!(path = %config.wordlist.display(), "dictionary loaded");
        Ok(Self::new(dictionary, config))
    }

    pub fn with_words(words: Vec<&str>, config: SolverConfig) -> Self {
        Self::new(Trie::from(words), config)
    }

    /// Every playable word with its best path, best first.
    fn candidates(&self, swap: bool) -> Vec<Candidate> {
        let max_swaps = if swap { self.config.max_swaps } else { 0 };
        let mut best: HashMap<String, Candidate> = HashMap::new();
        let mut walk = Walk {
            visited: [false; TILE_COUNT],
            path: Vec::new(),
            word: String::new(),
        };

        for start in Coord::all() {
            self.search(start, &self.dictionary, max_swaps, &mut walk, &mut best);
        }

        let mut candidates: Vec<Candidate> = best.into_values().collect();
        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.swaps().cmp(&b.swaps()))
                .then_with(|| a.word.cmp(&b.word))
        });
        candidates
    }

    fn search(
        &self,
        coord: Coord,
        node: &Trie,
        swaps_left: usize,
        walk: &mut Walk,
        best: &mut HashMap<String, Candidate>,
    ) {
        let Some(board_letter) = self.board[coord.index()] else {
            return;
        };
        walk.visited[coord.index()] = true;

        let options: Vec<(char, &Trie)> = if swaps_left > 0 {
            node.children().collect()
        } else {
            node.child(board_letter)
                .map(|child| (board_letter, child))
                .into_iter()
                .collect()
        };

        for (letter, child) in options {
            let swap = letter != board_letter;
            let remaining = swaps_left - usize::from(swap);
            walk.path.push(PathTile { coord, letter, swap });
            walk.word.push(letter);

            if child.is_word() && walk.path.len() >= self.config.min_word_length {
                self.record(walk, best);
            }

            for direction in directions::DIRECTIONS {
                if let Some(next) = coord.offset_by(direction) {
                    if !walk.visited[next.index()] {
                        self.search(next, child, remaining, walk, best);
                    }
                }
            }

            walk.path.pop();
            walk.word.pop();
        }

        walk.visited[coord.index()] = false;
    }

    fn record(&self, walk: &Walk, best: &mut HashMap<String, Candidate>) {
        let candidate = Candidate {
            word: walk.word.clone(),
            score: self.scorer.score(&walk.path, self.word_mult, &self.letter_mults),
            path: walk.path.clone(),
        };
        let improves = best
            .get(&candidate.word)
            .map_or(true, |existing| candidate.beats(existing));
        if improves {
            best.insert(candidate.word.clone(), candidate);
        }
    }
}

impl Solver for SpellSolver {
    /// Resets multipliers. Characters other than ASCII letters count as
    /// empty tiles.
    fn load(&mut self, board: &str) -> Result<(), SolverError> {
        let letters: Vec<char> = board.chars().collect();
        if letters.len() != TILE_COUNT {
            return Err(SolverError::InvalidBoard {
                expected: TILE_COUNT,
                actual: letters.len(),
            });
        }

        for (tile, letter) in self.board.iter_mut().zip(letters) {
            let letter = letter.to_ascii_lowercase();
            *tile = letter.is_ascii_lowercase().then_some(letter);
        }
        self.word_mult = None;
        self.letter_mults.clear();
        debug!(board, "board loaded");
        Ok(())
    }

    fn set_mult_word(&mut self, coord: Coord) -> Result<(), SolverError> {
        self.word_mult = Some(coord);
        Ok(())
    }

    fn set_mult_letter(&mut self, coord: Coord, factor: u32) -> Result<(), SolverError> {
        if !(2..=3).contains(&factor) {
            return Err(SolverError::Internal(format!(
                "unsupported letter multiplier {} at {}",
                factor, coord
            )));
        }
        self.letter_mults.push((coord, factor));
        Ok(())
    }

    fn solve(&mut self, swap: bool) -> Result<Vec<ResultEntry>, SolverError> {
        let candidates = self.candidates(swap);
        debug!(swap, found = candidates.len(), "search complete");
        Ok(candidates
            .into_iter()
            .map(|candidate| ResultEntry::new(candidate.summary(), candidate.path))
            .collect())
    }
}
