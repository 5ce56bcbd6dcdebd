//! The boundary to the solving engine: the `Solver` contract, the shapes it
//! exchanges, and the compilation of board state into a solve request.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::grid::{Coord, TILE_COUNT};
use crate::multiplier::MultiplierManager;
use crate::preview::RESULT_SLOTS;
use crate::tiles::TileStore;

/// One step of a candidate word path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathTile {
    pub coord: Coord,
    pub letter: char,
    /// The path plays `letter` here instead of the board's letter.
    pub swap: bool,
}

/// A ranked candidate returned by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub summary: String,
    pub path: Vec<PathTile>,
}

impl ResultEntry {
    pub fn new(summary: impl Into<String>, path: Vec<PathTile>) -> Self {
        Self {
            summary: summary.into(),
            path,
        }
    }

    pub fn swap_count(&self) -> usize {
        self.path.iter().filter(|step| step.swap).count()
    }
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("board must have {expected} tiles, got {actual}")]
    InvalidBoard { expected: usize, actual: usize },
    #[error("failed to load dictionary from {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("solver failure: {0}")]
    Internal(String),
}

/// The engine behind the board. Boards arrive as 25 lower-case characters,
/// row-major, with [`crate::tiles::EMPTY_TILE`] marking tiles without a letter.
pub trait Solver {
    fn load(&mut self, board: &str) -> Result<(), SolverError>;

    fn set_mult_word(&mut self, coord: Coord) -> Result<(), SolverError>;

    /// `factor` is 2 for a double letter, 3 for a triple letter.
    fn set_mult_letter(&mut self, coord: Coord, factor: u32) -> Result<(), SolverError>;

    /// Ranked candidates, best first.
    fn solve(&mut self, swap: bool) -> Result<Vec<ResultEntry>, SolverError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Word(Coord),
    Letter { coord: Coord, factor: u32 },
}

/// Everything the solver needs, compiled from the board at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub board: String,
    pub annotations: Vec<Annotation>,
}

impl SolveRequest {
    /// Annotations are ordered word, double letter, triple letter.
    pub fn compile(tiles: &TileStore, multipliers: &MultiplierManager) -> Self {
        let annotations = multipliers
            .assignment()
            .iter()
            .map(|(kind, coord)| match kind.letter_factor() {
                Some(factor) => Annotation::Letter { coord, factor },
                None => Annotation::Word(coord),
            })
            .collect();

        Self {
            board: tiles.snapshot(),
            annotations,
        }
    }

    /// Loads, annotates and solves. The returned list holds at most
    /// [`RESULT_SLOTS`] entries.
    pub fn dispatch<S: Solver + ?Sized>(
        &self,
        solver: &mut S,
        swap: bool,
    ) -> Result<Vec<ResultEntry>, SolverError> {
        debug_assert_eq!(self.board.chars().count(), TILE_COUNT);
        debug!(board = %self.board, annotations = self.annotations.len(), "loading board into solver");

        solver.load(&self.board)?;
        for annotation in &self.annotations {
            match *annotation {
                Annotation::Word(coord) => solver.set_mult_word(coord)?,
                Annotation::Letter { coord, factor } => solver.set_mult_letter(coord, factor)?,
            }
        }

        let mut results = solver.solve(swap)?;
        let found = results.len();
        results.truncate(RESULT_SLOTS);
        if let Some(step) = results
            .iter()
            .flat_map(|entry| entry.path.iter())
            .find(|step| !step.coord.is_on_board())
        {
            return Err(SolverError::Internal(format!(
                "result path leaves the board at {}",
                step.coord
            )));
        }
        info!(swap, found, shown = results.len(), "solve finished");
        Ok(results)
    }
}

/// Compiles the current board and runs the solver against it.
pub fn solve<S: Solver + ?Sized>(
    tiles: &TileStore,
    multipliers: &MultiplierManager,
    solver: &mut S,
    swap: bool,
) -> Result<Vec<ResultEntry>, SolverError> {
    SolveRequest::compile(tiles, multipliers).dispatch(solver, swap)
}
