pub mod board;
pub mod bridge;
pub mod config;
pub mod display;
pub mod focus;
pub mod grid;
pub mod multiplier;
pub mod preview;
pub mod solver;
pub mod tiles;

#[cfg(test)]
mod test_utils;

pub use board::{BoardState, BoardView, HostEvent, MenuAction};
pub use bridge::{PathTile, ResultEntry, Solver, SolverError};
pub use config::SolverConfig;
pub use grid::Coord;
pub use multiplier::MultiplierKind;
