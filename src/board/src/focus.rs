use tracing::trace;

use crate::grid::{Coord, TILE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileInputState {
    #[default]
    AwaitingInput,
    Filled,
}

/// Where the host should move keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMove {
    pub target: Coord,
    /// Select the target's whole content so the next keystroke replaces it.
    pub select_all: bool,
}

/// Moves focus along the board as letters are typed. Every content change is
/// observed and none is ever rejected; deciding which letters are playable is
/// left to the solver.
#[derive(Debug, Clone)]
pub struct FocusAdvancer {
    states: [TileInputState; TILE_COUNT],
}

impl Default for FocusAdvancer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusAdvancer {
    pub fn new() -> Self {
        Self {
            states: [TileInputState::AwaitingInput; TILE_COUNT],
        }
    }

    pub fn state(&self, coord: Coord) -> TileInputState {
        self.states[coord.index()]
    }

    /// Observes the new content of tile `index`. A single character means a
    /// letter was just typed, so focus jumps to the next tile (wrapping after
    /// the last). Clears and multi-character pastes leave focus alone.
    pub fn on_content_changed(&mut self, index: usize, content: &str) -> Option<FocusMove> {
        let coord = Coord::from_index(index);
        self.states[index] = if content.is_empty() {
            TileInputState::AwaitingInput
        } else {
            TileInputState::Filled
        };

        if content.chars().count() != 1 {
            return None;
        }

        let target = coord.next();
        trace!(from = index, to = target.index(), "advancing focus");
        Some(FocusMove {
            target,
            select_all: true,
        })
    }
}
