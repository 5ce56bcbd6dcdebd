#[cfg(test)]
pub mod test_utils {
    use std::collections::BTreeMap;

    use crate::board::BoardView;
    use crate::bridge::{PathTile, ResultEntry, Solver, SolverError};
    use crate::display::TileDisplay;
    use crate::grid::{Coord, TILE_COUNT};
    use crate::preview::SlotBinding;
    use crate::tiles::TileStore;

    /// Builds a tile store from a 25-character row-major string; `.` leaves a
    /// tile empty.
    pub fn tiles_from(letters: &str) -> TileStore {
        assert_eq!(letters.chars().count(), TILE_COUNT, "test boards need 25 tiles");
        let mut tiles = TileStore::new();
        for (i, letter) in letters.chars().enumerate() {
            if letter != '.' {
                tiles.set_letter(Coord::from_index(i), letter);
            }
        }
        tiles
    }

    /// Builds a result entry from `(col, row, letter, swap)` steps.
    pub fn entry(summary: &str, steps: &[(usize, usize, char, bool)]) -> ResultEntry {
        ResultEntry::new(
            summary,
            steps
                .iter()
                .map(|&(col, row, letter, swap)| PathTile {
                    coord: Coord::new(col, row),
                    letter,
                    swap,
                })
                .collect(),
        )
    }

    /// A view that remembers everything painted onto it.
    #[derive(Debug)]
    pub struct RecordingView {
        pub tiles: [TileDisplay; TILE_COUNT],
        pub paints: Vec<(Coord, TileDisplay)>,
        pub focus: Vec<(Coord, bool)>,
        pub labels: BTreeMap<usize, (String, Option<SlotBinding>)>,
    }

    impl Default for RecordingView {
        fn default() -> Self {
            Self {
                tiles: [TileDisplay::BLANK; TILE_COUNT],
                paints: Vec::new(),
                focus: Vec::new(),
                labels: BTreeMap::new(),
            }
        }
    }

    impl RecordingView {
        pub fn tile(&self, coord: Coord) -> &TileDisplay {
            &self.tiles[coord.index()]
        }

        pub fn label(&self, slot: usize) -> &str {
            self.labels
                .get(&slot)
                .map(|(label, _)| label.as_str())
                .unwrap_or("")
        }

        pub fn binding(&self, slot: usize) -> Option<SlotBinding> {
            self.labels.get(&slot).and_then(|(_, binding)| *binding)
        }
    }

    impl BoardView for RecordingView {
        fn paint_tile(&mut self, coord: Coord, display: &TileDisplay) {
            self.tiles[coord.index()] = *display;
            self.paints.push((coord, *display));
        }

        fn focus_tile(&mut self, coord: Coord, select_all: bool) {
            self.focus.push((coord, select_all));
        }

        fn set_result_label(&mut self, slot: usize, label: &str, binding: Option<SlotBinding>) {
            self.labels.insert(slot, (label.to_string(), binding));
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SolverCall {
        Load(String),
        MultWord(Coord),
        MultLetter(Coord, u32),
        Solve(bool),
    }

    /// Records every call and answers `solve` with canned results.
    #[derive(Debug, Default)]
    pub struct ScriptedSolver {
        pub calls: Vec<SolverCall>,
        results: Vec<ResultEntry>,
        fail: bool,
    }

    impl ScriptedSolver {
        pub fn new(results: Vec<ResultEntry>) -> Self {
            Self {
                results,
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl Solver for ScriptedSolver {
        fn load(&mut self, board: &str) -> Result<(), SolverError> {
            self.calls.push(SolverCall::Load(board.to_string()));
            Ok(())
        }

        fn set_mult_word(&mut self, coord: Coord) -> Result<(), SolverError> {
            self.calls.push(SolverCall::MultWord(coord));
            Ok(())
        }

        fn set_mult_letter(&mut self, coord: Coord, factor: u32) -> Result<(), SolverError> {
            self.calls.push(SolverCall::MultLetter(coord, factor));
            Ok(())
        }

        fn solve(&mut self, swap: bool) -> Result<Vec<ResultEntry>, SolverError> {
            self.calls.push(SolverCall::Solve(swap));
            if self.fail {
                return Err(SolverError::Internal("scripted failure".to_string()));
            }
            Ok(self.results.clone())
        }
    }
}
