//! The board interaction state manager: owns the tiles, the multiplier
//! assignment, focus tracking and result previews, and turns host events into
//! view updates.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::bridge::{self, ResultEntry, Solver, SolverError};
use crate::display::{DisplayState, TileDisplay};
use crate::focus::FocusAdvancer;
use crate::grid::{Coord, TILE_COUNT};
use crate::multiplier::{MultiplierAssignment, MultiplierKind, MultiplierManager};
use crate::preview::{ResultPreviewController, SlotBinding, SlotState, SlotUpdate, RESULT_SLOTS};
use crate::tiles::TileStore;

/// The host UI as seen from the board.
pub trait BoardView {
    fn paint_tile(&mut self, coord: Coord, display: &TileDisplay);

    fn focus_tile(&mut self, coord: Coord, select_all: bool);

    /// `binding` is `None` when the slot is empty and should not react to
    /// the pointer.
    fn set_result_label(&mut self, slot: usize, label: &str, binding: Option<SlotBinding>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Set(MultiplierKind),
    RemoveBonus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TileContentChanged { index: usize, content: String },
    ContextMenu { coord: Coord, action: MenuAction },
    SolveRequested { swap: bool },
    ResultHoverEnter(SlotBinding),
    ResultHoverLeave(SlotBinding),
}

/// Serializable view of the board for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub board: String,
    pub multipliers: MultiplierAssignment,
    pub labels: Vec<String>,
    pub previewing: Vec<usize>,
    /// The display as last painted, row-major.
    pub display: Vec<TileDisplay>,
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    tiles: TileStore,
    multipliers: MultiplierManager,
    focus: FocusAdvancer,
    previews: ResultPreviewController,
    painted: DisplayState,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &TileStore {
        &self.tiles
    }

    pub fn multipliers(&self) -> &MultiplierManager {
        &self.multipliers
    }

    pub fn focus(&self) -> &FocusAdvancer {
        &self.focus
    }

    pub fn previews(&self) -> &ResultPreviewController {
        &self.previews
    }

    /// The display as last pushed to the view.
    pub fn painted(&self) -> &DisplayState {
        &self.painted
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::derive(&self.tiles, &self.multipliers, &self.previews.active_paths())
    }

    /// Paints every tile and label, for a freshly attached view.
    pub fn paint_all<V: BoardView + ?Sized>(&mut self, view: &mut V) {
        self.painted = self.display();
        for coord in Coord::all() {
            view.paint_tile(coord, self.painted.tile(coord));
        }
        for slot in 0..RESULT_SLOTS {
            view.set_result_label(slot, self.previews.label(slot), self.previews.binding(slot));
        }
    }

    /// Dispatches one host event. Only a solve can fail, and a failed solve
    /// leaves the board, the multipliers and the published results as they
    /// were.
    pub fn handle<S, V>(&mut self, event: HostEvent, solver: &mut S, view: &mut V) -> Result<(), SolverError>
    where
        S: Solver + ?Sized,
        V: BoardView + ?Sized,
    {
        debug!(?event, "handling host event");
        match event {
            HostEvent::TileContentChanged { index, content } => {
                self.tile_content_changed(index, &content, view)
            }
            HostEvent::ContextMenu { coord, action } => self.context_menu(coord, action, view),
            HostEvent::SolveRequested { swap } => self.solve(swap, solver, view)?,
            HostEvent::ResultHoverEnter(binding) => self.hover_enter(binding, view),
            HostEvent::ResultHoverLeave(binding) => self.hover_leave(binding, view),
        }
        Ok(())
    }

    pub fn tile_content_changed<V: BoardView + ?Sized>(&mut self, index: usize, content: &str, view: &mut V) {
        if index >= TILE_COUNT {
            warn!(index, "content change for a tile outside the board");
            return;
        }
        self.tiles.set_content(Coord::from_index(index), content);
        self.repaint(view);
        if let Some(moved) = self.focus.on_content_changed(index, content) {
            view.focus_tile(moved.target, moved.select_all);
        }
    }

    pub fn context_menu<V: BoardView + ?Sized>(&mut self, coord: Coord, action: MenuAction, view: &mut V) {
        if !coord.is_on_board() {
            warn!(%coord, ?action, "context menu for a tile outside the board");
            return;
        }
        match action {
            MenuAction::Set(kind) => {
                self.multipliers.set(kind, coord);
            }
            MenuAction::RemoveBonus => {
                self.multipliers.remove_bonus();
            }
        }
        self.repaint(view);
    }

    pub fn solve<S, V>(&mut self, swap: bool, solver: &mut S, view: &mut V) -> Result<(), SolverError>
    where
        S: Solver + ?Sized,
        V: BoardView + ?Sized,
    {
        let results = match bridge::solve(&self.tiles, &self.multipliers, solver, swap) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, swap, "solve failed, keeping previous results");
                return Err(e);
            }
        };

        info!(count = results.len(), swap, "publishing results");
        let updates = self.previews.publish(results);
        for SlotUpdate { slot, label, binding } in &updates {
            view.set_result_label(*slot, label, *binding);
        }
        self.repaint(view);
        Ok(())
    }

    pub fn hover_enter<V: BoardView + ?Sized>(&mut self, binding: SlotBinding, view: &mut V) {
        if self.previews.enter(binding) {
            self.repaint(view);
        }
    }

    /// Ends the preview. Every tile it touched falls back to its stored
    /// letter and to whatever multiplier styling currently applies.
    pub fn hover_leave<V: BoardView + ?Sized>(&mut self, binding: SlotBinding, view: &mut V) {
        if self.previews.leave(binding) {
            self.repaint(view);
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.tiles.snapshot(),
            multipliers: self.multipliers.assignment().clone(),
            labels: (0..RESULT_SLOTS)
                .map(|slot| self.previews.label(slot).to_string())
                .collect(),
            previewing: (0..RESULT_SLOTS)
                .filter(|slot| self.previews.state(*slot) == SlotState::Previewing)
                .collect(),
            display: self.painted.tiles().to_vec(),
            results: (0..RESULT_SLOTS)
                .filter_map(|slot| self.previews.entry(slot).cloned())
                .collect(),
        }
    }

    fn repaint<V: BoardView + ?Sized>(&mut self, view: &mut V) {
        let next = self.display();
        for coord in next.changed_since(&self.painted) {
            view.paint_tile(coord, next.tile(coord));
        }
        self.painted = next;
    }
}
