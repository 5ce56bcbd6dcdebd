use tracing::{debug, trace};

use crate::bridge::{PathTile, ResultEntry};

/// Number of result labels next to the board.
pub const RESULT_SLOTS: usize = 10;

/// Characters of the summary shown on a result label.
pub const LABEL_CHARS: usize = 2;

/// Identifies one arming of a result slot. Handed to the host when the slot
/// is armed and sent back with hover events; once the slot is re-armed the
/// old binding is stale and its events are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotBinding {
    pub slot: usize,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Previewing,
}

/// What the host shows for one slot after a result set is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub slot: usize,
    pub label: String,
    pub binding: Option<SlotBinding>,
}

#[derive(Debug, Clone)]
struct PreviewSession {
    generation: u64,
    label: String,
    entry: ResultEntry,
    state: SlotState,
}

pub fn label_for(summary: &str) -> String {
    summary.chars().take(LABEL_CHARS).collect()
}

#[derive(Debug, Clone)]
pub struct ResultPreviewController {
    slots: Vec<Option<PreviewSession>>,
    /// Previewing slots, oldest entry first.
    active: Vec<usize>,
    next_generation: u64,
}

impl Default for ResultPreviewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultPreviewController {
    pub fn new() -> Self {
        Self {
            slots: vec![None; RESULT_SLOTS],
            active: Vec::new(),
            next_generation: 1,
        }
    }

    /// Replaces the whole result set. Every previous session ends, so any
    /// preview overlay it had disappears, and its binding goes stale. Slots
    /// past the end of `entries` are emptied.
    pub fn publish(&mut self, entries: Vec<ResultEntry>) -> Vec<SlotUpdate> {
        self.active.clear();
        let mut entries = entries.into_iter();

        (0..RESULT_SLOTS)
            .map(|slot| match entries.next() {
                Some(entry) => {
                    let generation = self.next_generation;
                    self.next_generation += 1;
                    let label = label_for(&entry.summary);
                    trace!(slot, generation, summary = %entry.summary, "arming result slot");
                    self.slots[slot] = Some(PreviewSession {
                        generation,
                        label: label.clone(),
                        entry,
                        state: SlotState::Idle,
                    });
                    SlotUpdate {
                        slot,
                        label,
                        binding: Some(SlotBinding { slot, generation }),
                    }
                }
                None => {
                    self.slots[slot] = None;
                    SlotUpdate {
                        slot,
                        label: String::new(),
                        binding: None,
                    }
                }
            })
            .collect()
    }

    fn session_mut(&mut self, binding: SlotBinding) -> Option<&mut PreviewSession> {
        match self.slots.get_mut(binding.slot) {
            Some(Some(session)) if session.generation == binding.generation => Some(session),
            _ => {
                debug!(slot = binding.slot, generation = binding.generation, "ignoring stale hover binding");
                None
            }
        }
    }

    /// Starts previewing the bound slot. Returns whether anything changed.
    pub fn enter(&mut self, binding: SlotBinding) -> bool {
        let Some(session) = self.session_mut(binding) else {
            return false;
        };
        if session.state == SlotState::Previewing {
            return false;
        }
        session.state = SlotState::Previewing;
        self.active.push(binding.slot);
        true
    }

    /// Stops previewing the bound slot. Returns whether anything changed.
    pub fn leave(&mut self, binding: SlotBinding) -> bool {
        let Some(session) = self.session_mut(binding) else {
            return false;
        };
        if session.state == SlotState::Idle {
            return false;
        }
        session.state = SlotState::Idle;
        self.active.retain(|slot| *slot != binding.slot);
        true
    }

    /// Paths of the slots being previewed, oldest entry first.
    pub fn active_paths(&self) -> Vec<&[PathTile]> {
        self.active
            .iter()
            .filter_map(|slot| self.slots[*slot].as_ref())
            .map(|session| session.entry.path.as_slice())
            .collect()
    }

    pub fn state(&self, slot: usize) -> SlotState {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .map(|session| session.state)
            .unwrap_or(SlotState::Idle)
    }

    pub fn binding(&self, slot: usize) -> Option<SlotBinding> {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .map(|session| SlotBinding {
                slot,
                generation: session.generation,
            })
    }

    pub fn label(&self, slot: usize) -> &str {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .map(|session| session.label.as_str())
            .unwrap_or("")
    }

    pub fn entry(&self, slot: usize) -> Option<&ResultEntry> {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .map(|session| &session.entry)
    }

    pub fn is_previewing(&self) -> bool {
        !self.active.is_empty()
    }
}
