use serde::Serialize;
use tracing::debug;

use crate::display::MultiplierOverlay;
use crate::grid::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MultiplierKind {
    WordMultiplier,
    DoubleLetter,
    TripleLetter,
}

impl MultiplierKind {
    /// Every kind, in the order annotations are forwarded to the solver.
    pub const ALL: [MultiplierKind; 3] = [
        MultiplierKind::WordMultiplier,
        MultiplierKind::DoubleLetter,
        MultiplierKind::TripleLetter,
    ];

    pub fn letter_factor(&self) -> Option<u32> {
        match self {
            MultiplierKind::WordMultiplier => None,
            MultiplierKind::DoubleLetter => Some(2),
            MultiplierKind::TripleLetter => Some(3),
        }
    }

    pub fn overlay(&self) -> MultiplierOverlay {
        match self {
            MultiplierKind::WordMultiplier => MultiplierOverlay::Word,
            MultiplierKind::DoubleLetter | MultiplierKind::TripleLetter => {
                MultiplierOverlay::Letter
            }
        }
    }
}

/// At most one coordinate per kind. Kinds may share a coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiplierAssignment {
    word: Option<Coord>,
    double_letter: Option<Coord>,
    triple_letter: Option<Coord>,
}

impl MultiplierAssignment {
    pub fn get(&self, kind: MultiplierKind) -> Option<Coord> {
        match kind {
            MultiplierKind::WordMultiplier => self.word,
            MultiplierKind::DoubleLetter => self.double_letter,
            MultiplierKind::TripleLetter => self.triple_letter,
        }
    }

    fn slot_mut(&mut self, kind: MultiplierKind) -> &mut Option<Coord> {
        match kind {
            MultiplierKind::WordMultiplier => &mut self.word,
            MultiplierKind::DoubleLetter => &mut self.double_letter,
            MultiplierKind::TripleLetter => &mut self.triple_letter,
        }
    }

    /// Active assignments in [`MultiplierKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (MultiplierKind, Coord)> + '_ {
        MultiplierKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|coord| (kind, coord)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultiplierManager {
    assignment: MultiplierAssignment,
}

impl MultiplierManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assignment(&self) -> &MultiplierAssignment {
        &self.assignment
    }

    pub fn get(&self, kind: MultiplierKind) -> Option<Coord> {
        self.assignment.get(kind)
    }

    /// Moves `kind` to `coord`, returning the coordinate it previously held.
    /// The previous coordinate drops back to its unmultiplied style on the
    /// next repaint unless another kind still holds it.
    pub fn set(&mut self, kind: MultiplierKind, coord: Coord) -> Option<Coord> {
        let previous = self.assignment.slot_mut(kind).replace(coord);
        debug!(?kind, %coord, ?previous, "multiplier assigned");
        previous
    }

    pub fn clear(&mut self, kind: MultiplierKind) -> Option<Coord> {
        let previous = self.assignment.slot_mut(kind).take();
        debug!(?kind, ?previous, "multiplier cleared");
        previous
    }

    /// Clears every kind at once, returning the coordinates that were held.
    pub fn remove_bonus(&mut self) -> Vec<Coord> {
        let released: Vec<Coord> = self.assignment.iter().map(|(_, coord)| coord).collect();
        self.assignment = MultiplierAssignment::default();
        debug!(released = released.len(), "all multipliers removed");
        released
    }

    /// Re-derives the multiplier overlay of every assigned coordinate from the
    /// current assignment. Letter kinds come after the word kind, so a tile
    /// holding both ends up with the letter overlay.
    pub fn reapply(&self) -> Vec<(Coord, MultiplierOverlay)> {
        self.assignment
            .iter()
            .map(|(kind, coord)| (coord, kind.overlay()))
            .collect()
    }

    pub fn overlay_at(&self, coord: Coord) -> Option<MultiplierOverlay> {
        self.reapply()
            .into_iter()
            .filter(|(assigned, _)| *assigned == coord)
            .map(|(_, overlay)| overlay)
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_moves_assignment() {
        let mut manager = MultiplierManager::new();
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 2);

        assert_eq!(manager.set(MultiplierKind::DoubleLetter, a), None);
        assert_eq!(manager.set(MultiplierKind::DoubleLetter, b), Some(a));

        assert_eq!(manager.get(MultiplierKind::DoubleLetter), Some(b));
        assert_eq!(manager.overlay_at(a), None);
        assert_eq!(manager.overlay_at(b), Some(MultiplierOverlay::Letter));
        assert_eq!(manager.assignment().iter().count(), 1);
    }

    #[test]
    fn test_set_same_coordinate_is_idempotent() {
        let mut manager = MultiplierManager::new();
        let x = Coord::new(2, 2);

        manager.set(MultiplierKind::WordMultiplier, x);
        assert_eq!(manager.set(MultiplierKind::WordMultiplier, x), Some(x));

        let active: Vec<_> = manager.assignment().iter().collect();
        assert_eq!(active, vec![(MultiplierKind::WordMultiplier, x)]);
        assert_eq!(manager.overlay_at(x), Some(MultiplierOverlay::Word));
    }

    #[test]
    fn test_kinds_may_share_a_coordinate() {
        let mut manager = MultiplierManager::new();
        let x = Coord::new(1, 4);

        manager.set(MultiplierKind::WordMultiplier, x);
        manager.set(MultiplierKind::TripleLetter, x);

        assert_eq!(manager.get(MultiplierKind::WordMultiplier), Some(x));
        assert_eq!(manager.get(MultiplierKind::TripleLetter), Some(x));
        assert_eq!(manager.overlay_at(x), Some(MultiplierOverlay::Letter));

        // Word overlay comes back once the letter kind leaves.
        manager.set(MultiplierKind::TripleLetter, Coord::new(0, 0));
        assert_eq!(manager.overlay_at(x), Some(MultiplierOverlay::Word));
    }

    #[test]
    fn test_remove_bonus_clears_everything() {
        let mut manager = MultiplierManager::new();
        manager.set(MultiplierKind::WordMultiplier, Coord::new(0, 0));
        manager.set(MultiplierKind::DoubleLetter, Coord::new(1, 1));
        manager.set(MultiplierKind::TripleLetter, Coord::new(2, 2));
        manager.set(MultiplierKind::DoubleLetter, Coord::new(3, 3));

        let released = manager.remove_bonus();
        assert_eq!(
            released,
            vec![Coord::new(0, 0), Coord::new(3, 3), Coord::new(2, 2)]
        );
        assert!(manager.assignment().is_empty());
        assert!(manager.reapply().is_empty());
        for coord in Coord::all() {
            assert_eq!(manager.overlay_at(coord), None);
        }
    }

    #[test]
    fn test_clear_single_kind() {
        let mut manager = MultiplierManager::new();
        manager.set(MultiplierKind::WordMultiplier, Coord::new(0, 0));
        manager.set(MultiplierKind::TripleLetter, Coord::new(4, 4));

        assert_eq!(manager.clear(MultiplierKind::WordMultiplier), Some(Coord::new(0, 0)));
        assert_eq!(manager.clear(MultiplierKind::WordMultiplier), None);
        assert_eq!(manager.get(MultiplierKind::TripleLetter), Some(Coord::new(4, 4)));
    }

    #[test]
    fn test_iteration_order_is_word_double_triple() {
        let mut manager = MultiplierManager::new();
        manager.set(MultiplierKind::TripleLetter, Coord::new(2, 0));
        manager.set(MultiplierKind::DoubleLetter, Coord::new(1, 0));
        manager.set(MultiplierKind::WordMultiplier, Coord::new(0, 0));

        let kinds: Vec<MultiplierKind> = manager.assignment().iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, MultiplierKind::ALL.to_vec());
    }

    #[test]
    fn test_letter_factors() {
        assert_eq!(MultiplierKind::WordMultiplier.letter_factor(), None);
        assert_eq!(MultiplierKind::DoubleLetter.letter_factor(), Some(2));
        assert_eq!(MultiplierKind::TripleLetter.letter_factor(), Some(3));
    }
}
