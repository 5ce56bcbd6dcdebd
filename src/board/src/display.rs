//! What the host paints for each tile.
//!
//! The display is never edited in place. It is derived from the stored
//! letters, the multiplier assignment and the currently active hover
//! previews, in that priority order, and recomputed after every event.

use serde::Serialize;

use crate::bridge::PathTile;
use crate::grid::{Coord, TILE_COUNT};
use crate::multiplier::MultiplierManager;
use crate::tiles::TileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    DeepPink,
    Gold,
    Red,
    Blue,
}

impl Color {
    /// Named color as understood by common widget toolkits.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::DeepPink => "deep pink",
            Color::Gold => "gold",
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub outline: Color,
    pub background: Color,
    pub foreground: Color,
    pub font_size: u8,
    pub weight: FontWeight,
}

impl TileStyle {
    pub const PLAIN: TileStyle = TileStyle {
        outline: Color::Black,
        background: Color::White,
        foreground: Color::Black,
        font_size: 16,
        weight: FontWeight::Normal,
    };

    pub const fn multiplier(color: Color) -> Self {
        TileStyle {
            outline: color,
            ..TileStyle::PLAIN
        }
    }

    pub const fn preview(color: Color) -> Self {
        TileStyle {
            outline: color,
            background: color,
            foreground: Color::White,
            font_size: 20,
            weight: FontWeight::Bold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MultiplierOverlay {
    Word,
    Letter,
}

impl MultiplierOverlay {
    pub fn color(&self) -> Color {
        match self {
            MultiplierOverlay::Word => Color::DeepPink,
            MultiplierOverlay::Letter => Color::Gold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreviewMark {
    /// The path uses a letter other than the stored one.
    Swapped,
    /// The path uses the stored letter.
    Kept,
}

impl PreviewMark {
    pub fn color(&self) -> Color {
        match self {
            PreviewMark::Swapped => Color::Red,
            PreviewMark::Kept => Color::Blue,
        }
    }
}

/// The topmost layer that decided a tile's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layer {
    Base,
    Multiplier(MultiplierOverlay),
    Preview(PreviewMark),
}

impl Layer {
    pub fn style(&self) -> TileStyle {
        match self {
            Layer::Base => TileStyle::PLAIN,
            Layer::Multiplier(overlay) => TileStyle::multiplier(overlay.color()),
            Layer::Preview(mark) => TileStyle::preview(mark.color()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileDisplay {
    pub text: Option<char>,
    pub layer: Layer,
}

impl TileDisplay {
    pub const BLANK: TileDisplay = TileDisplay {
        text: None,
        layer: Layer::Base,
    };

    pub fn style(&self) -> TileStyle {
        self.layer.style()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    tiles: [TileDisplay; TILE_COUNT],
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            tiles: [TileDisplay::BLANK; TILE_COUNT],
        }
    }
}

impl DisplayState {
    /// Resolves every tile from scratch. `previews` are ordered oldest first;
    /// a later preview covering the same tile is drawn on top.
    pub fn derive(
        tiles: &TileStore,
        multipliers: &MultiplierManager,
        previews: &[&[PathTile]],
    ) -> Self {
        let mut state = Self {
            tiles: std::array::from_fn(|i| TileDisplay {
                text: tiles.letter(Coord::from_index(i)),
                layer: Layer::Base,
            }),
        };

        for (coord, overlay) in multipliers.reapply() {
            state.tiles[coord.index()].layer = Layer::Multiplier(overlay);
        }

        for path in previews.iter() {
            for step in path.iter() {
                let tile = &mut state.tiles[step.coord.index()];
                if step.swap {
                    tile.text = Some(step.letter);
                    tile.layer = Layer::Preview(PreviewMark::Swapped);
                } else {
                    tile.layer = Layer::Preview(PreviewMark::Kept);
                }
            }
        }

        state
    }

    pub fn tile(&self, coord: Coord) -> &TileDisplay {
        &self.tiles[coord.index()]
    }

    /// Every tile, row-major.
    pub fn tiles(&self) -> &[TileDisplay] {
        &self.tiles
    }

    /// Coordinates whose display differs between `self` and `previous`.
    pub fn changed_since<'a>(&'a self, previous: &'a DisplayState) -> impl Iterator<Item = Coord> + 'a {
        Coord::all().filter(move |coord| self.tile(*coord) != previous.tile(*coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiplier::MultiplierKind;

    fn step(col: usize, row: usize, letter: char, swap: bool) -> PathTile {
        PathTile {
            coord: Coord::new(col, row),
            letter,
            swap,
        }
    }

    #[test]
    fn test_base_layer_shows_stored_letters() {
        let mut tiles = TileStore::new();
        tiles.set_letter(Coord::new(1, 0), 'k');

        let state = DisplayState::derive(&tiles, &MultiplierManager::new(), &[]);
        let tile = state.tile(Coord::new(1, 0));
        assert_eq!(tile.text, Some('k'));
        assert_eq!(tile.style(), TileStyle::PLAIN);
        assert_eq!(state.tile(Coord::new(0, 0)), &TileDisplay::BLANK);
    }

    #[test]
    fn test_multiplier_layer() {
        let tiles = TileStore::new();
        let mut multipliers = MultiplierManager::new();
        multipliers.set(MultiplierKind::WordMultiplier, Coord::new(0, 0));
        multipliers.set(MultiplierKind::DoubleLetter, Coord::new(1, 1));

        let state = DisplayState::derive(&tiles, &multipliers, &[]);
        assert_eq!(state.tile(Coord::new(0, 0)).style().outline, Color::DeepPink);
        assert_eq!(state.tile(Coord::new(1, 1)).style().outline, Color::Gold);
        assert_eq!(state.tile(Coord::new(1, 1)).style().background, Color::White);
    }

    #[test]
    fn test_preview_layer_over_multiplier() {
        let mut tiles = TileStore::new();
        tiles.set_letter(Coord::new(0, 0), 'a');
        tiles.set_letter(Coord::new(1, 0), 'b');
        let mut multipliers = MultiplierManager::new();
        multipliers.set(MultiplierKind::WordMultiplier, Coord::new(0, 0));

        let path = vec![step(0, 0, 'a', false), step(1, 0, 'x', true)];
        let state = DisplayState::derive(&tiles, &multipliers, &[path.as_slice()]);

        let kept = state.tile(Coord::new(0, 0));
        assert_eq!(kept.text, Some('a'));
        assert_eq!(kept.layer, Layer::Preview(PreviewMark::Kept));
        assert_eq!(kept.style(), TileStyle::preview(Color::Blue));

        let swapped = state.tile(Coord::new(1, 0));
        assert_eq!(swapped.text, Some('x'));
        assert_eq!(swapped.style().background, Color::Red);
        assert_eq!(swapped.style().weight, FontWeight::Bold);

        // Stored letters are untouched.
        assert_eq!(tiles.letter(Coord::new(1, 0)), Some('b'));
    }

    #[test]
    fn test_later_preview_is_on_top() {
        let tiles = TileStore::new();
        let first = vec![step(2, 2, 'q', true)];
        let second = vec![step(2, 2, 'r', false)];

        let state = DisplayState::derive(
            &tiles,
            &MultiplierManager::new(),
            &[first.as_slice(), second.as_slice()],
        );
        let tile = state.tile(Coord::new(2, 2));
        assert_eq!(tile.layer, Layer::Preview(PreviewMark::Kept));
        // The kept preview does not rewrite text, the older swap still shows.
        assert_eq!(tile.text, Some('q'));
    }

    #[test]
    fn test_changed_since() {
        let mut tiles = TileStore::new();
        let before = DisplayState::derive(&tiles, &MultiplierManager::new(), &[]);
        tiles.set_letter(Coord::new(4, 1), 'z');
        let after = DisplayState::derive(&tiles, &MultiplierManager::new(), &[]);

        let changed: Vec<Coord> = after.changed_since(&before).collect();
        assert_eq!(changed, vec![Coord::new(4, 1)]);
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::DeepPink.name(), "deep pink");
        assert_eq!(Color::Gold.name(), "gold");
    }
}
