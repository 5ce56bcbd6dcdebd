use spellboard::board::{BoardState, BoardView, HostEvent, MenuAction};
use spellboard::config::SolverConfig;
use spellboard::display::TileDisplay;
use spellboard::grid::Coord;
use spellboard::multiplier::MultiplierKind;
use spellboard::preview::SlotBinding;
use spellboard::solver::SpellSolver;

/// Prints every label update and counts repaints.
#[derive(Default)]
struct PrintingView {
    repaints: usize,
    bindings: Vec<Option<SlotBinding>>,
}

impl BoardView for PrintingView {
    fn paint_tile(&mut self, _coord: Coord, _display: &TileDisplay) {
        self.repaints += 1;
    }

    fn focus_tile(&mut self, _coord: Coord, _select_all: bool) {}

    fn set_result_label(&mut self, slot: usize, label: &str, binding: Option<SlotBinding>) {
        if self.bindings.len() <= slot {
            self.bindings.resize(slot + 1, None);
        }
        self.bindings[slot] = binding;
        if !label.is_empty() {
            println!("slot {}: {:?}", slot, label);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a test word list
    let words = vec![
        "cat", "cats", "coat", "coats", "act", "acts", "tap", "taps", "pat", "pats", "spat",
        "past", "step", "stem", "test", "tame", "team", "meat", "mate", "steam", "stream",
        "master", "tamer", "tamers", "arm", "arms", "ram", "rams", "mar", "mars", "tram",
        "trams", "smart", "star", "stare", "rate", "rates", "tear", "tears", "east", "seat",
        "eats", "sea", "ear", "era", "art", "arts", "rat", "rats", "tar", "tars",
    ];

    let mut solver = SpellSolver::with_words(words, SolverConfig::default());
    let mut board = BoardState::new();
    let mut view = PrintingView::default();
    board.paint_all(&mut view);

    // c o a t s
    // a s t e p
    // t r e a m
    // s m a r t
    // e a t e r
    let letters = "coatsasteptreamsmarteater";
    for (index, letter) in letters.chars().enumerate() {
        board.handle(
            HostEvent::TileContentChanged {
                index,
                content: letter.to_string(),
            },
            &mut solver,
            &mut view,
        )?;
    }
    println!("Board:\n{}", board.tiles());

    for (kind, coord) in [
        (MultiplierKind::WordMultiplier, Coord::new(2, 2)),
        (MultiplierKind::TripleLetter, Coord::new(0, 0)),
    ] {
        board.handle(
            HostEvent::ContextMenu {
                coord,
                action: MenuAction::Set(kind),
            },
            &mut solver,
            &mut view,
        )?;
    }

    for swap in [false, true] {
        println!();
        println!("Solving with swap = {}", swap);
        board.handle(HostEvent::SolveRequested { swap }, &mut solver, &mut view)?;
    }

    // Hover the best result on and off again.
    if let Some(binding) = view.bindings.first().copied().flatten() {
        let before = view.repaints;
        board.handle(HostEvent::ResultHoverEnter(binding), &mut solver, &mut view)?;
        if let Some(entry) = board.previews().entry(binding.slot) {
            println!();
            println!("Previewing {}", entry.summary);
        }
        board.handle(HostEvent::ResultHoverLeave(binding), &mut solver, &mut view)?;
        println!("Tiles repainted by the preview: {}", view.repaints - before);
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&board.snapshot())?);

    Ok(())
}
