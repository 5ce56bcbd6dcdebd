use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use dotenvy::dotenv;
use tracing::info;

use spellboard::board::{BoardState, BoardView, HostEvent, MenuAction};
use spellboard::config::SolverConfig;
use spellboard::display::{Layer, MultiplierOverlay, PreviewMark, TileDisplay};
use spellboard::grid::{Coord, GRID_SIZE, TILE_COUNT};
use spellboard::multiplier::MultiplierKind;
use spellboard::preview::{SlotBinding, RESULT_SLOTS};
use spellboard::solver::{BoardGenerator, SpellSolver};

const HELP: &str = "\
commands:
  type <index> <text>        set the content of tile 0-24
  clear <index>              empty a tile
  fill <letters>             type up to 25 letters from tile 0
  random [seed]              fill the board with random letters
  mult word|dl|tl <col> <row>
  remove                     remove every multiplier
  solve [swap]               run the solver
  enter <slot> / leave <slot> hover a result on and off
  show | dump | help | quit";

/// Prints the board the way the widget toolkit would paint it.
struct TerminalView {
    tiles: [TileDisplay; TILE_COUNT],
    labels: Vec<(String, Option<SlotBinding>)>,
    focused: Option<Coord>,
}

impl TerminalView {
    fn new() -> Self {
        Self {
            tiles: [TileDisplay::BLANK; TILE_COUNT],
            labels: vec![(String::new(), None); RESULT_SLOTS],
            focused: None,
        }
    }

    fn binding(&self, slot: usize) -> Result<SlotBinding> {
        self.labels
            .get(slot)
            .and_then(|(_, binding)| *binding)
            .ok_or_else(|| anyhow!("result slot {} is empty", slot))
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let coord = Coord::new(col, row);
                out.push_str(&render_tile(&self.tiles[coord.index()]));
                out.push(if self.focused == Some(coord) { '<' } else { ' ' });
            }
            out.push('\n');
        }
        for (slot, (label, _)) in self.labels.iter().enumerate() {
            if !label.is_empty() {
                out.push_str(&format!("  #{} {}\n", slot, label));
            }
        }
        out
    }
}

fn render_tile(tile: &TileDisplay) -> String {
    let letter = tile
        .text
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| " ".to_string());
    let (open, close) = match tile.layer {
        Layer::Base => ('[', ']'),
        Layer::Multiplier(MultiplierOverlay::Word) => ('{', '}'),
        Layer::Multiplier(MultiplierOverlay::Letter) => ('<', '>'),
        Layer::Preview(PreviewMark::Swapped) => ('*', '*'),
        Layer::Preview(PreviewMark::Kept) => ('(', ')'),
    };
    format!("{}{}{}", open, letter, close)
}

fn legend() -> String {
    [
        Layer::Base,
        Layer::Multiplier(MultiplierOverlay::Word),
        Layer::Multiplier(MultiplierOverlay::Letter),
        Layer::Preview(PreviewMark::Swapped),
        Layer::Preview(PreviewMark::Kept),
    ]
    .into_iter()
    .map(|layer| {
        let style = layer.style();
        let sample = render_tile(&TileDisplay {
            text: Some('a'),
            layer,
        });
        format!(
            "{} {} outline on {}",
            sample,
            style.outline.name(),
            style.background.name()
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

impl BoardView for TerminalView {
    fn paint_tile(&mut self, coord: Coord, display: &TileDisplay) {
        self.tiles[coord.index()] = *display;
    }

    fn focus_tile(&mut self, coord: Coord, _select_all: bool) {
        self.focused = Some(coord);
    }

    fn set_result_label(&mut self, slot: usize, label: &str, binding: Option<SlotBinding>) {
        if let Some(entry) = self.labels.get_mut(slot) {
            *entry = (label.to_string(), binding);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Type { index: usize, content: String },
    Fill(String),
    Random(Option<String>),
    Mult { kind: MultiplierKind, coord: Coord },
    Remove,
    Solve { swap: bool },
    Enter(usize),
    Leave(usize),
    Show,
    Dump,
    Help,
    Quit,
    Nothing,
}

fn parse_number(word: Option<&str>, what: &str) -> Result<usize> {
    let word = word.ok_or_else(|| anyhow!("missing {}", what))?;
    word.parse::<usize>()
        .with_context(|| format!("{} must be a number, got {:?}", what, word))
}

fn parse_index(word: Option<&str>) -> Result<usize> {
    let index = parse_number(word, "tile index")?;
    if index >= TILE_COUNT {
        bail!("tile index must be below {}", TILE_COUNT);
    }
    Ok(index)
}

fn parse_coord(col: Option<&str>, row: Option<&str>) -> Result<Coord> {
    let col = parse_number(col, "column")?;
    let row = parse_number(row, "row")?;
    if col >= GRID_SIZE || row >= GRID_SIZE {
        bail!("coordinates must be below {}", GRID_SIZE);
    }
    Ok(Coord::new(col, row))
}

impl Command {
    fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Nothing);
        };

        let command = match name {
            "type" => Command::Type {
                index: parse_index(words.next())?,
                content: words.next().unwrap_or_default().to_string(),
            },
            "clear" => Command::Type {
                index: parse_index(words.next())?,
                content: String::new(),
            },
            "fill" => Command::Fill(words.next().unwrap_or_default().to_string()),
            "random" => Command::Random(words.next().map(str::to_string)),
            "mult" => {
                let kind = match words.next() {
                    Some("word") => MultiplierKind::WordMultiplier,
                    Some("dl") => MultiplierKind::DoubleLetter,
                    Some("tl") => MultiplierKind::TripleLetter,
                    other => bail!("unknown multiplier {:?}, expected word, dl or tl", other),
                };
                Command::Mult {
                    kind,
                    coord: parse_coord(words.next(), words.next())?,
                }
            }
            "remove" => Command::Remove,
            "solve" => Command::Solve {
                swap: words.next() == Some("swap"),
            },
            "enter" => Command::Enter(parse_number(words.next(), "slot")?),
            "leave" => Command::Leave(parse_number(words.next(), "slot")?),
            "show" => Command::Show,
            "dump" => Command::Dump,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {:?}, try help", other),
        };
        Ok(command)
    }
}

struct Shell {
    board: BoardState,
    view: TerminalView,
    solver: SpellSolver,
    generator: BoardGenerator,
}

impl Shell {
    fn dispatch(&mut self, event: HostEvent) -> Result<()> {
        self.board.handle(event, &mut self.solver, &mut self.view)?;
        Ok(())
    }

    fn type_letters(&mut self, letters: &str) -> Result<()> {
        for (index, letter) in letters.chars().take(TILE_COUNT).enumerate() {
            self.dispatch(HostEvent::TileContentChanged {
                index,
                content: letter.to_string(),
            })?;
        }
        Ok(())
    }

    fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Type { index, content } => {
                self.dispatch(HostEvent::TileContentChanged { index, content })?
            }
            Command::Fill(letters) => self.type_letters(&letters)?,
            Command::Random(seed) => {
                let letters = match seed {
                    Some(seed) => self.generator.generate_seeded(&seed),
                    None => self.generator.generate(&mut rand::thread_rng()),
                };
                self.type_letters(&letters)?;
            }
            Command::Mult { kind, coord } => self.dispatch(HostEvent::ContextMenu {
                coord,
                action: MenuAction::Set(kind),
            })?,
            Command::Remove => self.dispatch(HostEvent::ContextMenu {
                coord: Coord::new(0, 0),
                action: MenuAction::RemoveBonus,
            })?,
            Command::Solve { swap } => self
                .dispatch(HostEvent::SolveRequested { swap })
                .context("solve failed, previous results kept")?,
            Command::Enter(slot) => {
                let binding = self.view.binding(slot)?;
                self.dispatch(HostEvent::ResultHoverEnter(binding))?;
            }
            Command::Leave(slot) => {
                let binding = self.view.binding(slot)?;
                self.dispatch(HostEvent::ResultHoverLeave(binding))?;
            }
            Command::Dump => {
                println!("{}", serde_json::to_string_pretty(&self.board.snapshot())?);
            }
            Command::Help => println!("{}", HELP),
            Command::Show => println!("{}", legend()),
            Command::Quit | Command::Nothing => {}
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting spellboard");

    let config = SolverConfig::from_env();
    let wordlist = config.wordlist.clone();
    let solver = SpellSolver::from_config(config).with_context(|| {
        format!(
            "could not load word list {} (set SPELLBOARD_WORDLIST)",
            wordlist.display()
        )
    })?;

    let mut shell = Shell {
        board: BoardState::new(),
        view: TerminalView::new(),
        solver,
        generator: BoardGenerator::new(),
    };
    shell.board.paint_all(&mut shell.view);

    println!("{}", HELP);
    print!("{}> ", shell.view.render());
    io::stdout().flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(e) = shell.run(command) {
                    eprintln!("error: {:#}", e);
                }
            }
            Err(e) => eprintln!("error: {:#}", e),
        }
        print!("{}> ", shell.view.render());
        io::stdout().flush()?;
    }

    info!("Spellboard finished");
    Ok(())
}
