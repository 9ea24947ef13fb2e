#![cfg(feature = "std")]

//! Line-oriented console front end: parses commands, draws both fields and
//! runs rounds until the user quits.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::string::{String, ToString};

use rand::Rng;

use crate::board::{CellStatus, HomeCell};
use crate::common::{AttackResult, Coord, GameError};
use crate::config::{FIELD_SIZE, MAX_FACTORIES};
use crate::game::{Action, Outcome, Phase, Round, RoundSummary};
use crate::ui::GameUi;

/// Cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A parsed console command. Coordinates default to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Build(Option<Coord>),
    Destroy(Option<Coord>),
    Attack(Option<Coord>),
    Where,
    Menu,
    Help,
    Quit,
}

/// Entries of the in-game menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Continue,
    Help,
    About,
    NewGame,
    Quit,
}

/// Parse `A5`-style notation: column letter `A`-`J`, row number `1`-`10`.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= FIELD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > FIELD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Coord::new(x, row - 1).map_err(|e| e.to_string())
}

/// Parse one input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let word = parts
        .next()
        .ok_or("Empty input - type 'help' for commands")?
        .to_ascii_lowercase();
    let coord = parts.next().map(parse_coord).transpose()?;
    if parts.next().is_some() {
        return Err("Too many arguments".to_string());
    }
    let command = match word.as_str() {
        "up" | "k" => Command::Move(Direction::Up),
        "down" | "j" => Command::Move(Direction::Down),
        "left" | "h" => Command::Move(Direction::Left),
        "right" | "l" => Command::Move(Direction::Right),
        "build" | "b" => Command::Build(coord),
        "destroy" | "d" => Command::Destroy(coord),
        "attack" | "a" => Command::Attack(coord),
        "where" | "w" => Command::Where,
        "menu" | "m" => Command::Menu,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{}' - type 'help'", other)),
    };
    let takes_coord = matches!(
        command,
        Command::Build(_) | Command::Destroy(_) | Command::Attack(_)
    );
    if coord.is_some() && !takes_coord {
        return Err(format!("'{}' takes no coordinate", word));
    }
    Ok(command)
}

/// Parse a menu selection by name or first letter.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "continue" | "c" | "" => Some(MenuChoice::Continue),
        "help" | "h" => Some(MenuChoice::Help),
        "about" | "a" => Some(MenuChoice::About),
        "new" | "n" => Some(MenuChoice::NewGame),
        "quit" | "q" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// [`GameUi`] that turns notifications into the message shown under the
/// fields.
#[derive(Debug, Default)]
pub struct TerminalUi {
    message: String,
}

impl TerminalUi {
    pub fn message(&self) -> &str {
        &self.message
    }

    fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl GameUi for TerminalUi {
    fn factory_built(&mut self, at: Coord, success: bool) {
        if success {
            self.set(format!("✓ Factory built at {}!", at));
        } else {
            self.set(format!("✗ Cannot build at {}: the zone is taken or all factories stand.", at));
        }
    }

    fn factory_destroyed(&mut self, at: Coord, success: bool) {
        if success {
            self.set(format!("✓ Factory at {} demolished.", at));
        } else {
            self.set(format!("✗ There is no factory to demolish at {}.", at));
        }
    }

    fn battle_started(&mut self) {
        self.message
            .push_str("\nAll factories stand - the battle begins! Attack the right field.");
    }

    fn player_attacked(&mut self, at: Coord, result: AttackResult, repeated: bool) {
        self.set(match (result, repeated) {
            (AttackResult::Hit, _) => format!("🎯 You hit a ship at {}!", at),
            (AttackResult::Miss, false) => format!("💧 You missed at {}.", at),
            (AttackResult::Miss, true) => format!("You shot {} again... why?", at),
        });
    }

    fn opponent_attacked(&mut self, at: Coord, result: AttackResult) {
        let line = match result {
            AttackResult::Hit => format!("\n💥 Enemy destroyed your factory at {}!", at),
            AttackResult::Miss => format!("\nEnemy missed you at {}.", at),
        };
        self.message.push_str(&line);
    }

    fn round_ended(&mut self, summary: &RoundSummary) {
        let verdict = match summary.outcome {
            Some(Outcome::Victory) => "Victory!",
            _ => "Loss!",
        };
        self.set(format!(
            "{}\nTotally:\n* {} mishits by player\n* {} mishits by enemy\n* {} sunken ships\n* {} destroyed factories",
            verdict,
            summary.player_mishits,
            summary.opponent_mishits,
            summary.sunken_ships,
            summary.destroyed_factories
        ));
    }
}

fn home_symbol(cell: HomeCell) -> char {
    match cell {
        HomeCell::Sea => '~',
        HomeCell::Factory => '●',
        HomeCell::Destroyed => '✶',
        HomeCell::OpenedByEnemy => 'x',
    }
}

fn enemy_symbol(cell: CellStatus) -> char {
    match cell {
        CellStatus::Unknown => '#',
        CellStatus::Hit => '✶',
        CellStatus::Miss => '~',
    }
}

/// Draw both fields side by side, the cursor as `+` on the active one, then
/// the counters and the last message.
pub fn render_screen(round: &Round, cursor: Coord, message: &str) -> String {
    let (home_cursor, enemy_cursor) = match round.phase() {
        Phase::Construction => (Some(cursor), None),
        Phase::Battle => (None, Some(cursor)),
        Phase::Resolved(_) => (None, None),
    };
    let mut out = String::new();
    let header: String = (0..FIELD_SIZE)
        .map(|x| format!(" {}", (b'A' + x as u8) as char))
        .collect();
    let _ = writeln!(out, "   {} ║{}", header, header);
    for y in 0..FIELD_SIZE {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..FIELD_SIZE {
            let at = Coord::at(x, y);
            let ch = if home_cursor == Some(at) {
                '+'
            } else {
                home_symbol(round.home_cell(at))
            };
            let _ = write!(out, " {}", ch);
        }
        let _ = write!(out, " ║");
        for x in 0..FIELD_SIZE {
            let at = Coord::at(x, y);
            let ch = if enemy_cursor == Some(at) {
                '+'
            } else {
                enemy_symbol(round.enemy_view().status(at))
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    let summary = round.summary();
    let _ = writeln!(out, "═══════════════════════╩═════════════════════");
    let _ = writeln!(
        out,
        "Factories built: {}/{}   (type 'menu' for the menu, 'help' for commands)",
        round.player().factory_count(),
        MAX_FACTORIES
    );
    let _ = writeln!(out, "Ships, sunken by you: {}", summary.sunken_ships);
    let _ = writeln!(out, "Factories, destroyed by enemy: {}", summary.destroyed_factories);
    let _ = writeln!(out, "═════════════════════════════════════════════");
    let _ = writeln!(out, "{}", message);
    out
}

const HELP: &str = "\
Commands:
  up | down | left | right   move the cursor (also k, j, h, l)
  build [COORD]              build a factory (construction)
  destroy [COORD]            demolish a factory (construction)
  attack [COORD]             shoot at the enemy field (battle)
  where                      show the cursor position
  menu                       open the menu
  quit                       leave the game
COORD is a column letter and a row number, e.g. C4. Without it the cursor
position is used. Factories need one free cell to every side.";

const ABOUT: &str = "\
Build four factories on your field, then sink all seven enemy ships
(lengths 5, 4, 3, 2, 2, 1, 1) before the enemy finds every factory.";

enum Flow {
    NewRound,
    Quit,
}

/// An interactive session reading commands from `input` and drawing to
/// `output`. Each round starts from completely fresh state.
pub struct Session<I: BufRead, O: Write> {
    input: I,
    output: O,
    ui: TerminalUi,
    cursor: Coord,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            ui: TerminalUi::default(),
            cursor: Coord::at(0, 0),
        }
    }

    /// Play rounds until the user quits or input ends.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> anyhow::Result<()> {
        loop {
            let mut round = Round::new(rng)?;
            match self.play_round(&mut round, rng)? {
                Flow::NewRound => continue,
                Flow::Quit => return Ok(()),
            }
        }
    }

    /// Consume the session, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    fn play_round<R: Rng + ?Sized>(&mut self, round: &mut Round, rng: &mut R) -> anyhow::Result<Flow> {
        self.cursor = Coord::at(0, 0);
        self.ui.set(format!(
            "Build {} factories on the left field, one free cell apart.",
            MAX_FACTORIES
        ));
        loop {
            self.draw(round)?;
            if round.is_over() {
                return self.ask_retry();
            }
            let Some(line) = self.read_line("> ")? else {
                return Ok(Flow::Quit);
            };
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    self.ui.set(format!("✗ {}", e));
                    continue;
                }
            };
            match command {
                Command::Move(dir) => self.move_cursor(dir),
                Command::Where => self.ui.set(format!("Cursor at {}", self.cursor)),
                Command::Build(at) => {
                    self.act(round, Action::Build(at.unwrap_or(self.cursor)), rng)?
                }
                Command::Destroy(at) => {
                    self.act(round, Action::Destroy(at.unwrap_or(self.cursor)), rng)?
                }
                Command::Attack(at) => {
                    self.act(round, Action::Attack(at.unwrap_or(self.cursor)), rng)?
                }
                Command::Help => self.ui.set(HELP),
                Command::Menu => {
                    if let Some(flow) = self.menu()? {
                        return Ok(flow);
                    }
                }
                Command::Quit => return Ok(Flow::Quit),
            }
        }
    }

    fn act<R: Rng + ?Sized>(&mut self, round: &mut Round, action: Action, rng: &mut R) -> anyhow::Result<()> {
        let before = round.phase();
        match round.apply(action, rng, &mut self.ui) {
            Ok(_) => {
                if before == Phase::Construction && round.phase() == Phase::Battle {
                    self.cursor = Coord::at(0, 0);
                }
                Ok(())
            }
            Err(GameError::WrongPhase) => {
                self.ui.set(match round.phase() {
                    Phase::Construction => "✗ Build all factories before attacking.",
                    _ => "✗ Factories can only be changed during construction.",
                });
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn move_cursor(&mut self, dir: Direction) {
        let (dx, dy) = match dir {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        self.cursor = self.cursor.offset(dx, dy).unwrap_or(self.cursor);
        self.ui.set("");
    }

    /// Run the menu. `None` means resume the round.
    fn menu(&mut self) -> anyhow::Result<Option<Flow>> {
        loop {
            writeln!(
                self.output,
                "\nMenu: [c]ontinue  [h]elp  [a]bout  [n]ew game  [q]uit"
            )?;
            let Some(line) = self.read_line("menu> ")? else {
                return Ok(Some(Flow::Quit));
            };
            match parse_menu_choice(&line) {
                Some(MenuChoice::Continue) => return Ok(None),
                Some(MenuChoice::Help) => writeln!(self.output, "{}", HELP)?,
                Some(MenuChoice::About) => writeln!(self.output, "{}", ABOUT)?,
                Some(MenuChoice::NewGame) => return Ok(Some(Flow::NewRound)),
                Some(MenuChoice::Quit) => return Ok(Some(Flow::Quit)),
                None => writeln!(self.output, "✗ Unknown menu entry '{}'", line.trim())?,
            }
        }
    }

    fn ask_retry(&mut self) -> anyhow::Result<Flow> {
        loop {
            let Some(line) = self.read_line("(press r to retry, q to quit) ")? else {
                return Ok(Flow::Quit);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "r" | "retry" => return Ok(Flow::NewRound),
                "q" | "quit" => return Ok(Flow::Quit),
                _ => {}
            }
        }
    }

    fn draw(&mut self, round: &Round) -> anyhow::Result<()> {
        let screen = render_screen(round, self.cursor, self.ui.message());
        writeln!(self.output, "\n{}", screen)?;
        Ok(())
    }

    /// Prompt and read one line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
