//! Core types shared across the workspace.
//!
//! Pure data types with no external dependencies: board dimensions, the cell
//! representation, directions, and the command vocabulary consumed by the engine.

/// Board edge length (the board is `BOARD_SIZE x BOARD_SIZE`).
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A single board cell. `0` is empty; every other value is a power of two.
///
/// This is a native-width signed integer so the persisted layout matches the
/// in-memory one cell for cell.
pub type Cell = i32;

/// The empty cell value.
pub const EMPTY: Cell = 0;

/// Chance, in percent, that a spawned tile is [`SPAWN_HIGH_VALUE`].
pub const SPAWN_FOUR_PERCENT: u32 = 25;

/// Value of the common spawned tile.
pub const SPAWN_LOW_VALUE: Cell = 2;

/// Value of the rare spawned tile.
pub const SPAWN_HIGH_VALUE: Cell = 4;

/// Save file used when nothing else is configured.
pub const DEFAULT_SAVE_PATH: &str = "data.bin";

/// Key help, one entry per line.
pub const HELP_LINES: [&str; 9] = [
    "h: display help menu",
    "w: move upwards",
    "a: move leftwards",
    "s: move downwards",
    "d: move rightwards",
    "r: roll back once",
    "f: save data file",
    "g: load data file",
    "q: quit",
];

/// Direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the game-over scan and tests use.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from its name or its `w/a/s/d` letter (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A command accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Direction),
    /// Roll back to the board before the last changed move.
    Undo,
    Save,
    Load,
    Help,
    Quit,
}

impl Command {
    /// Map a console letter to a command (case-insensitive).
    ///
    /// Unknown letters return `None`; the input layer reports them as invalid.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Command::Move(Direction::Up)),
            'a' => Some(Command::Move(Direction::Left)),
            's' => Some(Command::Move(Direction::Down)),
            'd' => Some(Command::Move(Direction::Right)),
            'r' => Some(Command::Undo),
            'f' => Some(Command::Save),
            'g' => Some(Command::Load),
            'h' => Some(Command::Help),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(dir) => dir.as_str(),
            Command::Undo => "undo",
            Command::Save => "save",
            Command::Load => "load",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

/// The player's answer once the board is stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    /// Roll back to the board before the losing move.
    Return,
    /// Clear the board and start over.
    Restart,
    /// Decline the restart and end the session.
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("a"), Some(Direction::Left));
        assert_eq!(Direction::from_str("D"), Some(Direction::Right));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn test_direction_roundtrip_names() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_command_from_char() {
        assert_eq!(Command::from_char('w'), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::from_char('S'), Some(Command::Move(Direction::Down)));
        assert_eq!(Command::from_char('r'), Some(Command::Undo));
        assert_eq!(Command::from_char('f'), Some(Command::Save));
        assert_eq!(Command::from_char('g'), Some(Command::Load));
        assert_eq!(Command::from_char('h'), Some(Command::Help));
        assert_eq!(Command::from_char('Q'), Some(Command::Quit));
        assert_eq!(Command::from_char('x'), None);
        assert_eq!(Command::from_char('1'), None);
    }

    #[test]
    fn test_help_lists_every_command_letter() {
        for letter in ['h', 'w', 'a', 's', 'd', 'r', 'f', 'g', 'q'] {
            assert!(
                HELP_LINES.iter().any(|l| l.starts_with(letter)),
                "missing help for {}",
                letter
            );
            assert!(Command::from_char(letter).is_some());
        }
    }
}
