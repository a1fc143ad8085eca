//! Shared value types and default constants.
//!
//! Everything here is plain data with no dependencies, so it can be used by
//! the engine, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The reference configuration is a 10 x 20 playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Both are only defaults; the engine accepts any validated size.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 1000 | Gravity cadence (one row per tick) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Direction, GameAction, PieceKind};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(PieceKind::T.color(), Color::Purple);
//! assert_eq!(Direction::Left.dx(), -1);
//! assert_ne!(GameAction::Rotate, GameAction::SoftDrop);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_HEIGHT: u16 = 20;

/// Default gravity interval in milliseconds (one row per second)
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Default points awarded per cleared row
pub const DEFAULT_SCORE_PER_LINE: u32 = 100;

/// The seven tetromino piece kinds
///
/// Each piece has a fixed shape and display color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Single-letter name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Display color carried by every cell this piece locks into the grid.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Occupant color of a filled grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Filled cell with its occupant color
pub type Cell = Option<Color>;

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta: -1 for left, +1 for right.
    pub fn dx(&self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Discrete player inputs understood by the engine.
///
/// Input adapters translate their own event types into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Apply one gravity step immediately
    SoftDrop,
    /// Start a fresh game
    Restart,
}
