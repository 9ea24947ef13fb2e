//! Common types: field coordinates, attack results and the crate error.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::FIELD_SIZE;

/// A cell on a `FIELD_SIZE`×`FIELD_SIZE` field.
///
/// A `Coord` can only be built through [`Coord::new`], so every value is on the
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    /// Checked constructor.
    pub fn new(x: usize, y: usize) -> Result<Self, GameError> {
        if x < FIELD_SIZE && y < FIELD_SIZE {
            Ok(Self { x, y })
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    /// Caller guarantees both components are below `FIELD_SIZE`.
    pub(crate) const fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Abscissa (column).
    pub fn x(&self) -> usize {
        self.x
    }

    /// Ordinate (row).
    pub fn y(&self) -> usize {
        self.y
    }

    /// Cell shifted by `(dx, dy)`, or `None` when that falls off the field.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Coord::new(x, y).ok()
    }

    /// The exclusion zone: the cell itself, then its right, left, lower and
    /// upper neighbours. Off-field neighbours are skipped.
    pub fn zone(self) -> impl Iterator<Item = Coord> {
        [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Every cell of the field in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..FIELD_SIZE).flat_map(|y| (0..FIELD_SIZE).map(move |x| Coord::at(x, y)))
    }
}

impl fmt::Display for Coord {
    /// Human notation: column letter then 1-based row, e.g. `C4` for `(2, 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.x as u8) as char, self.y + 1)
    }
}

/// Result of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    Hit,
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit)
    }
}

/// Errors returned by field, fleet and round operations.
///
/// These are configuration or sequencing mistakes by the caller. Ordinary
/// gameplay mistakes (building in an occupied zone, repeating a shot) are
/// reported as `bool` results instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate outside the field.
    OutOfBounds { x: usize, y: usize },
    /// Vessel length outside `1..=MAX_VESSEL_LENGTH`.
    InvalidLength(usize),
    /// Explicit vessel position is not a contiguous run of `length` cells.
    MalformedPosition,
    /// Vessel already has a position.
    VesselAlreadyPlaced,
    /// Fleet contains a vessel with no position.
    VesselNotPlaced,
    /// Placement gave up after exhausting its attempt guard.
    PlacementExhausted { length: usize, attempts: usize },
    /// Targeting strategy has no cells left to attack.
    NoTargetsLeft,
    /// Action not allowed in the current phase of the round.
    WrongPhase,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoardError(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GameError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the field", x, y)
            }
            GameError::InvalidLength(len) => write!(f, "Invalid vessel length {}", len),
            GameError::MalformedPosition => {
                write!(f, "Vessel position is not a contiguous run of its length")
            }
            GameError::VesselAlreadyPlaced => write!(f, "Vessel is already placed"),
            GameError::VesselNotPlaced => write!(f, "Fleet contains an unplaced vessel"),
            GameError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place vessel of length {} after {} attempts",
                length, attempts
            ),
            GameError::NoTargetsLeft => write!(f, "No targets left to attack"),
            GameError::WrongPhase => write!(f, "Action not allowed in the current phase"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
