//! Opponent vessels: length, orientation, occupied cells and health.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{Coord, GameError};
use crate::config::MAX_VESSEL_LENGTH;

/// Orientation of a vessel on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells share a row; `x` varies.
    Horizontal,
    /// Cells share a column; `y` varies.
    Vertical,
}

impl Orientation {
    /// Either orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Unit step along the orientation axis.
    pub(crate) fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A single vessel of the opponent's fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    orientation: Orientation,
    cells: Vec<Coord>,
    health: usize,
}

impl Vessel {
    /// Unplaced vessel with an explicit orientation.
    pub fn new(length: usize, orientation: Orientation) -> Result<Self, GameError> {
        if !(1..=MAX_VESSEL_LENGTH).contains(&length) {
            return Err(GameError::InvalidLength(length));
        }
        Ok(Vessel {
            length,
            orientation,
            cells: Vec::with_capacity(length),
            health: length,
        })
    }

    /// Unplaced vessel whose orientation is chosen at random.
    pub fn with_random_orientation<R: Rng + ?Sized>(
        length: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Self::new(length, Orientation::random(rng))
    }

    /// Vessel at an explicit position.
    pub fn with_position(
        length: usize,
        orientation: Orientation,
        cells: Vec<Coord>,
    ) -> Result<Self, GameError> {
        let mut vessel = Self::new(length, orientation)?;
        vessel.place(cells)?;
        Ok(vessel)
    }

    /// Assign the vessel's cells. The cells may be given in any order but must
    /// form one contiguous run of `length` along the orientation axis.
    pub fn place(&mut self, mut cells: Vec<Coord>) -> Result<(), GameError> {
        if self.is_placed() {
            return Err(GameError::VesselAlreadyPlaced);
        }
        if cells.len() != self.length {
            return Err(GameError::MalformedPosition);
        }
        let axis = |c: &Coord| match self.orientation {
            Orientation::Horizontal => (c.y(), c.x()),
            Orientation::Vertical => (c.x(), c.y()),
        };
        cells.sort_by_key(axis);
        let contiguous = cells.windows(2).all(|pair| {
            let (line_a, pos_a) = axis(&pair[0]);
            let (line_b, pos_b) = axis(&pair[1]);
            line_a == line_b && pos_a + 1 == pos_b
        });
        if !contiguous {
            return Err(GameError::MalformedPosition);
        }
        self.cells = cells;
        Ok(())
    }

    /// Apply a shot at `coord`. Returns `true` if the shot struck a remaining
    /// cell of this vessel; that cell is removed and health drops by one.
    pub fn take_damage(&mut self, coord: Coord) -> bool {
        match self.cells.iter().position(|&c| c == coord) {
            Some(idx) => {
                self.cells.remove(idx);
                self.health -= 1;
                debug_assert!(self.health <= self.length);
                true
            }
            None => false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Whether cells have been assigned. A destroyed vessel counts as placed.
    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty() || self.health < self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn health(&self) -> usize {
        self.health
    }

    /// Remaining (undamaged) cells, ordered along the orientation axis.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}
