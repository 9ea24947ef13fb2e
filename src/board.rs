//! Per-side field state: the opponent's pool of untried targets and the
//! player's record of resolved shots against the enemy field.

use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::{AttackResult, Coord};
use crate::config::FIELD_SIZE;

/// Cells an attacker has not yet resolved against a defending field. Starts as
/// the whole field and only ever shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPool {
    cells: CellSet,
}

impl TargetPool {
    /// Pool holding every cell of the field.
    pub fn new() -> Self {
        Self {
            cells: CellSet::full(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(coord)
    }

    /// Snapshot of the remaining cells.
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    /// A uniformly random remaining cell, or `None` if the pool is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        self.cells.nth_cell(rng.random_range(0..self.cells.len()))
    }

    /// Drop a single resolved cell. Returns whether it was still present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.cells.remove(coord)
    }

    /// Drop the exclusion zone around `coord`. Returns how many cells were
    /// actually removed.
    pub fn remove_zone(&mut self, coord: Coord) -> usize {
        coord.zone().filter(|&c| self.cells.remove(c)).count()
    }
}

impl Default for TargetPool {
    fn default() -> Self {
        Self::new()
    }
}

/// What the player knows about one cell of the enemy field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Unknown,
    Hit,
    Miss,
}

/// The player's view of the enemy field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGrid {
    cells: [[CellStatus; FIELD_SIZE]; FIELD_SIZE],
}

impl TargetGrid {
    /// Grid with every cell unknown.
    pub fn new() -> Self {
        Self {
            cells: [[CellStatus::Unknown; FIELD_SIZE]; FIELD_SIZE],
        }
    }

    pub fn status(&self, coord: Coord) -> CellStatus {
        self.cells[coord.y()][coord.x()]
    }

    /// Record the outcome of a shot. Only unknown cells change; returns `false`
    /// when the cell had already been resolved.
    pub fn resolve(&mut self, coord: Coord, result: AttackResult) -> bool {
        let cell = &mut self.cells[coord.y()][coord.x()];
        if *cell != CellStatus::Unknown {
            return false;
        }
        *cell = match result {
            AttackResult::Hit => CellStatus::Hit,
            AttackResult::Miss => CellStatus::Miss,
        };
        true
    }

    /// Cells not yet shot at, row-major.
    pub fn unknown_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&c| self.status(c) == CellStatus::Unknown)
    }

    pub fn unknown_count(&self) -> usize {
        self.unknown_cells().count()
    }
}

impl Default for TargetGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// One cell of the player's own field as a front end would draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCell {
    Sea,
    Factory,
    Destroyed,
    OpenedByEnemy,
}
