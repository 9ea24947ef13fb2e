//! Randomized fleet placement under the exclusion-zone constraint.
//!
//! A single candidate set is shared across the whole fleet. Each placed vessel
//! removes its exclusion zone (every occupied cell plus its four neighbours)
//! from that set, so later vessels never touch earlier ones. When the set runs
//! dry it is refilled with the whole field; that refill forgets the zones of
//! vessels already placed and can therefore produce touching vessels. The
//! reset count is exposed so callers can detect it.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::{Coord, GameError};
use crate::config::{FLEET_LENGTHS, PLACEMENT_ATTEMPTS};
use crate::vessel::{Orientation, Vessel};

/// Places vessels one by one, consuming a shared candidate set.
#[derive(Debug, Clone)]
pub struct PlacementGenerator {
    candidates: CellSet,
    resets: usize,
    max_attempts: usize,
}

impl PlacementGenerator {
    /// Generator whose candidate set is the full field.
    pub fn new() -> Self {
        Self::with_max_attempts(PLACEMENT_ATTEMPTS)
    }

    /// Generator with a custom attempt guard (at least one attempt).
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            candidates: CellSet::full(),
            resets: 0,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Cells still available to future vessels.
    pub fn candidates(&self) -> CellSet {
        self.candidates
    }

    /// How many times the candidate set was refilled with the full field.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Give `vessel` a position and remove its exclusion zone from the
    /// candidate set.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        vessel: &mut Vessel,
    ) -> Result<(), GameError> {
        if vessel.is_placed() {
            return Err(GameError::VesselAlreadyPlaced);
        }
        for attempt in 0..self.max_attempts {
            if self.candidates.is_empty() {
                warn!(
                    "placement candidates exhausted, refilling the field (attempt {})",
                    attempt + 1
                );
                self.candidates = CellSet::full();
                self.resets += 1;
            }
            match find_run(&self.candidates, rng, vessel.length(), vessel.orientation()) {
                Some(cells) => {
                    for cell in cells.iter() {
                        for blocked in cell.zone() {
                            self.candidates.remove(blocked);
                        }
                    }
                    debug!(
                        "placed vessel of length {} {:?} at {:?}",
                        vessel.length(),
                        vessel.orientation(),
                        cells
                    );
                    return vessel.place(cells);
                }
                // Nothing fits: force a refill on the next attempt.
                None => self.candidates.clear_all(),
            }
        }
        Err(GameError::PlacementExhausted {
            length: vessel.length(),
            attempts: self.max_attempts,
        })
    }

    /// Place every vessel of `fleet` in order.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &mut [Vessel],
    ) -> Result<(), GameError> {
        for vessel in fleet.iter_mut() {
            self.place(rng, vessel)?;
        }
        Ok(())
    }
}

impl Default for PlacementGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the standard fleet with random orientations and place it on an empty
/// field.
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Vessel>, GameError> {
    let mut fleet = FLEET_LENGTHS
        .iter()
        .map(|&len| Vessel::with_random_orientation(len, rng))
        .collect::<Result<Vec<_>, _>>()?;
    PlacementGenerator::new().place_fleet(rng, &mut fleet)?;
    Ok(fleet)
}

/// Pick random seeds from a working copy of `candidates` until one yields a
/// run of `length` candidate cells, first forwards then backwards along
/// `orientation`. Seeds that fit neither way are dropped from the copy.
fn find_run<R: Rng + ?Sized>(
    candidates: &CellSet,
    rng: &mut R,
    length: usize,
    orientation: Orientation,
) -> Option<Vec<Coord>> {
    let mut sieve = *candidates;
    while !sieve.is_empty() {
        let seed = sieve.nth_cell(rng.random_range(0..sieve.len()))?;
        let run = lay_run(candidates, seed, length, orientation, 1)
            .or_else(|| lay_run(candidates, seed, length, orientation, -1));
        if run.is_some() {
            return run;
        }
        sieve.remove(seed);
    }
    None
}

/// `length` consecutive cells from `seed` in direction `sign`, all of which
/// must be candidates. Returned in ascending order.
fn lay_run(
    candidates: &CellSet,
    seed: Coord,
    length: usize,
    orientation: Orientation,
    sign: isize,
) -> Option<Vec<Coord>> {
    let (dx, dy) = orientation.step();
    let mut run = Vec::with_capacity(length);
    for i in 0..length as isize {
        let cell = seed.offset(dx * i * sign, dy * i * sign)?;
        if !candidates.contains(cell) {
            return None;
        }
        run.push(cell);
    }
    if sign < 0 {
        run.reverse();
    }
    Some(run)
}
