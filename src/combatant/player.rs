use log::debug;

use crate::bitboard::CellSet;
use crate::common::{AttackResult, Coord};
use crate::config::MAX_FACTORIES;

use super::{Combatant, Opponent};
use crate::targeting::TargetingStrategy;

/// The human side: factories on the home field plus shot statistics.
#[derive(Debug, Clone, Default)]
pub struct Player {
    factories: CellSet,
    sunken_ships: usize,
    mishits: usize,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a factory at `at`. Fails without side effects when the
    /// construction zone (the cell and its four neighbours) already holds a
    /// factory, or when all factories are built.
    pub fn build_factory(&mut self, at: Coord) -> bool {
        if self.factories.len() >= MAX_FACTORIES {
            return false;
        }
        if at.zone().any(|c| self.factories.contains(c)) {
            return false;
        }
        self.factories.insert(at);
        debug!("factory built at {}", at);
        true
    }

    /// Remove the factory at exactly `at`. Returns whether one was there.
    pub fn destroy_factory(&mut self, at: Coord) -> bool {
        let removed = self.factories.remove(at);
        if removed {
            debug!("factory removed at {}", at);
        }
        removed
    }

    /// Shoot at `at` on the opponent's field. Vessels are scanned in fleet
    /// order and the first one occupying the cell takes the damage. Shooting
    /// an already struck cell is a plain miss.
    pub fn attack_enemy<S: TargetingStrategy>(
        &mut self,
        opponent: &mut Opponent<S>,
        at: Coord,
    ) -> AttackResult {
        for vessel in opponent.fleet_mut() {
            if vessel.take_damage(at) {
                if vessel.is_destroyed() {
                    self.sunken_ships += 1;
                    debug!(
                        "vessel of length {} sunk at {}, {} sunk so far",
                        vessel.length(),
                        at,
                        self.sunken_ships
                    );
                }
                return AttackResult::Hit;
            }
        }
        self.mishits += 1;
        AttackResult::Miss
    }

    /// Resolve an enemy shot at `at`: a factory there is destroyed.
    pub(crate) fn take_hit(&mut self, at: Coord) -> bool {
        self.factories.remove(at)
    }

    pub fn has_factory(&self, at: Coord) -> bool {
        self.factories.contains(at)
    }

    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    pub fn factories(&self) -> CellSet {
        self.factories
    }

    pub fn sunken_ships(&self) -> usize {
        self.sunken_ships
    }
}

impl Combatant for Player {
    fn mishits(&self) -> usize {
        self.mishits
    }

    fn kills(&self) -> usize {
        self.sunken_ships
    }
}
