//! Opponent targeting: uniform random choice over a shrinking target pool.

use log::trace;
use rand::Rng;

use crate::board::TargetPool;
use crate::common::{AttackResult, Coord};

/// Interface implemented by opponent targeting strategies.
pub trait TargetingStrategy {
    /// Choose the next cell to attack, or `None` if nothing is left.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord>;

    /// Inform the strategy of the result of its last attack.
    fn handle_result(&mut self, _coord: Coord, _result: AttackResult) {}

    /// Number of cells the strategy may still choose from.
    fn remaining(&self) -> usize;
}

/// Picks uniformly from the cells not yet resolved. A destroyed factory also
/// prunes its neighbours: the player cannot have built another factory there.
#[derive(Debug, Clone, Default)]
pub struct PoolTargeting {
    pool: TargetPool,
}

impl PoolTargeting {
    pub fn new() -> Self {
        Self {
            pool: TargetPool::new(),
        }
    }

    pub fn pool(&self) -> &TargetPool {
        &self.pool
    }
}

impl TargetingStrategy for PoolTargeting {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        self.pool.pick(rng)
    }

    fn handle_result(&mut self, coord: Coord, result: AttackResult) {
        let removed = match result {
            AttackResult::Hit => self.pool.remove_zone(coord),
            AttackResult::Miss => usize::from(self.pool.remove(coord)),
        };
        trace!(
            "pool dropped {} cell(s) after {:?} at {}, {} left",
            removed,
            result,
            coord,
            self.pool.len()
        );
    }

    fn remaining(&self) -> usize {
        self.pool.len()
    }
}
