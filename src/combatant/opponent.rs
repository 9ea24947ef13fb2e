use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::common::{AttackResult, Coord, GameError};
use crate::placement::generate_fleet;
use crate::targeting::{PoolTargeting, TargetingStrategy};
use crate::vessel::Vessel;

use super::{Combatant, Player};

/// The computer side: a hidden fleet and a strategy for attacking factories.
#[derive(Debug, Clone)]
pub struct Opponent<S: TargetingStrategy = PoolTargeting> {
    fleet: Vec<Vessel>,
    strategy: S,
    destroyed_factories: usize,
    mishits: usize,
}

impl Opponent {
    /// Opponent with a freshly placed standard fleet and a full target pool.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let fleet = generate_fleet(rng)?;
        Self::with_fleet(fleet)
    }

    /// Opponent with pre-positioned vessels and a full target pool.
    pub fn with_fleet(fleet: Vec<Vessel>) -> Result<Self, GameError> {
        Self::with_strategy(fleet, PoolTargeting::new())
    }
}

impl<S: TargetingStrategy> Opponent<S> {
    /// Opponent with pre-positioned vessels and a custom targeting strategy.
    pub fn with_strategy(fleet: Vec<Vessel>, strategy: S) -> Result<Self, GameError> {
        if fleet.iter().any(|v| !v.is_placed()) {
            return Err(GameError::VesselNotPlaced);
        }
        Ok(Self {
            fleet,
            strategy,
            destroyed_factories: 0,
            mishits: 0,
        })
    }

    /// Attack the player's field with the next target from the strategy.
    /// Returns the result together with the cell that was attacked.
    pub fn attack_player<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        player: &mut Player,
    ) -> Result<(AttackResult, Coord), GameError> {
        let target = self
            .strategy
            .select_target(rng)
            .ok_or(GameError::NoTargetsLeft)?;
        let result = if player.take_hit(target) {
            self.destroyed_factories += 1;
            AttackResult::Hit
        } else {
            self.mishits += 1;
            AttackResult::Miss
        };
        self.strategy.handle_result(target, result);
        debug!(
            "opponent attacked {}: {:?} ({} targets left)",
            target,
            result,
            self.strategy.remaining()
        );
        Ok((result, target))
    }

    pub fn fleet(&self) -> &[Vessel] {
        &self.fleet
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut [Vessel] {
        &mut self.fleet
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn destroyed_factories(&self) -> usize {
        self.destroyed_factories
    }

    /// Vessels not yet sunk.
    pub fn vessels_afloat(&self) -> usize {
        self.fleet.iter().filter(|v| !v.is_destroyed()).count()
    }
}

impl<S: TargetingStrategy> Combatant for Opponent<S> {
    fn mishits(&self) -> usize {
        self.mishits
    }

    fn kills(&self) -> usize {
        self.destroyed_factories
    }
}
