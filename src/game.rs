//! One round: Setup, Construction, Battle, then Victory or Loss.

use log::info;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::board::{HomeCell, TargetGrid};
use crate::combatant::{Combatant, Opponent, Player};
use crate::common::{AttackResult, Coord, GameError};
use crate::config::{MAX_FACTORIES, MAX_SHIPS};
use crate::targeting::{PoolTargeting, TargetingStrategy};
use crate::ui::GameUi;

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    /// Every vessel sunk.
    Victory,
    /// Every factory destroyed.
    Loss,
}

/// Current phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Construction,
    Battle,
    Resolved(Outcome),
}

/// A discrete request from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Build(Coord),
    Destroy(Coord),
    Attack(Coord),
}

/// Everything that happened during one battle turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub target: Coord,
    pub result: AttackResult,
    /// The cell had already been resolved before this shot.
    pub repeated: bool,
    /// The opponent's answer, absent when the player's shot ended the round.
    pub reply: Option<(AttackResult, Coord)>,
}

/// End-of-round statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundSummary {
    pub outcome: Option<Outcome>,
    pub player_mishits: usize,
    pub opponent_mishits: usize,
    pub sunken_ships: usize,
    pub destroyed_factories: usize,
}

/// Player, opponent and the bookkeeping a front end needs to draw both fields.
pub struct Round<S: TargetingStrategy = PoolTargeting> {
    player: Player,
    opponent: Opponent<S>,
    phase: Phase,
    enemy_view: TargetGrid,
    enemy_shots: CellSet,
    lost_factories: CellSet,
}

impl Round {
    /// Setup: fresh player, freshly placed opponent fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        Ok(Self::with_opponent(Opponent::new(rng)?))
    }
}

impl<S: TargetingStrategy> Round<S> {
    /// Round against a prepared opponent, starting in construction.
    pub fn with_opponent(opponent: Opponent<S>) -> Self {
        Self {
            player: Player::new(),
            opponent,
            phase: Phase::Construction,
            enemy_view: TargetGrid::new(),
            enemy_shots: CellSet::new(),
            lost_factories: CellSet::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn opponent(&self) -> &Opponent<S> {
        &self.opponent
    }

    /// What the player knows of the enemy field.
    pub fn enemy_view(&self) -> &TargetGrid {
        &self.enemy_view
    }

    /// The player's own field at `at`.
    pub fn home_cell(&self, at: Coord) -> HomeCell {
        if self.lost_factories.contains(at) {
            HomeCell::Destroyed
        } else if self.player.has_factory(at) {
            HomeCell::Factory
        } else if self.enemy_shots.contains(at) {
            HomeCell::OpenedByEnemy
        } else {
            HomeCell::Sea
        }
    }

    /// Build a factory during construction. The last one starts the battle.
    pub fn build<U: GameUi + ?Sized>(&mut self, at: Coord, ui: &mut U) -> Result<bool, GameError> {
        self.expect_phase(Phase::Construction)?;
        let built = self.player.build_factory(at);
        ui.factory_built(at, built);
        if built && self.player.factory_count() == MAX_FACTORIES {
            self.phase = Phase::Battle;
            info!("construction finished, entering battle");
            ui.battle_started();
        }
        Ok(built)
    }

    /// Remove a factory during construction.
    pub fn destroy<U: GameUi + ?Sized>(
        &mut self,
        at: Coord,
        ui: &mut U,
    ) -> Result<bool, GameError> {
        self.expect_phase(Phase::Construction)?;
        let removed = self.player.destroy_factory(at);
        ui.factory_destroyed(at, removed);
        Ok(removed)
    }

    /// One battle turn: the player's shot, then, unless that shot won the
    /// round, the opponent's reply.
    pub fn attack<R: Rng + ?Sized, U: GameUi + ?Sized>(
        &mut self,
        at: Coord,
        rng: &mut R,
        ui: &mut U,
    ) -> Result<TurnReport, GameError> {
        self.expect_phase(Phase::Battle)?;
        let result = self.player.attack_enemy(&mut self.opponent, at);
        let repeated = !self.enemy_view.resolve(at, result);
        ui.player_attacked(at, result, repeated);

        let mut report = TurnReport {
            target: at,
            result,
            repeated,
            reply: None,
        };
        if self.player.sunken_ships() >= MAX_SHIPS {
            self.finish(Outcome::Victory, ui);
            return Ok(report);
        }

        let (reply, target) = self.opponent.attack_player(rng, &mut self.player)?;
        self.enemy_shots.insert(target);
        if reply.is_hit() {
            self.lost_factories.insert(target);
        }
        ui.opponent_attacked(target, reply);
        report.reply = Some((reply, target));
        if self.opponent.destroyed_factories() >= MAX_FACTORIES {
            self.finish(Outcome::Loss, ui);
        }
        Ok(report)
    }

    /// Dispatch an input-layer action. Returns the operation's success flag;
    /// for attacks, whether the shot hit.
    pub fn apply<R: Rng + ?Sized, U: GameUi + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
        ui: &mut U,
    ) -> Result<bool, GameError> {
        match action {
            Action::Build(at) => self.build(at, ui),
            Action::Destroy(at) => self.destroy(at, ui),
            Action::Attack(at) => self.attack(at, rng, ui).map(|r| r.result.is_hit()),
        }
    }

    /// Statistics so far; `outcome` is set once the round is resolved.
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            outcome: match self.phase {
                Phase::Resolved(outcome) => Some(outcome),
                _ => None,
            },
            player_mishits: self.player.mishits(),
            opponent_mishits: self.opponent.mishits(),
            sunken_ships: self.player.kills(),
            destroyed_factories: self.opponent.kills(),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Resolved(_))
    }

    fn expect_phase(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase)
        }
    }

    fn finish<U: GameUi + ?Sized>(&mut self, outcome: Outcome, ui: &mut U) {
        self.phase = Phase::Resolved(outcome);
        info!("round resolved: {:?}", outcome);
        ui.round_ended(&self.summary());
    }
}
