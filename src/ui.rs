use log::{debug, info};

use crate::common::{AttackResult, Coord};
use crate::game::{Outcome, RoundSummary};

/// Receives notifications from a [`Round`](crate::Round). The round never
/// asks the UI for anything; all decisions happen in the core.
pub trait GameUi {
    /// A build request at `at` finished.
    fn factory_built(&mut self, _at: Coord, _success: bool) {}

    /// A destroy request at `at` finished.
    fn factory_destroyed(&mut self, _at: Coord, _success: bool) {}

    /// Construction is complete and the battle begins.
    fn battle_started(&mut self) {}

    /// The player shot at `at`. `repeated` is set when that cell had already
    /// been resolved.
    fn player_attacked(&mut self, _at: Coord, _result: AttackResult, _repeated: bool) {}

    /// The opponent shot at `at`.
    fn opponent_attacked(&mut self, _at: Coord, _result: AttackResult) {}

    /// The round reached Victory or Loss.
    fn round_ended(&mut self, _summary: &RoundSummary) {}
}

/// [`GameUi`] that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUi;

impl GameUi for NullUi {}

/// [`GameUi`] that forwards notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogUi;

impl GameUi for LogUi {
    fn factory_built(&mut self, at: Coord, success: bool) {
        debug!("build at {}: {}", at, if success { "ok" } else { "refused" });
    }

    fn factory_destroyed(&mut self, at: Coord, success: bool) {
        debug!("destroy at {}: {}", at, if success { "ok" } else { "nothing there" });
    }

    fn battle_started(&mut self) {
        info!("all factories built, battle begins");
    }

    fn player_attacked(&mut self, at: Coord, result: AttackResult, repeated: bool) {
        debug!("player attacked {}: {:?}{}", at, result, if repeated { " (repeat)" } else { "" });
    }

    fn opponent_attacked(&mut self, at: Coord, result: AttackResult) {
        debug!("opponent attacked {}: {:?}", at, result);
    }

    fn round_ended(&mut self, summary: &RoundSummary) {
        let verdict = match summary.outcome {
            Some(Outcome::Victory) => "victory",
            Some(Outcome::Loss) => "loss",
            None => "unfinished",
        };
        info!(
            "round ended in {}: {} player mishits, {} opponent mishits, {} sunken ships, {} destroyed factories",
            verdict,
            summary.player_mishits,
            summary.opponent_mishits,
            summary.sunken_ships,
            summary.destroyed_factories
        );
    }
}
