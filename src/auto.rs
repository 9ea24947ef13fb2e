//! Automatic stand-in for the human player.
//!
//! Builds factories on random free cells and attacks random cells of the enemy
//! field it has not shot at yet. Used by the `sim` binary and by round-level
//! tests.

use rand::Rng;

use crate::board::TargetGrid;
use crate::common::{Coord, GameError};
use crate::config::FIELD_SIZE;
use crate::game::{Phase, Round, RoundSummary};
use crate::targeting::TargetingStrategy;
use crate::ui::GameUi;

/// Upper bound on actions in one automatic round. Construction needs a handful
/// and battle at most one turn per enemy cell.
const MAX_ACTIONS: usize = 4 * FIELD_SIZE * FIELD_SIZE;

/// Picks build sites and targets at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoCommander;

impl AutoCommander {
    pub fn new() -> Self {
        Self
    }

    /// A random cell of the home field to try building on.
    pub fn select_build_site<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Coord {
        Coord::at(rng.random_range(0..FIELD_SIZE), rng.random_range(0..FIELD_SIZE))
    }

    /// A random enemy cell not yet resolved, or `None` if every cell is.
    pub fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        view: &TargetGrid,
    ) -> Option<Coord> {
        let unknown = view.unknown_count();
        if unknown == 0 {
            return None;
        }
        view.unknown_cells().nth(rng.random_range(0..unknown))
    }

    /// Drive `round` from its current phase to a resolution.
    pub fn play_round<R, U, S>(
        &mut self,
        round: &mut Round<S>,
        rng: &mut R,
        ui: &mut U,
    ) -> Result<RoundSummary, GameError>
    where
        R: Rng + ?Sized,
        U: GameUi + ?Sized,
        S: TargetingStrategy,
    {
        for _ in 0..MAX_ACTIONS {
            match round.phase() {
                Phase::Construction => {
                    let site = self.select_build_site(rng);
                    round.build(site, ui)?;
                }
                Phase::Battle => {
                    let target = self
                        .select_target(rng, round.enemy_view())
                        .ok_or(GameError::NoTargetsLeft)?;
                    round.attack(target, rng, ui)?;
                }
                Phase::Resolved(_) => break,
            }
        }
        Ok(round.summary())
    }
}
