//! Combatants and their attack/build operations.
//!
//! - `Player`: the human side, owning up to four factories
//! - `Opponent`: the computer side, owning the hidden fleet and a targeting
//!   strategy

/// Counters every combatant exposes for the end-of-round statistics.
pub trait Combatant {
    /// Attacks that struck nothing.
    fn mishits(&self) -> usize;

    /// Enemy structures destroyed: sunken vessels for the player, destroyed
    /// factories for the opponent.
    fn kills(&self) -> usize;
}

pub mod opponent;
pub use opponent::Opponent;

pub mod player;
pub use player::Player;
