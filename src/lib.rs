#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod auto;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
pub mod combatant;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod targeting;
mod ui;
mod vessel;

pub use auto::*;
pub use bitboard::{BitBoard, BitBoardError, CellSet, SetBits};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_coord, Command, Session, TerminalUi};
pub use combatant::{Combatant, Opponent, Player};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::*;
pub use targeting::*;
pub use ui::*;
pub use vessel::*;
