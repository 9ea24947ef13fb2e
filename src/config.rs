/// Width and height of both fields.
pub const FIELD_SIZE: usize = 10;
/// Longest vessel the fleet may contain.
pub const MAX_VESSEL_LENGTH: usize = 5;
/// Number of vessels the opponent starts with.
pub const MAX_SHIPS: usize = 7;
/// Number of factories the player builds before battle.
pub const MAX_FACTORIES: usize = 4;
/// Vessel lengths in fleet-declaration order.
pub const FLEET_LENGTHS: [usize; MAX_SHIPS] = [5, 4, 3, 2, 2, 1, 1];
/// Number of full-grid placement attempts before a vessel is given up on.
pub const PLACEMENT_ATTEMPTS: usize = 16;

/// Total number of cells occupied by the opponent's fleet.
pub const TOTAL_FLEET_CELLS: usize = 5 + 4 + 3 + 2 + 2 + 1 + 1;
