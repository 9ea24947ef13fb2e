use factory_siege::{Coord, GameError, Orientation, Vessel};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn test_invalid_length_rejected() {
    assert_eq!(
        Vessel::new(0, Orientation::Horizontal).unwrap_err(),
        GameError::InvalidLength(0)
    );
    assert_eq!(
        Vessel::new(6, Orientation::Vertical).unwrap_err(),
        GameError::InvalidLength(6)
    );
}

#[test]
fn test_new_vessel_is_unplaced_at_full_health() {
    let vessel = Vessel::new(4, Orientation::Vertical).unwrap();
    assert!(!vessel.is_placed());
    assert_eq!(vessel.health(), 4);
    assert!(vessel.cells().is_empty());
    assert!(!vessel.is_destroyed());
}

#[test]
fn test_with_position_orders_cells() {
    let vessel =
        Vessel::with_position(3, Orientation::Vertical, vec![c(4, 6), c(4, 4), c(4, 5)]).unwrap();
    assert_eq!(vessel.cells(), &[c(4, 4), c(4, 5), c(4, 6)]);
    assert_eq!(vessel.health(), 3);
    assert!(vessel.is_placed());
    assert!(vessel.occupies(c(4, 5)));
}

#[test]
fn test_malformed_positions_rejected() {
    // too few cells
    assert_eq!(
        Vessel::with_position(3, Orientation::Horizontal, vec![c(0, 0), c(1, 0)]).unwrap_err(),
        GameError::MalformedPosition
    );
    // gap
    assert_eq!(
        Vessel::with_position(2, Orientation::Horizontal, vec![c(0, 0), c(2, 0)]).unwrap_err(),
        GameError::MalformedPosition
    );
    // runs along the wrong axis
    assert_eq!(
        Vessel::with_position(2, Orientation::Horizontal, vec![c(2, 2), c(2, 3)]).unwrap_err(),
        GameError::MalformedPosition
    );
    // duplicate cell
    assert_eq!(
        Vessel::with_position(2, Orientation::Vertical, vec![c(1, 1), c(1, 1)]).unwrap_err(),
        GameError::MalformedPosition
    );
}

#[test]
fn test_place_twice_rejected() {
    let mut vessel = Vessel::with_position(1, Orientation::Horizontal, vec![c(0, 0)]).unwrap();
    assert_eq!(
        vessel.place(vec![c(5, 5)]).unwrap_err(),
        GameError::VesselAlreadyPlaced
    );
}

#[test]
fn test_take_damage_counts_each_cell_once() {
    let mut vessel =
        Vessel::with_position(2, Orientation::Horizontal, vec![c(0, 0), c(1, 0)]).unwrap();

    assert!(vessel.take_damage(c(0, 0)));
    assert_eq!(vessel.health(), 1);

    // same cell again is no longer part of the vessel
    assert!(!vessel.take_damage(c(0, 0)));
    assert_eq!(vessel.health(), 1);

    assert!(!vessel.take_damage(c(5, 5)));
    assert!(!vessel.is_destroyed());

    assert!(vessel.take_damage(c(1, 0)));
    assert_eq!(vessel.health(), 0);
    assert!(vessel.is_destroyed());
    // still counts as placed once sunk
    assert!(vessel.is_placed());
}

#[test]
fn test_single_cell_vessel_destroyed_by_one_hit() {
    let mut vessel = Vessel::with_position(1, Orientation::Vertical, vec![c(3, 3)]).unwrap();
    assert_eq!(vessel.health(), 1);
    assert!(vessel.take_damage(c(3, 3)));
    assert_eq!(vessel.health(), 0);
    assert!(vessel.is_destroyed());
}

#[test]
fn test_random_orientation_uses_both() {
    let mut rng = SmallRng::seed_from_u64(7);
    let orientations: Vec<_> = (0..64)
        .map(|_| Vessel::with_random_orientation(3, &mut rng).unwrap().orientation())
        .collect();
    assert!(orientations.contains(&Orientation::Horizontal));
    assert!(orientations.contains(&Orientation::Vertical));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn health_stays_in_range(
        len in 1usize..=5,
        x in 0usize..5,
        y in 0usize..10,
        shots in proptest::collection::vec((0usize..10, 0usize..10), 0..40),
    ) {
        let cells: Vec<Coord> = (0..len).map(|i| c(x + i, y)).collect();
        let mut vessel = Vessel::with_position(len, Orientation::Horizontal, cells).unwrap();
        let mut last = vessel.health();
        for (sx, sy) in shots {
            let hit = vessel.take_damage(c(sx, sy));
            prop_assert!(vessel.health() <= len);
            prop_assert_eq!(vessel.health(), vessel.cells().len());
            prop_assert_eq!(vessel.is_destroyed(), vessel.health() == 0);
            prop_assert_eq!(last - vessel.health(), usize::from(hit));
            last = vessel.health();
        }
    }
}
