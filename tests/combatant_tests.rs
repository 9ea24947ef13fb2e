use factory_siege::{
    generate_fleet, AttackResult, Combatant, Coord, GameError, Opponent, Orientation, Player,
    PoolTargeting, TargetingStrategy, Vessel,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

/// Attacks a fixed list of cells while keeping a real pool up to date.
struct Scripted {
    targets: Vec<Coord>,
    pool: PoolTargeting,
}

impl Scripted {
    fn new(targets: Vec<Coord>) -> Self {
        Self {
            targets,
            pool: PoolTargeting::new(),
        }
    }
}

impl TargetingStrategy for Scripted {
    fn select_target<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Option<Coord> {
        if self.targets.is_empty() {
            None
        } else {
            Some(self.targets.remove(0))
        }
    }

    fn handle_result(&mut self, coord: Coord, result: AttackResult) {
        self.pool.handle_result(coord, result);
    }

    fn remaining(&self) -> usize {
        self.pool.remaining()
    }
}

#[test]
fn test_build_refuses_adjacent_factory() {
    let mut player = Player::new();
    assert!(player.build_factory(c(5, 5)));
    assert!(!player.build_factory(c(5, 6)));
    assert_eq!(player.factory_count(), 1);
    assert!(player.build_factory(c(7, 7)));
    assert_eq!(player.factory_count(), 2);
}

#[test]
fn test_build_allows_diagonal_neighbour() {
    let mut player = Player::new();
    assert!(player.build_factory(c(5, 5)));
    assert!(player.build_factory(c(6, 6)));
    assert!(!player.build_factory(c(5, 5)));
}

#[test]
fn test_build_limited_to_four_factories() {
    let mut player = Player::new();
    for at in [c(0, 0), c(2, 0), c(4, 0), c(6, 0)] {
        assert!(player.build_factory(at));
    }
    assert!(!player.build_factory(c(9, 9)));
    assert_eq!(player.factory_count(), 4);

    assert!(player.destroy_factory(c(0, 0)));
    assert!(player.build_factory(c(9, 9)));
}

#[test]
fn test_destroy_factory_exact_cell_only() {
    let mut player = Player::new();
    assert!(player.build_factory(c(3, 3)));
    assert!(!player.destroy_factory(c(3, 4)));
    assert!(player.destroy_factory(c(3, 3)));
    assert!(!player.destroy_factory(c(3, 3)));
    assert_eq!(player.factory_count(), 0);
    // the zone is free again
    assert!(player.build_factory(c(3, 4)));
}

#[test]
fn test_attack_sinks_single_cell_vessel() {
    let fleet = vec![Vessel::with_position(1, Orientation::Horizontal, vec![c(3, 3)]).unwrap()];
    let mut opponent = Opponent::with_fleet(fleet).unwrap();
    let mut player = Player::new();

    assert_eq!(opponent.fleet()[0].health(), 1);
    assert_eq!(player.attack_enemy(&mut opponent, c(3, 3)), AttackResult::Hit);
    assert_eq!(opponent.fleet()[0].health(), 0);
    assert!(opponent.fleet()[0].is_destroyed());
    assert_eq!(player.sunken_ships(), 1);
    assert_eq!(opponent.vessels_afloat(), 0);
}

#[test]
fn test_repeated_attack_is_plain_miss() {
    let fleet = vec![
        Vessel::with_position(2, Orientation::Vertical, vec![c(0, 0), c(0, 1)]).unwrap(),
    ];
    let mut opponent = Opponent::with_fleet(fleet).unwrap();
    let mut player = Player::new();

    assert_eq!(player.attack_enemy(&mut opponent, c(0, 0)), AttackResult::Hit);
    assert_eq!(player.attack_enemy(&mut opponent, c(0, 0)), AttackResult::Miss);
    assert_eq!(opponent.fleet()[0].health(), 1);
    assert_eq!(player.mishits(), 1);
    assert_eq!(player.kills(), 0);
}

#[test]
fn test_attack_damages_first_vessel_in_fleet_order() {
    let fleet = vec![
        Vessel::with_position(2, Orientation::Horizontal, vec![c(0, 0), c(1, 0)]).unwrap(),
        Vessel::with_position(1, Orientation::Horizontal, vec![c(0, 0)]).unwrap(),
    ];
    let mut opponent = Opponent::with_fleet(fleet).unwrap();
    let mut player = Player::new();

    assert_eq!(player.attack_enemy(&mut opponent, c(0, 0)), AttackResult::Hit);
    assert_eq!(opponent.fleet()[0].health(), 1);
    assert_eq!(opponent.fleet()[1].health(), 1);
}

#[test]
fn test_opponent_rejects_unplaced_fleet() {
    let fleet = vec![Vessel::new(2, Orientation::Horizontal).unwrap()];
    assert_eq!(
        Opponent::with_fleet(fleet).unwrap_err(),
        GameError::VesselNotPlaced
    );
}

#[test]
fn test_opponent_destroys_factory_and_prunes_zone() {
    let mut rng = SmallRng::seed_from_u64(1);
    let fleet = generate_fleet(&mut rng).unwrap();
    let mut opponent = Opponent::with_strategy(fleet, Scripted::new(vec![c(2, 2)])).unwrap();
    let mut player = Player::new();
    assert!(player.build_factory(c(2, 2)));

    let (result, at) = opponent.attack_player(&mut rng, &mut player).unwrap();
    assert_eq!((result, at), (AttackResult::Hit, c(2, 2)));
    assert!(!player.has_factory(c(2, 2)));
    assert_eq!(opponent.destroyed_factories(), 1);
    assert_eq!(opponent.mishits(), 0);

    let pool = opponent.strategy().pool.pool();
    assert_eq!(pool.len(), 95);
    for gone in [c(1, 2), c(3, 2), c(2, 1), c(2, 3), c(2, 2)] {
        assert!(!pool.contains(gone));
    }
}

#[test]
fn test_opponent_miss_removes_single_cell() {
    let mut rng = SmallRng::seed_from_u64(2);
    let fleet = generate_fleet(&mut rng).unwrap();
    let mut opponent = Opponent::with_strategy(fleet, Scripted::new(vec![c(7, 7)])).unwrap();
    let mut player = Player::new();
    assert!(player.build_factory(c(7, 8)));

    let (result, _) = opponent.attack_player(&mut rng, &mut player).unwrap();
    assert_eq!(result, AttackResult::Miss);
    assert_eq!(opponent.mishits(), 1);
    assert_eq!(opponent.strategy().remaining(), 99);
    assert!(player.has_factory(c(7, 8)));
}

#[test]
fn test_opponent_without_targets_errors() {
    let mut rng = SmallRng::seed_from_u64(3);
    let fleet = generate_fleet(&mut rng).unwrap();
    let mut opponent = Opponent::with_strategy(fleet, Scripted::new(vec![])).unwrap();
    let mut player = Player::new();
    assert_eq!(
        opponent.attack_player(&mut rng, &mut player).unwrap_err(),
        GameError::NoTargetsLeft
    );
}

#[test]
fn test_pool_targeting_never_repeats_a_cell() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut opponent = Opponent::new(&mut rng).unwrap();
    let mut player = Player::new();
    let mut seen = Vec::new();
    for _ in 0..100 {
        match opponent.attack_player(&mut rng, &mut player) {
            Ok((_, at)) => {
                assert!(!seen.contains(&at));
                seen.push(at);
            }
            Err(e) => {
                assert_eq!(e, GameError::NoTargetsLeft);
                break;
            }
        }
    }
    assert_eq!(seen.len(), 100);
    assert_eq!(opponent.mishits(), 100);
}
