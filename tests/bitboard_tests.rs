use factory_siege::{BitBoard, BitBoardError, CellSet, Coord};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u64, 8>::try_new();
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.get(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_full_and_complement() {
    let full = BitBoard::<u16, 3>::full();
    assert_eq!(full.count_ones(), 9);
    assert!((!full).is_empty());
    assert_eq!(CellSet::full().len(), 100);
}

#[test]
fn test_cell_set_maps_coord_to_row_and_col() {
    let mut set = CellSet::new();
    assert!(set.insert(c(3, 1)));
    assert!(!set.insert(c(3, 1)));
    assert!(set.get(1, 3).unwrap());
    assert!(set.contains(c(3, 1)));
    assert!(!set.contains(c(1, 3)));
    assert_eq!(set.cells().collect::<Vec<_>>(), vec![c(3, 1)]);

    assert!(set.remove(c(3, 1)));
    assert!(!set.remove(c(3, 1)));
    assert!(set.is_empty());
}

#[test]
fn test_cells_are_row_major() {
    let set: CellSet = [c(5, 0), c(0, 1), c(2, 0)].into_iter().collect();
    assert_eq!(
        set.cells().collect::<Vec<_>>(),
        vec![c(2, 0), c(5, 0), c(0, 1)]
    );
    assert_eq!(set.nth_cell(2), Some(c(0, 1)));
    assert_eq!(set.nth_cell(3), None);
}

#[test]
fn test_difference() {
    let taken: CellSet = [c(0, 0), c(9, 9)].into_iter().collect();
    let rest = CellSet::full() - taken;
    assert_eq!(rest.len(), 98);
    assert!(!rest.contains(c(9, 9)));
    assert_eq!((rest | taken).len(), 100);
    assert!((rest & taken).is_empty());
}
