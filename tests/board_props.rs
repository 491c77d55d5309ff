use polyship::{populate_with_retries, Board, Cell, MAX_POPULATE_ATTEMPTS, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::from_layout(populate_with_retries(&mut rng, MAX_POPULATE_ATTEMPTS).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shot_is_idempotent(seed in any::<u64>(), index in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        board.mark_shot(index).unwrap();
        let after_first = board.clone();
        prop_assert!(board.mark_shot(index).is_err());
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn counter_tracks_hits_exactly(seed in any::<u64>(), shots in proptest::collection::vec(0..BOARD_SIZE, 1..150)) {
        let mut board = random_board(seed);
        for index in shots {
            let before = board.remaining_ship_cells();
            let was_ship = board.cell_state(index).unwrap() == Cell::Ship;
            match board.mark_shot(index) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.is_hit(), was_ship);
                    let expected = if was_ship { before - 1 } else { before };
                    prop_assert_eq!(board.remaining_ship_cells(), expected);
                }
                Err(_) => prop_assert_eq!(board.remaining_ship_cells(), before),
            }
        }
        let unhit = board.grid().cells().iter().filter(|c| **c == Cell::Ship).count();
        prop_assert_eq!(board.remaining_ship_cells(), unhit);
    }
}
