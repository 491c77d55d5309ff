use polyship::{
    Board, BoardError, Layout, Rotation, ShipKind, ShotLog, ShotOutcome, Side, TurnEngine,
    TurnError, TurnState, BOARD_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

fn board_with(ships: &[(ShipKind, Rotation, usize, usize)]) -> Board {
    let mut layout = Layout::new();
    for &(kind, rotation, left, top) in ships {
        layout.place(kind, rotation, left, top).unwrap();
    }
    Board::from_layout(layout)
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn test_player_hit_hands_turn_to_opponent() {
    let mut opponent = board_with(&[
        (ShipKind::Battleship, Rotation::R0, 2, 0),
        (ShipKind::Scout, Rotation::R0, 9, 9),
    ]);
    let mut turns = TurnEngine::new();

    let report = turns.player_shot(&mut opponent, 5).unwrap();
    assert_eq!(report.shooter, Side::Player);
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(report.state, TurnState::WaitingForOpponentShot);
    assert_eq!(opponent.remaining_ship_cells(), 4);
    assert_eq!(turns.shots_fired(Side::Player), 1);
}

#[test]
fn test_turns_are_enforced_both_ways() {
    let mut opponent = board_with(&[
        (ShipKind::Scout, Rotation::R0, 0, 0),
        (ShipKind::Scout, Rotation::R0, 9, 9),
    ]);
    let mut player = board_with(&[(ShipKind::Scout, Rotation::R0, 0, 0)]);
    let mut turns = TurnEngine::new();
    let mut rng = rng();

    assert_eq!(
        turns.opponent_shot(&mut player, &mut rng).unwrap_err(),
        TurnError::NotYourTurn(Side::Opponent)
    );
    turns.player_shot(&mut opponent, 50).unwrap();
    assert_eq!(
        turns.player_shot(&mut opponent, 51).unwrap_err(),
        TurnError::NotYourTurn(Side::Player)
    );
    assert_eq!(opponent.cell_state(51).unwrap(), polyship::Cell::Empty);
}

#[test]
fn test_repeated_target_keeps_turn() {
    let mut opponent = board_with(&[(ShipKind::Scout, Rotation::R0, 9, 9)]);
    let mut player = board_with(&[
        (ShipKind::Scout, Rotation::R0, 9, 9),
        (ShipKind::Scout, Rotation::R0, 0, 0),
    ]);
    let mut turns = TurnEngine::new();
    let mut rng = rng();

    turns.player_shot(&mut opponent, 10).unwrap();
    turns.opponent_shot(&mut player, &mut rng).unwrap();
    assert_eq!(turns.state(), TurnState::WaitingForPlayerShot);

    assert_eq!(
        turns.player_shot(&mut opponent, 10).unwrap_err(),
        TurnError::Board(BoardError::AlreadyShot(10))
    );
    assert_eq!(turns.state(), TurnState::WaitingForPlayerShot);
    assert_eq!(turns.shots_fired(Side::Player), 1);
}

#[test]
fn test_player_wins_on_last_cell() {
    let mut opponent = board_with(&[(ShipKind::Destroyer, Rotation::R90, 0, 0)]);
    let mut player = board_with(&[
        (ShipKind::Scout, Rotation::R0, 9, 9),
        (ShipKind::Scout, Rotation::R0, 0, 0),
    ]);
    let mut turns = TurnEngine::new();
    let mut rng = rng();

    turns.player_shot(&mut opponent, 0).unwrap();
    turns.opponent_shot(&mut player, &mut rng).unwrap();
    let report = turns.player_shot(&mut opponent, 10).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Sunk(ShipKind::Destroyer));
    assert_eq!(
        report.state,
        TurnState::GameOver {
            winner: Side::Player
        }
    );
    assert_eq!(turns.winner(), Some(Side::Player));
    assert_eq!(
        turns.opponent_shot(&mut player, &mut rng).unwrap_err(),
        TurnError::GameOver
    );
    assert_eq!(
        turns.player_shot(&mut opponent, 20).unwrap_err(),
        TurnError::GameOver
    );
}

#[test]
fn test_opponent_wins_when_player_fleet_is_gone() {
    // The only free cell left in the opponent's log is the player's scout.
    let mut log = ShotLog::new();
    for index in 0..BOARD_SIZE - 1 {
        assert!(log.insert(index));
    }
    let mut opponent = board_with(&[(ShipKind::Scout, Rotation::R0, 0, 0)]);
    let mut player = board_with(&[(ShipKind::Scout, Rotation::R0, 9, 9)]);
    let mut turns = TurnEngine::with_shot_log(log);
    let mut rng = rng();

    turns.player_shot(&mut opponent, 99).unwrap();
    let report = turns.opponent_shot(&mut player, &mut rng).unwrap();
    assert_eq!(report.index, 99);
    assert_eq!(report.outcome, ShotOutcome::Sunk(ShipKind::Scout));
    assert_eq!(turns.winner(), Some(Side::Opponent));
    assert!(turns.is_over());
}

#[test]
fn test_shot_log_picks_the_last_free_cell() {
    let mut log = ShotLog::new();
    for index in 0..99 {
        log.insert(index);
    }
    let mut rng = rng();
    for _ in 0..10 {
        assert_eq!(log.pick_untried(&mut rng), Some(99));
    }
    log.insert(99);
    assert_eq!(log.pick_untried(&mut rng), None);
}

#[test]
fn test_shot_log_rejects_duplicates_and_out_of_range() {
    let mut log = ShotLog::new();
    assert!(log.is_empty());
    assert!(log.insert(3));
    assert!(!log.insert(3));
    assert!(!log.insert(BOARD_SIZE));
    assert_eq!(log.len(), 1);
    log.clear();
    assert!(!log.contains(3));
}

#[test]
fn test_opponent_never_repeats_a_target() {
    let mut opponent = board_with(&[(ShipKind::Scout, Rotation::R0, 9, 9)]);
    let mut player = board_with(&[(ShipKind::Scout, Rotation::R0, 9, 9)]);
    let mut turns = TurnEngine::new();
    let mut rng = rng();
    let mut seen = std::collections::HashSet::new();

    for target in 0..BOARD_SIZE {
        turns.player_shot(&mut opponent, target).unwrap();
        if turns.is_over() {
            break;
        }
        let report = turns.opponent_shot(&mut player, &mut rng).unwrap();
        assert!(seen.insert(report.index), "repeated {}", report.index);
        if turns.is_over() {
            break;
        }
    }
    assert!(turns.is_over());
    assert_eq!(seen.len(), turns.shot_log().len());
}
