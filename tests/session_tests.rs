use std::time::Duration;

use polyship::{
    run_session, BoardId, Cell, GameController, MatchConfig, Phase, RecordingRenderer, Side,
    UiEvent, BOARD_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};
use tokio::sync::mpsc;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(5);

fn controller(seed: u64) -> GameController<RecordingRenderer> {
    let config = MatchConfig::default().with_reply_delay(DELAY);
    GameController::new(RecordingRenderer::new(), config, SmallRng::seed_from_u64(seed)).unwrap()
}

fn empty_cell(c: &GameController<RecordingRenderer>) -> usize {
    (0..BOARD_SIZE)
        .find(|i| c.board(BoardId::Opponent).cell_state(*i).unwrap() == Cell::Empty)
        .unwrap()
}

#[tokio::test]
async fn test_closed_channel_ends_session() {
    let mut c = controller(1);
    let (tx, mut rx) = mpsc::unbounded_channel();
    drop(tx);

    let summary = run_session(&mut c, &mut rx, DELAY).await.unwrap();
    assert_eq!(summary.matches_played, 1);
    assert_eq!(summary.last_phase, Phase::NotStarted);
    assert_eq!(summary.winner, None);
}

#[tokio::test]
async fn test_reply_fires_after_delay() {
    let mut c = controller(2);
    let target = empty_cell(&c);
    let (tx, mut rx) = mpsc::channel(8);

    tokio::spawn(async move {
        tx.send(UiEvent::Start).await.unwrap();
        tx.send(UiEvent::CellActivated {
            board: BoardId::Opponent,
            index: target,
        })
        .await
        .unwrap();
        sleep(DELAY * 10).await;
        tx.send(UiEvent::Quit).await.unwrap();
    });

    let summary = run_session(&mut c, &mut rx, DELAY).await.unwrap();
    assert_eq!(summary.last_phase, Phase::InProgress);
    assert_eq!(summary.player_shots, 1);
    assert_eq!(summary.opponent_shots, 1);
    assert_eq!(c.turns().shots_fired(Side::Opponent), 1);
}

#[tokio::test]
async fn test_reset_discards_pending_reply() {
    let mut c = controller(3);
    let target = empty_cell(&c);
    let (tx, mut rx) = mpsc::unbounded_channel();

    tx.send(UiEvent::Start).unwrap();
    tx.send(UiEvent::CellActivated {
        board: BoardId::Opponent,
        index: target,
    })
    .unwrap();
    tx.send(UiEvent::Reset).unwrap();

    tokio::spawn(async move {
        sleep(DELAY * 10).await;
        tx.send(UiEvent::Quit).unwrap();
    });

    let summary = run_session(&mut c, &mut rx, DELAY).await.unwrap();
    assert_eq!(summary.matches_played, 2);
    assert_eq!(summary.last_phase, Phase::NotStarted);
    assert_eq!(summary.opponent_shots, 0);
    let shot_on_player = (0..BOARD_SIZE)
        .any(|i| c.board(BoardId::Player).cell_state(i).unwrap().is_shot());
    assert!(!shot_on_player);
}

#[tokio::test]
async fn test_clicks_during_pending_reply_are_ignored() {
    let mut c = controller(4);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let long = Duration::from_millis(50);

    tx.send(UiEvent::Start).unwrap();
    for index in 0..3 {
        tx.send(UiEvent::CellActivated {
            board: BoardId::Opponent,
            index,
        })
        .unwrap();
    }
    drop(tx);

    let summary = run_session(&mut c, &mut rx, long).await.unwrap();
    assert_eq!(summary.player_shots, 1);
    assert_eq!(summary.opponent_shots, 0);
}
