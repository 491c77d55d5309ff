#![cfg(feature = "std")]

//! Event loop driving a [`GameController`] from UI events and the reply timer.
//!
//! Everything runs on one task: a UI event and the opponent's timer are never
//! handled at the same time, so the controller needs no locking.

use std::pin::Pin;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::{sleep, Sleep};

use crate::controller::{GameController, PendingReply, Phase};
use crate::core::Side;
use crate::render::{BoardId, Renderer};

/// Inbound events from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UiEvent {
    /// The user activated a cell.
    CellActivated { board: BoardId, index: usize },
    Start,
    Reset,
    Quit,
}

/// Source of UI events. `None` means the UI has gone away.
#[async_trait::async_trait]
pub trait EventSource: Send {
    async fn next_event(&mut self) -> Option<UiEvent>;
}

#[async_trait::async_trait]
impl EventSource for mpsc::Receiver<UiEvent> {
    async fn next_event(&mut self) -> Option<UiEvent> {
        self.recv().await
    }
}

#[async_trait::async_trait]
impl EventSource for mpsc::UnboundedReceiver<UiEvent> {
    async fn next_event(&mut self) -> Option<UiEvent> {
        self.recv().await
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SessionSummary {
    pub matches_played: u64,
    pub last_phase: Phase,
    pub winner: Option<Side>,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// Run until the event source closes or a `Quit` arrives.
///
/// After each player shot that leaves the match open, the opponent reply is
/// scheduled `reply_delay` later. A newer reply replaces an older pending one;
/// replies that outlive their match are discarded by the controller.
pub async fn run_session<R, E>(
    controller: &mut GameController<R>,
    events: &mut E,
    reply_delay: Duration,
) -> anyhow::Result<SessionSummary>
where
    R: Renderer + Send,
    E: EventSource + ?Sized,
{
    let mut pending: Option<(PendingReply, Pin<Box<Sleep>>)> = None;

    loop {
        let timer = async {
            match pending.as_mut() {
                Some((_, delay)) => delay.as_mut().await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = timer => {
                if let Some((reply, _)) = pending.take() {
                    controller.opponent_reply(reply);
                }
            }
            event = events.next_event() => {
                let Some(event) = event else {
                    debug!("event source closed");
                    break;
                };
                match event {
                    UiEvent::Quit => break,
                    UiEvent::Start => controller.start()?,
                    UiEvent::Reset => controller.reset()?,
                    UiEvent::CellActivated { board, index } => {
                        if let Some(reply) = controller.on_cell_activated(board, index) {
                            pending = Some((reply, Box::pin(sleep(reply_delay))));
                        }
                    }
                }
            }
        }
    }

    let summary = SessionSummary {
        matches_played: controller.match_id(),
        last_phase: controller.phase(),
        winner: controller.winner(),
        player_shots: controller.turns().shots_fired(Side::Player),
        opponent_shots: controller.turns().shots_fired(Side::Opponent),
    };
    info!("session over: {:?}", summary);
    Ok(summary)
}
