#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod controller;
pub mod core;
pub mod render;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;

pub use crate::core::*;
pub use controller::{GameController, PendingReply, Phase};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use render::{visual_state, BoardId, RecordingRenderer, RenderCommand, Renderer, VisualState};
#[cfg(feature = "std")]
pub use session::{run_session, EventSource, SessionSummary, UiEvent};
