//! Command implementations

pub mod play;
pub mod replay;

pub use play::{SessionSummary, play_from_file, run_play};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_guesses};
