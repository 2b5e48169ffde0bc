//! Session control: input parsing and the round-to-round state machine

pub mod input;
pub mod machine;

pub use input::{InputError, parse_confirmation, parse_guess};
pub use machine::SessionState;
