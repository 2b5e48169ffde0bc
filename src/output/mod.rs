//! Terminal output formatting
//!
//! Banners, the partial word, and round outcomes.

pub mod display;
pub mod formatters;

pub use display::{
    print_input_error, print_replay_result, print_round_outcome, print_round_state,
    print_summary, print_turn_feedback, print_welcome,
};
