//! Risk-target calculation module
//!
//! The pure computational core: maps validated trade inputs to stop-loss,
//! take-profit, reward:risk and optional position-sizing outputs. No I/O,
//! no state, no side effects.

mod rounding;
mod sizing;
mod targets;
mod types;

pub use rounding::round_to_tick;
pub use sizing::{size_position, PositionPlan};
pub use targets::{compute_targets, STOP_DISTANCE_FLOOR};
pub use types::{InputError, RiskInputs, RiskResult, TradeDirection};
