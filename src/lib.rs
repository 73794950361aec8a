//! atr-targets: ATR-based stop-loss/take-profit calculator
//!
//! This library provides:
//! - A pure risk-target calculator: SL/TP levels, reward:risk, distances,
//!   optional tick rounding and position sizing
//! - Boundary-layer validation with user-facing errors
//! - Session-local calculation history with CSV export
//! - A shareable-link codec for calculator inputs
//! - An independent, best-effort economic calendar / news fetcher
//! - CLI and configuration plumbing around all of the above

pub mod calc;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod history;
pub mod share;
pub mod telemetry;
