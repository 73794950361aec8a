//! CLI interface for atr-targets
//!
//! Provides subcommands for:
//! - `compute`: Calculate SL/TP levels from entry and ATR
//! - `share`: Encode/decode shareable input links
//! - `calendar`: Show economic calendar events and news
//! - `config`: Show effective configuration

mod calendar;
mod compute;
mod share;

pub use calendar::CalendarArgs;
pub use compute::ComputeArgs;
pub use share::ShareArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atr-targets")]
#[command(about = "ATR-based stop-loss/take-profit calculator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate SL/TP levels from entry and ATR
    Compute(ComputeArgs),
    /// Encode/decode shareable input links
    Share(ShareArgs),
    /// Show economic calendar events and news
    Calendar(CalendarArgs),
    /// Show effective configuration
    Config,
}
