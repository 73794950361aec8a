//! Compute command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::calc::{compute_targets, RiskInputs, TradeDirection};
use crate::config::CalculatorConfig;
use crate::history::HistoryLog;

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Trade direction
    #[arg(value_enum)]
    pub direction: TradeDirection,

    /// Entry price
    pub entry: Decimal,

    /// ATR value (e.g. ATR-14 from your charting tool)
    pub atr: Decimal,

    /// Stop-loss distance in ATR units (configured default when omitted)
    #[arg(long)]
    pub sl_mult: Option<Decimal>,

    /// Take-profit distance in ATR units (configured default when omitted)
    #[arg(long)]
    pub tp_mult: Option<Decimal>,

    /// Round SL/TP to this tick size
    #[arg(long)]
    pub tick_size: Option<Decimal>,

    /// Monetary risk budget; enables position sizing
    #[arg(long)]
    pub risk: Option<Decimal>,

    /// Decimal places for displayed prices
    #[arg(long)]
    pub decimals: Option<u32>,

    /// Append the result as a CSV row to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl ComputeArgs {
    pub fn execute(&self, config: &CalculatorConfig) -> anyhow::Result<()> {
        let mut inputs = RiskInputs::new(
            self.direction,
            self.entry,
            self.atr,
            self.sl_mult.unwrap_or(config.sl_multiplier),
            self.tp_mult.unwrap_or(config.tp_multiplier),
        );
        inputs.tick_size = self.tick_size.or(config.tick_size);
        inputs.risk_amount = self.risk;

        // Boundary validation: the calculator is not invoked on bad input.
        inputs.validate()?;

        let result = compute_targets(&inputs);
        if result.distance_to_stop == Decimal::ZERO {
            tracing::warn!("stop distance is zero; reward:risk is floored, not meaningful");
        }

        let decimals = self.decimals.unwrap_or(config.decimals);
        render(&inputs, &result, decimals);

        if let Some(path) = &self.csv {
            let mut log = HistoryLog::new();
            log.record(&inputs, &result);
            log.append_csv(path)?;
            tracing::info!(path = %path.display(), "appended result row");
        }

        Ok(())
    }
}

fn render(inputs: &RiskInputs, result: &crate::calc::RiskResult, decimals: u32) {
    let fmt = |v: Decimal| v.round_dp(decimals);

    println!("{} @ {}", inputs.direction.to_string().to_uppercase(), fmt(inputs.entry));
    println!(
        "  SL = entry {} {} x ATR",
        sign_for(inputs.direction, true),
        inputs.sl_multiplier
    );
    println!(
        "  TP = entry {} {} x ATR",
        sign_for(inputs.direction, false),
        inputs.tp_multiplier
    );
    println!();
    println!(
        "Stop Loss    {}  (d {}, {}%)",
        fmt(result.stop_loss),
        fmt(result.distance_to_stop),
        result.stop_loss_pct.round_dp(2)
    );
    println!(
        "Take Profit  {}  (d {}, {}%)",
        fmt(result.take_profit),
        fmt(result.distance_to_target),
        result.take_profit_pct.round_dp(2)
    );
    println!("Reward:Risk  {} : 1", result.reward_to_risk.round_dp(2));

    if let (Some(size), Some(loss), Some(gain)) =
        (result.position_size, result.loss_at_stop, result.gain_at_target)
    {
        println!();
        println!("Position     {} units", fmt(size));
        println!("At stop      -{}", fmt(loss));
        println!("At target    +{}", fmt(gain));
    }
}

fn sign_for(direction: TradeDirection, is_stop: bool) -> char {
    match (direction, is_stop) {
        (TradeDirection::Long, true) | (TradeDirection::Short, false) => '-',
        _ => '+',
    }
}
