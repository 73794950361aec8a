//! Stop-loss / take-profit target computation
//!
//! Long:  SL = entry - sl_mult * ATR,  TP = entry + tp_mult * ATR
//! Short: SL = entry + sl_mult * ATR,  TP = entry - tp_mult * ATR
//!
//! The reward:risk denominator is floored at [`STOP_DISTANCE_FLOOR`] so the
//! function stays total: a zero stop distance yields a large finite ratio,
//! never a division error or an infinity sentinel.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::round_to_tick;
use super::sizing::size_position;
use super::types::{RiskInputs, RiskResult, TradeDirection};

/// Floor for the reward:risk denominator when the stop distance is zero
pub const STOP_DISTANCE_FLOOR: Decimal = dec!(0.000000000001);

const HUNDRED: Decimal = dec!(100);

/// Compute stop-loss, take-profit and derived metrics for one trade
///
/// Pure and deterministic: identical inputs produce identical outputs, and
/// nothing is retained across calls. Callers wanting hard input rejection run
/// [`RiskInputs::validate`] first; this function itself never fails.
pub fn compute_targets(inputs: &RiskInputs) -> RiskResult {
    let sl_offset = inputs.sl_multiplier * inputs.atr;
    let tp_offset = inputs.tp_multiplier * inputs.atr;

    let (mut stop_loss, mut take_profit) = match inputs.direction {
        TradeDirection::Long => (inputs.entry - sl_offset, inputs.entry + tp_offset),
        TradeDirection::Short => (inputs.entry + sl_offset, inputs.entry - tp_offset),
    };

    if let Some(tick) = inputs.tick_size {
        if tick > Decimal::ZERO {
            stop_loss = round_to_tick(stop_loss, tick);
            take_profit = round_to_tick(take_profit, tick);
        }
    }

    // Distances are recomputed from the (possibly rounded) levels so that
    // every reported metric describes the prices actually returned. Rounding
    // a level across the entry must not yield a negative distance, so both
    // are clamped at zero and treated as the degenerate zero-distance case.
    let (raw_stop_distance, raw_target_distance) = match inputs.direction {
        TradeDirection::Long => (inputs.entry - stop_loss, take_profit - inputs.entry),
        TradeDirection::Short => (stop_loss - inputs.entry, inputs.entry - take_profit),
    };
    let distance_to_stop = raw_stop_distance.max(Decimal::ZERO);
    let distance_to_target = raw_target_distance.max(Decimal::ZERO);

    let reward_to_risk = distance_to_target / distance_to_stop.max(STOP_DISTANCE_FLOOR);

    let (stop_loss_pct, take_profit_pct) = if inputs.entry > Decimal::ZERO {
        (
            distance_to_stop / inputs.entry * HUNDRED,
            distance_to_target / inputs.entry * HUNDRED,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let plan = inputs
        .risk_amount
        .and_then(|risk| size_position(risk, distance_to_stop, distance_to_target));

    RiskResult {
        stop_loss,
        take_profit,
        distance_to_stop,
        distance_to_target,
        reward_to_risk,
        stop_loss_pct,
        take_profit_pct,
        position_size: plan.map(|p| p.position_size),
        loss_at_stop: plan.map(|p| p.loss_at_stop),
        gain_at_target: plan.map(|p| p.gain_at_target),
    }
}
