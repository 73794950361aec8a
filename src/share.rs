//! Shareable-link codec
//!
//! Serializes calculator inputs to a flat `key=value&...` query string and
//! back, so a set of inputs can travel inside a URL. Values are decimal
//! literals and the words "long"/"short", so no percent-escaping is needed.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::calc::{RiskInputs, TradeDirection};

const KEY_DIRECTION: &str = "direction";
const KEY_ENTRY: &str = "entry";
const KEY_ATR: &str = "atr";
const KEY_SL: &str = "sl";
const KEY_TP: &str = "tp";
const KEY_TICK: &str = "tick";
const KEY_RISK: &str = "risk";

/// Errors decoding a shared query string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("missing required key {0:?}")]
    MissingKey(&'static str),
    #[error("key {key:?} has malformed number {value:?}")]
    MalformedNumber { key: &'static str, value: String },
    #[error("unknown direction {0:?}, expected \"long\" or \"short\"")]
    UnknownDirection(String),
    #[error("malformed pair {0:?}, expected key=value")]
    MalformedPair(String),
}

/// Encode inputs as a query string
///
/// Optional fields are omitted when unset, so `decode(encode(x)) == x`.
pub fn encode(inputs: &RiskInputs) -> String {
    let mut parts = vec![
        format!("{KEY_DIRECTION}={}", inputs.direction),
        format!("{KEY_ENTRY}={}", inputs.entry),
        format!("{KEY_ATR}={}", inputs.atr),
        format!("{KEY_SL}={}", inputs.sl_multiplier),
        format!("{KEY_TP}={}", inputs.tp_multiplier),
    ];
    if let Some(tick) = inputs.tick_size {
        parts.push(format!("{KEY_TICK}={tick}"));
    }
    if let Some(risk) = inputs.risk_amount {
        parts.push(format!("{KEY_RISK}={risk}"));
    }
    parts.join("&")
}

/// Decode a query string back into inputs
///
/// Unknown keys are ignored so links survive additive format changes. A
/// leading `?` is tolerated.
pub fn decode(query: &str) -> Result<RiskInputs, ShareError> {
    let query = query.trim_start_matches('?');

    let mut direction = None;
    let mut entry = None;
    let mut atr = None;
    let mut sl = None;
    let mut tp = None;
    let mut tick = None;
    let mut risk = None;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ShareError::MalformedPair(pair.to_string()))?;
        match key {
            KEY_DIRECTION => {
                direction = Some(
                    TradeDirection::from_str(value)
                        .map_err(|_| ShareError::UnknownDirection(value.to_string()))?,
                );
            }
            KEY_ENTRY => entry = Some(parse_number(KEY_ENTRY, value)?),
            KEY_ATR => atr = Some(parse_number(KEY_ATR, value)?),
            KEY_SL => sl = Some(parse_number(KEY_SL, value)?),
            KEY_TP => tp = Some(parse_number(KEY_TP, value)?),
            KEY_TICK => tick = Some(parse_number(KEY_TICK, value)?),
            KEY_RISK => risk = Some(parse_number(KEY_RISK, value)?),
            _ => {}
        }
    }

    Ok(RiskInputs {
        direction: direction.ok_or(ShareError::MissingKey(KEY_DIRECTION))?,
        entry: entry.ok_or(ShareError::MissingKey(KEY_ENTRY))?,
        atr: atr.ok_or(ShareError::MissingKey(KEY_ATR))?,
        sl_multiplier: sl.ok_or(ShareError::MissingKey(KEY_SL))?,
        tp_multiplier: tp.ok_or(ShareError::MissingKey(KEY_TP))?,
        tick_size: tick,
        risk_amount: risk,
    })
}

fn parse_number(key: &'static str, value: &str) -> Result<Decimal, ShareError> {
    Decimal::from_str(value).map_err(|_| ShareError::MalformedNumber {
        key,
        value: value.to_string(),
    })
}
