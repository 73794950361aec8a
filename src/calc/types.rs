//! Calculator input/output types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trade direction
///
/// A closed two-value enum rather than a free-form string, so "Long" vs
/// "long" mismatches cannot occur past the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "long"),
            TradeDirection::Short => write!(f, "short"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(TradeDirection::Long),
            "short" | "sell" => Ok(TradeDirection::Short),
            other => Err(InputError::UnknownDirection(other.to_string())),
        }
    }
}

/// Validation errors raised at the boundary, before the calculator runs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Entry price must be strictly positive
    #[error("entry price must be positive, got {0}")]
    NonPositiveEntry(Decimal),
    /// ATR must be strictly positive
    #[error("ATR must be positive, got {0}")]
    NonPositiveAtr(Decimal),
    /// Multipliers may be zero but never negative
    #[error("{name} multiplier must not be negative, got {value}")]
    NegativeMultiplier { name: &'static str, value: Decimal },
    /// Tick size, when given, must not be negative
    #[error("tick size must not be negative, got {0}")]
    NegativeTickSize(Decimal),
    /// Risk amount, when given, must not be negative
    #[error("risk amount must not be negative, got {0}")]
    NegativeRiskAmount(Decimal),
    /// Direction text not recognised
    #[error("unknown direction {0:?}, expected \"long\" or \"short\"")]
    UnknownDirection(String),
}

/// Validated inputs for one risk-target calculation
///
/// Owned by the caller and passed by reference; the calculator never
/// retains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInputs {
    pub direction: TradeDirection,
    /// Entry price, must be > 0 for a meaningful result
    pub entry: Decimal,
    /// Average True Range supplied by the caller, must be > 0
    pub atr: Decimal,
    /// Distance to stop in ATR units
    pub sl_multiplier: Decimal,
    /// Distance to target in ATR units
    pub tp_multiplier: Decimal,
    /// Minimum price increment; stop/target are rounded to it when set
    pub tick_size: Option<Decimal>,
    /// Monetary risk budget, enables position sizing when set
    pub risk_amount: Option<Decimal>,
}

impl RiskInputs {
    /// Create inputs with the two optional fields unset
    pub fn new(
        direction: TradeDirection,
        entry: Decimal,
        atr: Decimal,
        sl_multiplier: Decimal,
        tp_multiplier: Decimal,
    ) -> Self {
        Self {
            direction,
            entry,
            atr,
            sl_multiplier,
            tp_multiplier,
            tick_size: None,
            risk_amount: None,
        }
    }

    /// Round computed prices to this tick size
    pub fn with_tick_size(mut self, tick_size: Decimal) -> Self {
        self.tick_size = Some(tick_size);
        self
    }

    /// Size the position against this monetary risk budget
    pub fn with_risk_amount(mut self, risk_amount: Decimal) -> Self {
        self.risk_amount = Some(risk_amount);
        self
    }

    /// Boundary validation: reject inputs the pure computation would only
    /// turn into degenerate output
    ///
    /// `compute_targets` itself is total and never errors; callers that want
    /// a hard failure for nonsense inputs run this first.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.entry <= Decimal::ZERO {
            return Err(InputError::NonPositiveEntry(self.entry));
        }
        if self.atr <= Decimal::ZERO {
            return Err(InputError::NonPositiveAtr(self.atr));
        }
        if self.sl_multiplier < Decimal::ZERO {
            return Err(InputError::NegativeMultiplier {
                name: "stop-loss",
                value: self.sl_multiplier,
            });
        }
        if self.tp_multiplier < Decimal::ZERO {
            return Err(InputError::NegativeMultiplier {
                name: "take-profit",
                value: self.tp_multiplier,
            });
        }
        if let Some(tick) = self.tick_size {
            if tick < Decimal::ZERO {
                return Err(InputError::NegativeTickSize(tick));
            }
        }
        if let Some(risk) = self.risk_amount {
            if risk < Decimal::ZERO {
                return Err(InputError::NegativeRiskAmount(risk));
            }
        }
        Ok(())
    }
}

/// Derived outputs of one calculation
///
/// The sizing fields are `None` when no risk budget was supplied or the stop
/// distance is zero; "not computed" is distinct from "computed as zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub distance_to_stop: Decimal,
    pub distance_to_target: Decimal,
    pub reward_to_risk: Decimal,
    /// Stop distance as percent of entry, 0 when entry is not positive
    pub stop_loss_pct: Decimal,
    /// Target distance as percent of entry, 0 when entry is not positive
    pub take_profit_pct: Decimal,
    pub position_size: Option<Decimal>,
    pub loss_at_stop: Option<Decimal>,
    pub gain_at_target: Option<Decimal>,
}
