//! Configuration types for atr-targets

use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Calculator defaults applied when the CLI flags are omitted
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Default stop-loss distance in ATR units
    #[serde(default = "default_sl_multiplier")]
    pub sl_multiplier: Decimal,

    /// Default take-profit distance in ATR units
    #[serde(default = "default_tp_multiplier")]
    pub tp_multiplier: Decimal,

    /// Decimal places used when rendering prices (display only)
    #[serde(default = "default_decimals")]
    pub decimals: u32,

    /// Default tick size for price rounding; unset means no rounding
    #[serde(default)]
    pub tick_size: Option<Decimal>,
}

fn default_sl_multiplier() -> Decimal {
    Decimal::new(10, 1) // 1.0 x ATR
}
fn default_tp_multiplier() -> Decimal {
    Decimal::new(20, 1) // 2.0 x ATR
}
fn default_decimals() -> u32 {
    4
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            sl_multiplier: default_sl_multiplier(),
            tp_multiplier: default_tp_multiplier(),
            decimals: default_decimals(),
            tick_size: None,
        }
    }
}

/// Economic calendar / news panel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Whether the calendar command is allowed to go to the network
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL of the calendar feed
    #[serde(default = "default_calendar_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}
fn default_calendar_url() -> String {
    crate::calendar::CALENDAR_FEED_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_calendar_url(),
            timeout_secs: 10,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
