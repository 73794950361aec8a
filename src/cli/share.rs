//! Share command implementation

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::calc::{RiskInputs, TradeDirection};
use crate::share;

#[derive(Args, Debug)]
pub struct ShareArgs {
    #[command(subcommand)]
    pub action: ShareAction,
}

#[derive(Subcommand, Debug)]
pub enum ShareAction {
    /// Encode calculator inputs as a shareable query string
    Encode(EncodeArgs),
    /// Decode a shared query string and show the inputs it carries
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Trade direction
    #[arg(value_enum)]
    pub direction: TradeDirection,

    /// Entry price
    pub entry: Decimal,

    /// ATR value
    pub atr: Decimal,

    /// Stop-loss distance in ATR units
    #[arg(long, default_value = "1.0")]
    pub sl_mult: Decimal,

    /// Take-profit distance in ATR units
    #[arg(long, default_value = "2.0")]
    pub tp_mult: Decimal,

    /// Round SL/TP to this tick size
    #[arg(long)]
    pub tick_size: Option<Decimal>,

    /// Monetary risk budget
    #[arg(long)]
    pub risk: Option<Decimal>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// The query string to decode (leading '?' allowed)
    pub query: String,
}

impl ShareArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.action {
            ShareAction::Encode(args) => {
                let mut inputs = RiskInputs::new(
                    args.direction,
                    args.entry,
                    args.atr,
                    args.sl_mult,
                    args.tp_mult,
                );
                inputs.tick_size = args.tick_size;
                inputs.risk_amount = args.risk;
                inputs.validate()?;

                println!("{}", share::encode(&inputs));
            }
            ShareAction::Decode(args) => {
                let inputs = share::decode(&args.query)?;

                println!("direction     {}", inputs.direction);
                println!("entry         {}", inputs.entry);
                println!("atr           {}", inputs.atr);
                println!("sl multiplier {}", inputs.sl_multiplier);
                println!("tp multiplier {}", inputs.tp_multiplier);
                if let Some(tick) = inputs.tick_size {
                    println!("tick size     {tick}");
                }
                if let Some(risk) = inputs.risk_amount {
                    println!("risk amount   {risk}");
                }
            }
        }
        Ok(())
    }
}
