use atr_targets::cli::{Cli, Commands};
use atr_targets::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing file falls back to built-in defaults
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    let _guard = atr_targets::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Compute(args) => {
            args.execute(&config.calculator)?;
        }
        Commands::Share(args) => {
            args.execute()?;
        }
        Commands::Calendar(args) => {
            args.execute(&config.calendar).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Calculator: SL={}xATR, TP={}xATR, decimals={}",
                config.calculator.sl_multiplier,
                config.calculator.tp_multiplier,
                config.calculator.decimals
            );
            match config.calculator.tick_size {
                Some(tick) => println!("  Tick size: {tick}"),
                None => println!("  Tick size: none (no rounding)"),
            }
            println!(
                "  Calendar: enabled={}, url={}",
                config.calendar.enabled, config.calendar.base_url
            );
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
