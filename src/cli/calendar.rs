//! Calendar command implementation
//!
//! Fetch failure is informational, never fatal: the calculator has no
//! dependency on this panel, so the command prints a notice and exits 0.

use clap::Args;

use crate::calendar::CalendarClient;
use crate::config::CalendarConfig;

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Show news headlines instead of calendar events
    #[arg(long)]
    pub news: bool,

    /// Maximum number of rows to show
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

impl CalendarArgs {
    pub async fn execute(&self, config: &CalendarConfig) -> anyhow::Result<()> {
        if !config.enabled {
            println!("Calendar panel is disabled in configuration.");
            return Ok(());
        }

        let client = CalendarClient::new(config)?;

        if self.news {
            match client.fetch_news().await {
                Ok(items) if items.is_empty() => println!("No news headlines right now."),
                Ok(items) => {
                    for item in items.iter().take(self.limit) {
                        println!("{}  [{}] {}", item.published_at, item.source, item.headline);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "news feed unavailable");
                    println!("News feed unavailable; try again later.");
                }
            }
        } else {
            match client.fetch_events().await {
                Ok(events) if events.is_empty() => println!("No upcoming calendar events."),
                Ok(events) => {
                    for event in events.iter().take(self.limit) {
                        let forecast = event.forecast.as_deref().unwrap_or("-");
                        println!(
                            "{}  {:3}  {:7}  {}  (forecast {})",
                            event.time, event.country, event.impact.to_string(), event.title, forecast
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "calendar feed unavailable");
                    println!("Calendar feed unavailable; try again later.");
                }
            }
        }

        Ok(())
    }
}
