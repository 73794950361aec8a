//! HTTP client for the calendar and news feeds
//!
//! Talks to the ForexFactory-style weekly JSON feed. Everything here is
//! best-effort: callers log the error and render an empty panel.

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;

use super::types::{CalendarEvent, Impact, NewsItem};
use crate::config::CalendarConfig;

/// Default feed host (weekly economic calendar as JSON)
pub const CALENDAR_FEED_URL: &str = "https://nfs.faireconomy.media";

const EVENTS_PATH: &str = "ff_calendar_thisweek.json";
const NEWS_PATH: &str = "news.json";

/// Client for the calendar/news feeds
pub struct CalendarClient {
    base_url: String,
    client: Client,
}

impl CalendarClient {
    pub fn new(config: &CalendarConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch this week's economic calendar events
    ///
    /// Rows the feed sends with unparseable timestamps are dropped with a
    /// debug log rather than failing the whole fetch.
    pub async fn fetch_events(&self) -> anyhow::Result<Vec<CalendarEvent>> {
        let url = format!("{}/{}", self.base_url, EVENTS_PATH);
        tracing::debug!(url = %url, "fetching calendar events");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("calendar feed error: {}", response.status());
        }

        let raw: Vec<RawCalendarEvent> = response.json().await?;
        let mut events = Vec::with_capacity(raw.len());
        for row in raw {
            match convert_event(row) {
                Some(event) => events.push(event),
                None => tracing::debug!("dropping calendar row with bad timestamp"),
            }
        }

        tracing::info!(event_count = events.len(), "fetched calendar events");
        Ok(events)
    }

    /// Fetch current news headlines
    pub async fn fetch_news(&self) -> anyhow::Result<Vec<NewsItem>> {
        let url = format!("{}/{}", self.base_url, NEWS_PATH);
        tracing::debug!(url = %url, "fetching news headlines");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("news feed error: {}", response.status());
        }

        let items: Vec<NewsItem> = response.json().await?;
        tracing::info!(news_count = items.len(), "fetched news headlines");
        Ok(items)
    }
}

/// Raw calendar row as the feed sends it
#[derive(Debug, serde::Deserialize)]
struct RawCalendarEvent {
    title: String,
    country: String,
    /// RFC3339 timestamp with offset, e.g. "2024-01-15T08:30:00-05:00"
    date: String,
    #[serde(default)]
    impact: String,
    #[serde(default)]
    forecast: Option<String>,
    #[serde(default)]
    previous: Option<String>,
}

fn convert_event(raw: RawCalendarEvent) -> Option<CalendarEvent> {
    let time = DateTime::parse_from_rfc3339(&raw.date)
        .ok()?
        .with_timezone(&Utc);
    Some(CalendarEvent {
        title: raw.title,
        country: raw.country,
        time,
        impact: Impact::parse(&raw.impact),
        forecast: raw.forecast.filter(|s| !s.is_empty()),
        previous: raw.previous.filter(|s| !s.is_empty()),
    })
}
