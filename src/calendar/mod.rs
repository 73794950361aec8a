//! Economic calendar and news panel
//!
//! A best-effort, display-only fetcher with no dependency on the calculator.
//! Fetch failures are the caller's to swallow; the intended degradation is an
//! empty panel, never a blocked calculation.

mod client;
mod types;

pub use client::{CalendarClient, CALENDAR_FEED_URL};
pub use types::{CalendarEvent, Impact, NewsItem};
