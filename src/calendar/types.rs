//! Calendar and news display types

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Expected market impact of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
    Holiday,
    /// Feed sent something we do not recognise
    Unknown,
}

impl Impact {
    /// Parse the feed's free-form impact label
    pub fn parse(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "high" | "red" => Impact::High,
            "medium" | "orange" | "yellow" => Impact::Medium,
            "low" => Impact::Low,
            "holiday" | "non-economic" => Impact::Holiday,
            _ => Impact::Unknown,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
            Impact::Holiday => "holiday",
            Impact::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// One economic calendar event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    /// Currency / country code, e.g. "USD"
    pub country: String,
    pub time: DateTime<Utc>,
    pub impact: Impact,
    pub forecast: Option<String>,
    pub previous: Option<String>,
}

/// One news headline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_parse_known_labels() {
        assert_eq!(Impact::parse("High"), Impact::High);
        assert_eq!(Impact::parse("red"), Impact::High);
        assert_eq!(Impact::parse("MEDIUM"), Impact::Medium);
        assert_eq!(Impact::parse("orange"), Impact::Medium);
        assert_eq!(Impact::parse("low"), Impact::Low);
        assert_eq!(Impact::parse("Holiday"), Impact::Holiday);
        assert_eq!(Impact::parse("Non-Economic"), Impact::Holiday);
    }

    #[test]
    fn test_impact_parse_unknown_label() {
        assert_eq!(Impact::parse("severe"), Impact::Unknown);
        assert_eq!(Impact::parse(""), Impact::Unknown);
    }

    #[test]
    fn test_impact_display() {
        assert_eq!(Impact::High.to_string(), "high");
        assert_eq!(Impact::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_news_item_deserialize() {
        let json = r#"{
            "headline": "Central bank holds rates",
            "source": "wire",
            "url": "https://news.example.com/1",
            "published_at": "2024-01-15T10:00:00Z"
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.headline, "Central bank holds rates");
        assert_eq!(item.url.as_deref(), Some("https://news.example.com/1"));
    }

    #[test]
    fn test_news_item_url_optional() {
        let json = r#"{
            "headline": "Headline",
            "source": "wire",
            "published_at": "2024-01-15T10:00:00Z"
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert!(item.url.is_none());
    }
}
