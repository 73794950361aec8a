//! Session-local calculation history
//!
//! An append-only, in-memory log owned by the boundary layer and passed in
//! explicitly. Nothing here survives the process; CSV export is the only way
//! out. The calculator itself knows nothing about this module.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

use crate::calc::{RiskInputs, RiskResult, TradeDirection};

/// One recorded calculation
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub direction: TradeDirection,
    pub entry: Decimal,
    pub atr: Decimal,
    pub sl_multiplier: Decimal,
    pub tp_multiplier: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub reward_to_risk: Decimal,
    pub position_size: Option<Decimal>,
}

impl HistoryEntry {
    fn from_calculation(inputs: &RiskInputs, result: &RiskResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            direction: inputs.direction,
            entry: inputs.entry,
            atr: inputs.atr,
            sl_multiplier: inputs.sl_multiplier,
            tp_multiplier: inputs.tp_multiplier,
            stop_loss: result.stop_loss,
            take_profit: result.take_profit,
            reward_to_risk: result.reward_to_risk,
            position_size: result.position_size,
        }
    }
}

/// Append-only log of calculations for one session
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a calculation; returns the id assigned to the entry
    pub fn record(&mut self, inputs: &RiskInputs, result: &RiskResult) -> Uuid {
        let entry = HistoryEntry::from_calculation(inputs, result);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the whole log as CSV, one row per calculation, header included
    pub fn export_csv<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for entry in &self.entries {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Append the log's rows to a CSV file, writing the header only when the
    /// file is new or empty
    pub fn append_csv(&self, path: &Path) -> anyhow::Result<()> {
        let existing = std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(!existing)
            .from_writer(file);
        for entry in &self.entries {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute_targets;
    use rust_decimal_macros::dec;

    fn sample_inputs() -> RiskInputs {
        RiskInputs::new(
            TradeDirection::Long,
            dec!(100),
            dec!(2),
            dec!(1.0),
            dec!(2.0),
        )
    }

    #[test]
    fn test_record_appends() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());

        let inputs = sample_inputs();
        let result = compute_targets(&inputs);
        log.record(&inputs, &result);
        log.record(&inputs, &result);

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].stop_loss, dec!(98));
        assert_eq!(log.entries()[1].take_profit, dec!(104));
    }

    #[test]
    fn test_record_ids_are_unique() {
        let mut log = HistoryLog::new();
        let inputs = sample_inputs();
        let result = compute_targets(&inputs);
        let a = log.record(&inputs, &result);
        let b = log.record(&inputs, &result);
        assert_ne!(a, b);
    }

    #[test]
    fn test_export_csv_shape() {
        let mut log = HistoryLog::new();
        let inputs = sample_inputs();
        let result = compute_targets(&inputs);
        log.record(&inputs, &result);

        let mut buf = Vec::new();
        log.export_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("direction"));
        assert!(header.contains("stop_loss"));
        assert!(header.contains("reward_to_risk"));

        let row = lines.next().unwrap();
        assert!(row.contains("long"));
        assert!(row.contains("98"));
        assert!(row.contains("104"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_append_csv_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let mut log = HistoryLog::new();
        let inputs = sample_inputs();
        let result = compute_targets(&inputs);
        log.record(&inputs, &result);

        log.append_csv(&path).unwrap();
        log.append_csv(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header_count = text
            .lines()
            .filter(|l| l.starts_with("id,"))
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(text.lines().count(), 3); // header + two rows
    }

    #[test]
    fn test_export_csv_empty_log() {
        let log = HistoryLog::new();
        let mut buf = Vec::new();
        log.export_csv(&mut buf).unwrap();
        // no rows, so the csv writer never emits a header either
        assert!(buf.is_empty());
    }
}
