//! Comparison report storage and rendering.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::compare::AnalyticsRow;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read or write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed report: {0}")]
    Format(#[from] serde_json::Error),
}

/// A saved comparison: which pile was analyzed, when, and the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub stones: u32,
    pub created_unix_secs: u64,
    pub rows: Vec<AnalyticsRow>,
}

impl ComparisonReport {
    pub fn new(stones: u32, rows: Vec<AnalyticsRow>) -> Self {
        Self {
            stones,
            created_unix_secs: unix_now(),
            rows,
        }
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a report written by `save`
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate the aligned text table
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Search comparison: {} stones ===\n\n", self.stones));
        report.push_str(&format!(
            "{:>5}  {:>13}  {:>16}  {:>11}  {:>14}\n",
            "Depth", "Minimax nodes", "Alpha-beta nodes", "Minimax ms", "Alpha-beta ms"
        ));
        report.push_str(&"-".repeat(67));
        report.push('\n');

        for row in &self.rows {
            report.push_str(&format!(
                "{:>5}  {:>13}  {:>16}  {:>11.2}  {:>14.2}\n",
                row.depth,
                row.minimax_nodes,
                row.alpha_beta_nodes,
                row.minimax_time_ms,
                row.alpha_beta_time_ms
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
