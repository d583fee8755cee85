//! Output formatting module

pub mod csv;
pub mod json;
pub mod text;

use clap::ValueEnum;

/// Supported output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary and per-item listing
    Text,
    /// JSON object with stats, alignment items, and errata rows
    Json,
    /// The errata table as CSV
    Csv,
}
