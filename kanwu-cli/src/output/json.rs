//! JSON output

use anyhow::Result;
use kanwu_core::{AlignmentItem, AlignmentStats, WordReplacement};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    stats: &'a AlignmentStats,
    items: &'a [AlignmentItem],
    errata: &'a [WordReplacement],
}

/// Render the whole run as one pretty-printed JSON object
pub fn render(
    items: &[AlignmentItem],
    stats: &AlignmentStats,
    errors: &[WordReplacement],
) -> Result<String> {
    let report = Report {
        stats,
        items,
        errata: errors,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
