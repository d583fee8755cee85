//! CSV errata output

use kanwu_core::{replacements_to_csv, WordReplacement};

/// Render the errata table as CSV
pub fn render(errors: &[WordReplacement]) -> String {
    replacements_to_csv(errors)
}
