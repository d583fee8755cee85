//! File reading utilities
//!
//! Documents are expected pre-segmented, one sentence per line. Blank
//! lines are skipped but line numbering is preserved so the report points
//! back at real source lines.

use crate::error::CliError;
use anyhow::{Context, Result};
use kanwu_core::SentenceSequence;
use std::fs;
use std::path::Path;

/// Read a UTF-8 file into a line-numbered sentence sequence
pub fn read_sentences(path: &Path) -> Result<SentenceSequence> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(sentences_from_str(&content))
}

/// Build a sentence sequence from already-loaded text
pub fn sentences_from_str(content: &str) -> SentenceSequence {
    SentenceSequence::from_numbered(
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| (line.trim().to_string(), idx + 1)),
    )
}
