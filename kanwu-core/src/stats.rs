//! Per-kind tally over alignment output

use crate::aligner::{AlignmentItem, AlignmentKind};

/// Counts of alignment items by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentStats {
    /// Total number of items
    pub total: usize,
    /// Matched sentence pairs
    pub matched: usize,
    /// Original-only sentences
    pub deleted: usize,
    /// Revision-only sentences
    pub inserted: usize,
    /// Relocated sentences, original position
    pub moved_out: usize,
    /// Relocated sentences, revised position
    pub moved_in: usize,
}

impl AlignmentStats {
    /// Tally `items`; a pure count, no other computation
    pub fn from_items(items: &[AlignmentItem]) -> Self {
        let mut stats = Self {
            total: items.len(),
            ..Self::default()
        };
        for item in items {
            match item.kind() {
                AlignmentKind::Match => stats.matched += 1,
                AlignmentKind::Delete => stats.deleted += 1,
                AlignmentKind::Insert => stats.inserted += 1,
                AlignmentKind::MoveOut => stats.moved_out += 1,
                AlignmentKind::MoveIn => stats.moved_in += 1,
            }
        }
        stats
    }
}
