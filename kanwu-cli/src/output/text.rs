//! Human-readable output

use kanwu_core::{AlignmentItem, AlignmentStats, WordReplacement};
use std::fmt::Write;

/// Render a summary, the alignment listing, and the errata rows
pub fn render(
    items: &[AlignmentItem],
    stats: &AlignmentStats,
    errors: &[WordReplacement],
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "sentences: {} total / {} matched / {} deleted / {} inserted / {} moved",
        stats.total,
        stats.matched,
        stats.deleted,
        stats.inserted,
        stats.moved_out + stats.moved_in
    );
    out.push('\n');
    for item in items {
        match item {
            AlignmentItem::Match { a, b, a_lines, b_lines, .. } => {
                if a == b {
                    let _ = writeln!(out, "  = L{} {}", fmt_lines(a_lines), a);
                } else {
                    let _ = writeln!(out, "  ~ L{} {}", fmt_lines(a_lines), a);
                    let _ = writeln!(out, "    L{} {}", fmt_lines(b_lines), b);
                }
            }
            AlignmentItem::Delete { a, a_line, .. } => {
                let _ = writeln!(out, "  - L{a_line} {a}");
            }
            AlignmentItem::Insert { b, b_line, .. } => {
                let _ = writeln!(out, "  + L{b_line} {b}");
            }
            AlignmentItem::MoveOut { a, a_line, to_line, .. } => {
                let _ = writeln!(out, "  < L{a_line} {a} (moved to L{to_line})");
            }
            AlignmentItem::MoveIn { b, b_line, from_line, .. } => {
                let _ = writeln!(out, "  > L{b_line} {b} (moved from L{from_line})");
            }
        }
    }
    if !errors.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "word errors:");
        for error in errors {
            let _ = writeln!(out, "  {} -> {}  ({})", error.wrong, error.correct, error.clause);
        }
    }
    out
}

fn fmt_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join("+")
}
