//! Word error collection over an alignment
//!
//! Walks every matched sentence pair, splits both sides into clauses,
//! realigns the clauses, extracts atomic replacements, and deduplicates
//! by the (wrong, correct) substitution identity while keeping every
//! distinct example clause.

use crate::aligner::{AlignmentItem, CancelToken};
use crate::clause::{align_clauses, split_clauses};
use crate::config::AlignmentOptions;
use crate::error::{AlignError, Result};
use crate::extract::{extract_word_replacement, ExtractMode, WordReplacement};
use crate::tokenizer::{CharTokenizer, Tokenizer};
use std::collections::{BTreeMap, BTreeSet};

/// Collect deduplicated word replacements from alignment output
///
/// Only `match` items carrying non-empty text on both sides are
/// processed. The result holds one row per distinct
/// (wrong, correct, clause) triple, grouped by substitution identity in
/// deterministic order; running the collector twice on the same input
/// produces identical rows.
pub fn collect_word_errors(
    items: &[AlignmentItem],
    options: &AlignmentOptions,
    tokenizer: Option<&dyn Tokenizer>,
    mode: ExtractMode,
) -> Result<Vec<WordReplacement>> {
    collect_word_errors_with_cancel(items, options, tokenizer, mode, &CancelToken::new())
}

/// Collect word replacements with cooperative cancellation
///
/// The cancel flag is checked once per matched pair.
pub fn collect_word_errors_with_cancel(
    items: &[AlignmentItem],
    options: &AlignmentOptions,
    tokenizer: Option<&dyn Tokenizer>,
    mode: ExtractMode,
    cancel: &CancelToken,
) -> Result<Vec<WordReplacement>> {
    options.validate()?;
    let fallback = CharTokenizer;
    let cut_tokenizer: &dyn Tokenizer = tokenizer.unwrap_or(&fallback);

    let mut dedup: BTreeMap<(String, String), BTreeSet<String>> = BTreeMap::new();
    for item in items {
        let (a, b) = match item {
            AlignmentItem::Match { a, b, .. } if !a.is_empty() && !b.is_empty() => (a, b),
            _ => continue,
        };
        if cancel.is_cancelled() {
            return Err(AlignError::Cancelled);
        }
        let clauses_a = split_clauses(a, &options.clause_delimiters);
        let clauses_b = split_clauses(b, &options.clause_delimiters);
        let pairs = align_clauses(&clauses_a, &clauses_b, options, tokenizer);
        for pair in pairs {
            if let Some(replacement) =
                extract_word_replacement(&pair.clause_a, &pair.clause_b, cut_tokenizer, mode)
            {
                dedup
                    .entry((replacement.wrong, replacement.correct))
                    .or_default()
                    .insert(replacement.clause);
            }
        }
    }

    Ok(dedup
        .into_iter()
        .flat_map(|((wrong, correct), clauses)| {
            clauses.into_iter().map(move |clause| WordReplacement {
                wrong: wrong.clone(),
                correct: correct.clone(),
                clause,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::align;
    use crate::sequence::SentenceSequence;

    fn options() -> AlignmentOptions {
        AlignmentOptions::builder().similarity_threshold(0.4).build().unwrap()
    }

    fn run(a: &[&str], b: &[&str]) -> Vec<WordReplacement> {
        let seq_a = SentenceSequence::from_texts(a.iter().copied());
        let seq_b = SentenceSequence::from_texts(b.iter().copied());
        let items = align(&seq_a, &seq_b, &options()).unwrap();
        collect_word_errors(&items, &options(), None, ExtractMode::Default).unwrap()
    }

    #[test]
    fn scenario_single_substitution() {
        let rows = run(
            &["今天天气很好。", "他去了五伯家。"],
            &["今天天气很好。", "他去了五百家。"],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].wrong, "伯");
        assert_eq!(rows[0].correct, "百");
        assert_eq!(rows[0].clause, "他去了五伯家");
    }

    #[test]
    fn identical_documents_yield_nothing() {
        let rows = run(&["今天天气很好。"], &["今天天气很好。"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn repeated_substitution_keeps_distinct_clauses_once() {
        let rows = run(
            &["他去了五伯家。", "他去了五伯家。", "又见到了五伯先生。"],
            &["他去了五百家。", "他去了五百家。", "又见到了五百先生。"],
        );
        // same (伯, 百) substitution in two distinct clauses
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.wrong == "伯" && r.correct == "百"));
        let clauses: Vec<_> = rows.iter().map(|r| r.clause.as_str()).collect();
        assert!(clauses.contains(&"他去了五伯家"));
        assert!(clauses.contains(&"又见到了五伯先生"));
    }

    #[test]
    fn collector_is_idempotent() {
        let seq_a = SentenceSequence::from_texts(["他去了五伯家。", "今天天气很好。"]);
        let seq_b = SentenceSequence::from_texts(["他去了五百家。", "今天天气很好。"]);
        let items = align(&seq_a, &seq_b, &options()).unwrap();
        let first = collect_word_errors(&items, &options(), None, ExtractMode::Default).unwrap();
        let second = collect_word_errors(&items, &options(), None, ExtractMode::Default).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_match_items_are_ignored() {
        let seq_a = SentenceSequence::from_texts(["春眠不觉晓处处闻啼鸟。"]);
        let seq_b = SentenceSequence::from_texts(["夜来风雨声花落知多少。"]);
        let items = align(&seq_a, &seq_b, &options()).unwrap();
        assert!(items.iter().all(|i| !matches!(i, AlignmentItem::Match { .. })));
        let rows = collect_word_errors(&items, &options(), None, ExtractMode::Default).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn cancellation_aborts() {
        let seq = SentenceSequence::from_texts(["他去了五伯家。"]);
        let items = align(&seq, &seq, &options()).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = collect_word_errors_with_cancel(
            &items,
            &options(),
            None,
            ExtractMode::Default,
            &cancel,
        )
        .unwrap_err();
        assert_eq!(err, AlignError::Cancelled);
    }
}
