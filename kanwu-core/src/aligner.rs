//! Anchor/window sentence sequence aligner
//!
//! Aligns two ordered sentence lists with a bounded forward search instead
//! of a full edit-distance matrix, so long documents where most sentences
//! already correspond 1:1 stay near-linear. The walk keeps one cursor per
//! sequence, absorbs many-to-one splits/merges at the cursor, searches a
//! growing window when the cursor pair disagrees, and finally reclassifies
//! delete/insert residue into moveout/movein pairs when a sentence
//! reappears within the expanded search bound.
//!
//! Contract: every index of A ends up in exactly one of
//! {match `a_indices`, delete, moveout}, and symmetrically for B.

use crate::config::AlignmentOptions;
use crate::error::{AlignError, Result};
use crate::sequence::SentenceSequence;
use crate::similarity::SimilarityScorer;
use smallvec::{smallvec, SmallVec};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Index list kept inline for the common 1:1 case
pub type IndexList = SmallVec<[usize; 2]>;

/// Alignment item tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlignmentKind {
    /// Matched sentence pair
    Match,
    /// Present only in the original
    Delete,
    /// Present only in the revision
    Insert,
    /// Original position of a relocated sentence
    MoveOut,
    /// Revised position of a relocated sentence
    MoveIn,
}

/// One entry of the alignment output
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum AlignmentItem {
    /// Matched sentences, possibly merged from several indices on one side
    Match {
        /// Original text (merged when `a_indices` has several entries)
        a: String,
        /// Revised text (merged when `b_indices` has several entries)
        b: String,
        /// Original indices covered by this match
        a_indices: IndexList,
        /// Revised indices covered by this match
        b_indices: IndexList,
        /// Resolved 1-based line numbers on the original side
        a_lines: IndexList,
        /// Resolved 1-based line numbers on the revised side
        b_lines: IndexList,
        /// Similarity score that accepted the match
        score: f64,
    },
    /// Sentence present only in the original
    Delete {
        /// Original text
        a: String,
        /// Index into the original sequence
        a_index: usize,
        /// Resolved 1-based line number
        a_line: usize,
    },
    /// Sentence present only in the revision
    Insert {
        /// Revised text
        b: String,
        /// Index into the revised sequence
        b_index: usize,
        /// Resolved 1-based line number
        b_line: usize,
    },
    /// Original position of a sentence relocated beyond the window
    MoveOut {
        /// Original text
        a: String,
        /// Index into the original sequence
        a_index: usize,
        /// Resolved 1-based line number
        a_line: usize,
        /// Line the sentence moved to on the revised side
        to_line: usize,
    },
    /// Revised position of a sentence relocated beyond the window
    MoveIn {
        /// Revised text
        b: String,
        /// Index into the revised sequence
        b_index: usize,
        /// Resolved 1-based line number
        b_line: usize,
        /// Line the sentence came from on the original side
        from_line: usize,
    },
}

impl AlignmentItem {
    /// Tag of this item
    pub fn kind(&self) -> AlignmentKind {
        match self {
            AlignmentItem::Match { .. } => AlignmentKind::Match,
            AlignmentItem::Delete { .. } => AlignmentKind::Delete,
            AlignmentItem::Insert { .. } => AlignmentKind::Insert,
            AlignmentItem::MoveOut { .. } => AlignmentKind::MoveOut,
            AlignmentItem::MoveIn { .. } => AlignmentKind::MoveIn,
        }
    }
}

/// Shared cancellation flag checked once per outer-loop iteration
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once `cancel` has been called
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Align two sentence sequences
pub fn align(
    a: &SentenceSequence,
    b: &SentenceSequence,
    options: &AlignmentOptions,
) -> Result<Vec<AlignmentItem>> {
    align_with_cancel(a, b, options, &CancelToken::new())
}

/// Align two sentence sequences with cooperative cancellation
///
/// Cancellation aborts with [`AlignError::Cancelled`]; no partial result is
/// surfaced.
pub fn align_with_cancel(
    a: &SentenceSequence,
    b: &SentenceSequence,
    options: &AlignmentOptions,
    cancel: &CancelToken,
) -> Result<Vec<AlignmentItem>> {
    options.validate()?;
    let scorer = SimilarityScorer::char_level(options.ngram_size, options.remove_inner_whitespace);
    let mut walk = Walk {
        a,
        b,
        options,
        scorer,
        items: Vec::new(),
        i: 0,
        j: 0,
    };
    walk.run(cancel)?;
    let mut items = walk.items;
    reclassify_moves(&mut items, a, b, options, &scorer);
    Ok(items)
}

struct Walk<'a> {
    a: &'a SentenceSequence,
    b: &'a SentenceSequence,
    options: &'a AlignmentOptions,
    scorer: SimilarityScorer<'a>,
    items: Vec<AlignmentItem>,
    i: usize,
    j: usize,
}

impl<'a> Walk<'a> {
    fn run(&mut self, cancel: &CancelToken) -> Result<()> {
        let mut expansion = 0usize;
        let mut fails = 0usize;
        while self.i < self.a.len() && self.j < self.b.len() {
            if cancel.is_cancelled() {
                return Err(AlignError::Cancelled);
            }
            if let Some((span_a, span_b, score)) = self.cursor_match() {
                self.emit_match(span_a, span_b, score);
                expansion = 0;
                fails = 0;
                continue;
            }
            let window = self.options.window_size + self.options.offset + expansion;
            let ahead_b = self.search(self.a.text(self.i), self.b, self.j + 1, window);
            let ahead_a = self.search(self.b.text(self.j), self.a, self.i + 1, window);
            match (ahead_a, ahead_b) {
                (None, None) => {
                    fails += 1;
                    if fails >= self.options.consecutive_fail_threshold
                        || expansion >= self.options.max_window_expansion
                    {
                        // give up on this cursor pair; residue may still be
                        // reclassified as a move afterwards
                        self.emit_delete(self.i);
                        self.emit_insert(self.j);
                        self.i += 1;
                        self.j += 1;
                        expansion = 0;
                    } else {
                        expansion += 1;
                    }
                }
                (best_a, best_b) => {
                    if prefer_b_side(best_a, best_b, self.i, self.j) {
                        let (k, score) = best_b.unwrap();
                        // revised-side sentences skipped over become inserts
                        for idx in self.j..k {
                            self.emit_insert(idx);
                        }
                        self.j = k;
                        self.emit_match_at(score);
                    } else {
                        let (k, score) = best_a.unwrap();
                        for idx in self.i..k {
                            self.emit_delete(idx);
                        }
                        self.i = k;
                        self.emit_match_at(score);
                    }
                    expansion = 0;
                    fails = 0;
                }
            }
        }
        while self.i < self.a.len() {
            self.emit_delete(self.i);
            self.i += 1;
        }
        while self.j < self.b.len() {
            self.emit_insert(self.j);
            self.j += 1;
        }
        Ok(())
    }

    /// Best qualifying candidate at the cursor pair, considering 1:1 and
    /// many-to-one absorptions of up to 3 sentences on one side. The 1:1
    /// shape is tried first and wins score ties, so identical sequences
    /// never merge spuriously.
    fn cursor_match(&self) -> Option<(usize, usize, f64)> {
        const SHAPES: [(usize, usize); 5] = [(1, 1), (1, 2), (2, 1), (1, 3), (3, 1)];
        let mut best: Option<(usize, usize, f64)> = None;
        for (span_a, span_b) in SHAPES {
            if self.i + span_a > self.a.len() || self.j + span_b > self.b.len() {
                continue;
            }
            let text_a = self.concat(self.a, self.i, span_a);
            let text_b = self.concat(self.b, self.j, span_b);
            let score = self.scorer.score(&text_a, &text_b);
            if score < self.options.similarity_threshold {
                continue;
            }
            if best.map_or(true, |(_, _, s)| score > s) {
                best = Some((span_a, span_b, score));
            }
        }
        best
    }

    /// Best qualifying candidate for `text` among `seq[from .. from+window]`
    ///
    /// Highest score wins; ties go to the candidate nearest the cursor.
    fn search(
        &self,
        text: &str,
        seq: &SentenceSequence,
        from: usize,
        window: usize,
    ) -> Option<(usize, f64)> {
        let to = (from + window).min(seq.len());
        let mut best: Option<(usize, f64)> = None;
        for k in from..to {
            let score = self.scorer.score(text, seq.text(k));
            if score < self.options.similarity_threshold {
                continue;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((k, score));
            }
        }
        best
    }

    fn concat(&self, seq: &SentenceSequence, from: usize, span: usize) -> String {
        let mut out = String::new();
        for idx in from..from + span {
            out.push_str(seq.text(idx));
        }
        out
    }

    fn emit_match(&mut self, span_a: usize, span_b: usize, score: f64) {
        let a_indices: IndexList = (self.i..self.i + span_a).collect();
        let b_indices: IndexList = (self.j..self.j + span_b).collect();
        let a_lines: IndexList = a_indices.iter().map(|&idx| self.a.line(idx)).collect();
        let b_lines: IndexList = b_indices.iter().map(|&idx| self.b.line(idx)).collect();
        let a = self.concat(self.a, self.i, span_a);
        let b = self.concat(self.b, self.j, span_b);
        self.items.push(AlignmentItem::Match {
            a,
            b,
            a_indices,
            b_indices,
            a_lines,
            b_lines,
            score,
        });
        self.i += span_a;
        self.j += span_b;
    }

    /// Emit a 1:1 match at the current cursors (used after a window hit)
    fn emit_match_at(&mut self, score: f64) {
        let item = AlignmentItem::Match {
            a: self.a.text(self.i).to_string(),
            b: self.b.text(self.j).to_string(),
            a_indices: smallvec![self.i],
            b_indices: smallvec![self.j],
            a_lines: smallvec![self.a.line(self.i)],
            b_lines: smallvec![self.b.line(self.j)],
            score,
        };
        self.items.push(item);
        self.i += 1;
        self.j += 1;
    }

    fn emit_delete(&mut self, idx: usize) {
        self.items.push(AlignmentItem::Delete {
            a: self.a.text(idx).to_string(),
            a_index: idx,
            a_line: self.a.line(idx),
        });
    }

    fn emit_insert(&mut self, idx: usize) {
        self.items.push(AlignmentItem::Insert {
            b: self.b.text(idx).to_string(),
            b_index: idx,
            b_line: self.b.line(idx),
        });
    }
}

/// Choose between a forward hit in A and a forward hit in B
///
/// Higher score wins; ties go to the smaller cursor offset, then to the
/// B side so skipped revised sentences surface as inserts.
fn prefer_b_side(
    best_a: Option<(usize, f64)>,
    best_b: Option<(usize, f64)>,
    i: usize,
    j: usize,
) -> bool {
    match (best_a, best_b) {
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (Some((ka, sa)), Some((kb, sb))) => {
            if sb > sa {
                true
            } else if sa > sb {
                false
            } else {
                kb - j <= ka - i
            }
        }
        (None, None) => unreachable!("caller handles the double miss"),
    }
}

/// Reclassify delete/insert residue into moveout/movein pairs
///
/// A delete and an insert whose texts clear the similarity threshold and
/// whose positions differ by at most `window_size * (1 + max_window_expansion)`
/// represent one relocated sentence. Pairing is greedy per delete: highest
/// score first, then smallest positional distance. Totality is unaffected
/// since each index keeps exactly one item.
fn reclassify_moves(
    items: &mut [AlignmentItem],
    a: &SentenceSequence,
    b: &SentenceSequence,
    options: &AlignmentOptions,
    scorer: &SimilarityScorer,
) {
    let bound = options.move_search_bound();
    let delete_slots: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.kind() == AlignmentKind::Delete)
        .map(|(slot, _)| slot)
        .collect();
    let mut insert_slots: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.kind() == AlignmentKind::Insert)
        .map(|(slot, _)| slot)
        .collect();

    for del_slot in delete_slots {
        let (a_text, a_index) = match &items[del_slot] {
            AlignmentItem::Delete { a, a_index, .. } => (a.clone(), *a_index),
            _ => continue,
        };
        let mut best: Option<(usize, f64, usize)> = None; // (insert slot, score, distance)
        for &ins_slot in &insert_slots {
            let (b_text, b_index) = match &items[ins_slot] {
                AlignmentItem::Insert { b, b_index, .. } => (b, *b_index),
                _ => continue,
            };
            let distance = a_index.abs_diff(b_index);
            if distance > bound {
                continue;
            }
            let score = scorer.score(&a_text, b_text);
            if score < options.similarity_threshold {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, s, d)) => score > s || (score == s && distance < d),
            };
            if better {
                best = Some((ins_slot, score, distance));
            }
        }
        if let Some((ins_slot, _, _)) = best {
            let b_index = match &items[ins_slot] {
                AlignmentItem::Insert { b_index, .. } => *b_index,
                _ => unreachable!(),
            };
            items[del_slot] = AlignmentItem::MoveOut {
                a: a_text.clone(),
                a_index,
                a_line: a.line(a_index),
                to_line: b.line(b_index),
            };
            items[ins_slot] = AlignmentItem::MoveIn {
                b: b.text(b_index).to_string(),
                b_index,
                b_line: b.line(b_index),
                from_line: a.line(a_index),
            };
            insert_slots.retain(|&slot| slot != ins_slot);
        }
    }
}
