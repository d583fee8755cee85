//! Clause splitting and greedy clause alignment
//!
//! A matched sentence pair is broken into clauses on configurable
//! delimiters, then realigned by similarity. Alignment is greedy in
//! A-order with no backtracking: each original clause takes the best
//! unused revised clause whose score strictly exceeds the clause
//! threshold, and originals with no qualifying partner are dropped. This
//! first-match-wins pass is a deliberate quality/runtime tradeoff, not
//! optimal bipartite matching.

use crate::config::AlignmentOptions;
use crate::similarity::SimilarityScorer;
use crate::tokenizer::Tokenizer;

/// Two clauses drawn from one matched sentence pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClausePair {
    /// Clause from the original sentence
    pub clause_a: String,
    /// Clause from the revised sentence
    pub clause_b: String,
}

/// Split `sentence` into meaningful clauses on any of `delimiters`
///
/// Delimiter characters are not retained. A clause is meaningful when it
/// is non-empty after trimming and still carries at least one
/// alphanumeric (incl. CJK) char once punctuation is stripped.
pub fn split_clauses(sentence: &str, delimiters: &[char]) -> Vec<String> {
    sentence
        .split(|c: char| delimiters.contains(&c))
        .map(str::trim)
        .filter(|clause| is_meaningful(clause))
        .map(str::to_string)
        .collect()
}

fn is_meaningful(clause: &str) -> bool {
    clause.chars().any(|c| c.is_alphanumeric())
}

/// Greedily pair the clauses of a matched sentence pair
///
/// Scoring uses word unigrams when a tokenizer is supplied, character
/// bigrams otherwise.
pub fn align_clauses(
    clauses_a: &[String],
    clauses_b: &[String],
    options: &AlignmentOptions,
    tokenizer: Option<&dyn Tokenizer>,
) -> Vec<ClausePair> {
    let scorer = match tokenizer {
        Some(t) => SimilarityScorer::word_level(1, options.remove_inner_whitespace, t),
        None => SimilarityScorer::char_level(2, options.remove_inner_whitespace),
    };
    let mut used = vec![false; clauses_b.len()];
    let mut pairs = Vec::new();
    for clause_a in clauses_a {
        let mut best: Option<(usize, f64)> = None;
        for (k, clause_b) in clauses_b.iter().enumerate() {
            if used[k] {
                continue;
            }
            let score = scorer.score(clause_a, clause_b);
            if score <= options.clause_similarity_threshold {
                continue;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((k, score));
            }
        }
        if let Some((k, _)) = best {
            used[k] = true;
            pairs.push(ClausePair {
                clause_a: clause_a.clone(),
                clause_b: clauses_b[k].clone(),
            });
        }
        // no qualifying partner: the clause is dropped, by design
    }
    pairs
}
