//! N-gram Jaccard similarity
//!
//! Foundation of both alignment passes. Scores are normalized to [0,1] and
//! deterministic for identical inputs. Granularity is either character
//! n-grams or whole-token n-grams over an external tokenizer's cut.

use crate::tokenizer::Tokenizer;
use std::collections::HashSet;

/// N-gram granularity for the scorer
#[derive(Clone, Copy)]
pub enum Granularity<'a> {
    /// Character n-grams
    Char,
    /// Token n-grams produced by an external tokenizer
    Word(&'a dyn Tokenizer),
}

/// Normalized n-gram Jaccard similarity scorer
#[derive(Clone, Copy)]
pub struct SimilarityScorer<'a> {
    ngram_size: usize,
    remove_inner_whitespace: bool,
    granularity: Granularity<'a>,
}

impl<'a> SimilarityScorer<'a> {
    /// Character-level scorer
    pub fn char_level(ngram_size: usize, remove_inner_whitespace: bool) -> Self {
        Self {
            ngram_size,
            remove_inner_whitespace,
            granularity: Granularity::Char,
        }
    }

    /// Word-level scorer backed by an external tokenizer
    pub fn word_level(
        ngram_size: usize,
        remove_inner_whitespace: bool,
        tokenizer: &'a dyn Tokenizer,
    ) -> Self {
        Self {
            ngram_size,
            remove_inner_whitespace,
            granularity: Granularity::Word(tokenizer),
        }
    }

    /// Similarity of two text spans, in [0,1]
    ///
    /// Both inputs are trimmed (and inner whitespace stripped when
    /// configured) before scoring. Two empty spans score 0.0 so that
    /// whitespace-only noise never matches anything. When the n-gram size
    /// exceeds a span's length, the score degrades to whole-span equality.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = self.normalize(a);
        let b = self.normalize(b);
        if a.is_empty() && b.is_empty() {
            return 0.0;
        }
        let units_a = self.units(&a);
        let units_b = self.units(&b);
        let n = self.ngram_size;
        if units_a.len() < n || units_b.len() < n {
            return if units_a == units_b { 1.0 } else { 0.0 };
        }
        let grams_a = ngrams(&units_a, n);
        let grams_b = ngrams(&units_b, n);
        jaccard(&grams_a, &grams_b)
    }

    fn normalize(&self, text: &str) -> String {
        let trimmed = text.trim();
        if self.remove_inner_whitespace {
            trimmed.chars().filter(|c| !c.is_whitespace()).collect()
        } else {
            trimmed.to_string()
        }
    }

    fn units(&self, text: &str) -> Vec<String> {
        match self.granularity {
            Granularity::Char => text.chars().map(|c| c.to_string()).collect(),
            Granularity::Word(tokenizer) => tokenizer.cut(text, false),
        }
    }
}

fn ngrams(units: &[String], n: usize) -> HashSet<String> {
    units.windows(n).map(|w| w.join("\u{1}")).collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::CharTokenizer;

    fn char_bigram() -> SimilarityScorer<'static> {
        SimilarityScorer::char_level(2, true)
    }

    #[test]
    fn identical_text_scores_one() {
        assert_eq!(char_bigram().score("今天天气很好。", "今天天气很好。"), 1.0);
    }

    #[test]
    fn disjoint_text_scores_zero() {
        assert_eq!(char_bigram().score("春眠不觉晓", "夜来风雨声"), 0.0);
    }

    #[test]
    fn both_empty_is_zero_not_one() {
        assert_eq!(char_bigram().score("", ""), 0.0);
        assert_eq!(char_bigram().score("   ", " \t "), 0.0);
    }

    #[test]
    fn single_edit_scores_between() {
        let score = char_bigram().score("他去了五伯家。", "他去了五百家。");
        assert!(score > 0.3 && score < 1.0, "score = {score}");
    }

    #[test]
    fn short_text_falls_back_to_equality() {
        // one char is shorter than a bigram
        assert_eq!(char_bigram().score("好", "好"), 1.0);
        assert_eq!(char_bigram().score("好", "坏"), 0.0);
    }

    #[test]
    fn inner_whitespace_is_ignored_when_configured() {
        assert_eq!(char_bigram().score("今天 天气", "今天天气"), 1.0);
        let keep = SimilarityScorer::char_level(2, false);
        assert!(keep.score("今天 天气", "今天天气") < 1.0);
    }

    #[test]
    fn word_level_uses_tokenizer_units() {
        let tokenizer = CharTokenizer;
        let scorer = SimilarityScorer::word_level(1, true, &tokenizer);
        // unigram overlap: {他,去,了,五,伯,家,。} vs {他,去,了,五,百,家,。}
        let score = scorer.score("他去了五伯家。", "他去了五百家。");
        assert!((score - 6.0 / 8.0).abs() < 1e-9, "score = {score}");
    }

    #[test]
    fn score_is_symmetric() {
        let s = char_bigram();
        assert_eq!(s.score("第一句。", "第二句。"), s.score("第二句。", "第一句。"));
    }
}
