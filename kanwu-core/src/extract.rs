//! Atomic word replacement extraction
//!
//! Diffs a clause pair at token granularity (so multi-char words are never
//! fragmented into misleading character edits) and reports a replacement
//! only for an exact 1:1 substitution: exactly one token removed and one
//! added. Everything messier stays visible only at sentence/clause level.

use crate::tokenizer::{TokenizeMode, Tokenizer};

/// An atomic single-token substitution anchored to its original clause
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordReplacement {
    /// The token as written in the original
    pub wrong: String,
    /// The token the revision put in its place
    pub correct: String,
    /// Original-side clause the replacement was found in, trimmed
    pub clause: String,
}

/// Cut flavor used when tokenizing clauses for extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtractMode {
    /// General-purpose cut
    #[default]
    Default,
    /// Search-oriented cut
    Search,
}

/// Extract the single-token substitution between two clauses, if any
///
/// Tokenizer failure or empty tokenization yields `None` rather than an
/// error; extraction is best-effort.
pub fn extract_word_replacement(
    clause_a: &str,
    clause_b: &str,
    tokenizer: &dyn Tokenizer,
    mode: ExtractMode,
) -> Option<WordReplacement> {
    let tokens_a = cut_clause(clause_a, tokenizer, mode);
    let tokens_b = cut_clause(clause_b, tokenizer, mode);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return None;
    }
    let (removed, added) = token_diff(&tokens_a, &tokens_b);
    match (removed.as_slice(), added.as_slice()) {
        ([wrong], [correct]) if !wrong.trim().is_empty() && !correct.trim().is_empty() => {
            Some(WordReplacement {
                wrong: wrong.clone(),
                correct: correct.clone(),
                clause: clause_a.trim().to_string(),
            })
        }
        _ => None,
    }
}

fn cut_clause(clause: &str, tokenizer: &dyn Tokenizer, mode: ExtractMode) -> Vec<String> {
    let tokens = match mode {
        ExtractMode::Default => tokenizer.cut(clause, true),
        ExtractMode::Search => tokenizer
            .tokenize(clause, TokenizeMode::Search, true)
            .into_iter()
            .map(|t| t.word)
            .collect(),
    };
    tokens
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .collect()
}

/// Removed and added tokens of an LCS-based array diff
///
/// Clauses are short, so the quadratic table is fine.
fn token_diff(a: &[String], b: &[String]) -> (Vec<String>, Vec<String>) {
    let n = a.len();
    let m = b.len();
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }
    let mut removed = Vec::new();
    let mut added = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            removed.push(a[i].clone());
            i += 1;
        } else {
            added.push(b[j].clone());
            j += 1;
        }
    }
    removed.extend(a[i..].iter().cloned());
    added.extend(b[j..].iter().cloned());
    (removed, added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{CharTokenizer, Token};

    /// Greedy longest-match dictionary tokenizer for tests
    struct DictTokenizer {
        words: Vec<&'static str>,
    }

    impl DictTokenizer {
        fn new(words: &[&'static str]) -> Self {
            let mut words = words.to_vec();
            words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
            Self { words }
        }
    }

    impl Tokenizer for DictTokenizer {
        fn cut(&self, text: &str, _hmm: bool) -> Vec<String> {
            let chars: Vec<char> = text.chars().collect();
            let mut out = Vec::new();
            let mut pos = 0;
            while pos < chars.len() {
                let rest: String = chars[pos..].iter().collect();
                if let Some(word) = self.words.iter().find(|w| rest.starts_with(**w)) {
                    out.push(word.to_string());
                    pos += word.chars().count();
                } else {
                    out.push(chars[pos].to_string());
                    pos += 1;
                }
            }
            out
        }

        fn tokenize(&self, text: &str, _mode: TokenizeMode, hmm: bool) -> Vec<Token> {
            let mut start = 0;
            self.cut(text, hmm)
                .into_iter()
                .map(|word| {
                    let len = word.chars().count();
                    let token = Token {
                        word,
                        start,
                        end: start + len,
                    };
                    start += len;
                    token
                })
                .collect()
        }
    }

    #[test]
    fn single_substitution_is_extracted() {
        let tokenizer = DictTokenizer::new(&["五伯", "五百"]);
        let replacement = extract_word_replacement(
            "他的五伯",
            "他的五百",
            &tokenizer,
            ExtractMode::Default,
        )
        .unwrap();
        assert_eq!(replacement.wrong, "五伯");
        assert_eq!(replacement.correct, "五百");
        assert_eq!(replacement.clause, "他的五伯");
    }

    #[test]
    fn two_unrelated_edits_return_none() {
        let tokenizer = DictTokenizer::new(&[]);
        // both 伯→百 and 天→地 change: two removed, two added
        assert!(extract_word_replacement(
            "五伯今天",
            "五百今地",
            &tokenizer,
            ExtractMode::Default
        )
        .is_none());
    }

    #[test]
    fn identical_clauses_return_none() {
        let tokenizer = DictTokenizer::new(&[]);
        assert!(extract_word_replacement("一样的", "一样的", &tokenizer, ExtractMode::Default)
            .is_none());
    }

    #[test]
    fn pure_insertion_returns_none() {
        let tokenizer = DictTokenizer::new(&[]);
        // one added token, zero removed
        assert!(
            extract_word_replacement("他去了", "他也去了", &tokenizer, ExtractMode::Default)
                .is_none()
        );
    }

    #[test]
    fn empty_tokenization_returns_none() {
        let tokenizer = CharTokenizer;
        assert!(
            extract_word_replacement("", "他去了", &tokenizer, ExtractMode::Default).is_none()
        );
        assert!(
            extract_word_replacement("   ", "   ", &tokenizer, ExtractMode::Default).is_none()
        );
    }

    #[test]
    fn clause_is_trimmed_in_result() {
        let tokenizer = DictTokenizer::new(&["五伯", "五百"]);
        let replacement = extract_word_replacement(
            "  他的五伯  ",
            "他的五百",
            &tokenizer,
            ExtractMode::Default,
        )
        .unwrap();
        assert_eq!(replacement.clause, "他的五伯");
    }

    #[test]
    fn search_mode_uses_span_tokenizer() {
        let tokenizer = DictTokenizer::new(&["五伯", "五百"]);
        let replacement =
            extract_word_replacement("他的五伯", "他的五百", &tokenizer, ExtractMode::Search)
                .unwrap();
        assert_eq!(replacement.wrong, "五伯");
        assert_eq!(replacement.correct, "五百");
    }

    #[test]
    fn multi_char_tokens_are_not_fragmented() {
        // without dictionary entries the diff sees per-char edits 伯→百,
        // with them it sees a single whole-word substitution
        let with_dict = DictTokenizer::new(&["五伯", "五百"]);
        let replacement = extract_word_replacement(
            "他去了五伯家",
            "他去了五百家",
            &with_dict,
            ExtractMode::Default,
        )
        .unwrap();
        assert_eq!(replacement.wrong, "五伯");
        assert_eq!(replacement.correct, "五百");
    }
}
