//! External tokenizer capability
//!
//! Tokenization is delegated to the embedding application (typically a
//! dictionary segmenter for Chinese). The core only requires `cut`; the
//! span-carrying `tokenize` form exists for callers that need offsets.
//! When no tokenizer is supplied, word-granularity features degrade to the
//! built-in [`CharTokenizer`].

/// Cut mode for span-carrying tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenizeMode {
    /// General-purpose cut
    Default,
    /// Search-oriented cut that also emits sub-words
    Search,
}

/// A token with its char-offset span
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Token text
    pub word: String,
    /// Start offset in chars
    pub start: usize,
    /// End offset in chars (exclusive)
    pub end: usize,
}

/// Tokenizer capability consumed by the alignment core
pub trait Tokenizer {
    /// Segment `text` into words; `hmm` enables the tokenizer's
    /// new-word discovery model where supported.
    fn cut(&self, text: &str, hmm: bool) -> Vec<String>;

    /// Segment `text` into span-carrying tokens
    fn tokenize(&self, text: &str, mode: TokenizeMode, hmm: bool) -> Vec<Token>;
}

/// Fallback tokenizer used when the caller supplies none
///
/// Emits each non-ASCII char (CJK and punctuation alike) as its own token
/// and keeps contiguous ASCII alphanumeric runs whole, so Latin words and
/// numbers embedded in CJK text are not fragmented.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

impl CharTokenizer {
    fn segments(text: &str) -> Vec<(String, usize, usize)> {
        let mut out: Vec<(String, usize, usize)> = Vec::new();
        let mut run = String::new();
        let mut run_start = 0;
        for (pos, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                if !run.is_empty() {
                    out.push((std::mem::take(&mut run), run_start, pos));
                }
                continue;
            }
            if ch.is_ascii_alphanumeric() {
                if run.is_empty() {
                    run_start = pos;
                }
                run.push(ch);
                continue;
            }
            if !run.is_empty() {
                out.push((std::mem::take(&mut run), run_start, pos));
            }
            out.push((ch.to_string(), pos, pos + 1));
        }
        if !run.is_empty() {
            let end = text.chars().count();
            out.push((run, run_start, end));
        }
        out
    }
}

impl Tokenizer for CharTokenizer {
    fn cut(&self, text: &str, _hmm: bool) -> Vec<String> {
        Self::segments(text).into_iter().map(|(word, _, _)| word).collect()
    }

    fn tokenize(&self, text: &str, _mode: TokenizeMode, _hmm: bool) -> Vec<Token> {
        Self::segments(text)
            .into_iter()
            .map(|(word, start, end)| Token { word, start, end })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_chars_are_individual_tokens() {
        let tokens = CharTokenizer.cut("今天天气", false);
        assert_eq!(tokens, vec!["今", "天", "天", "气"]);
    }

    #[test]
    fn ascii_runs_stay_whole() {
        let tokens = CharTokenizer.cut("版本v2发布", false);
        assert_eq!(tokens, vec!["版", "本", "v2", "发", "布"]);
    }

    #[test]
    fn whitespace_is_dropped() {
        let tokens = CharTokenizer.cut("  你 好  world ", false);
        assert_eq!(tokens, vec!["你", "好", "world"]);
    }

    #[test]
    fn tokenize_carries_char_spans() {
        let tokens = CharTokenizer.tokenize("你好ab", TokenizeMode::Default, false);
        assert_eq!(
            tokens,
            vec![
                Token { word: "你".into(), start: 0, end: 1 },
                Token { word: "好".into(), start: 1, end: 2 },
                Token { word: "ab".into(), start: 2, end: 4 },
            ]
        );
    }
}
