//! Configuration for alignment runs
//!
//! `AlignmentOptions` is constructed by the caller (commonly from
//! user-facing settings) and passed whole into each entry point. The core
//! performs no persistence and no defaulting beyond `Default`; out-of-range
//! values are rejected by `validate`, never clamped.

use crate::error::{AlignError, Result};

/// Default delimiters for clause splitting: Chinese clause separators plus
/// sentence-final punctuation used as sub-delimiters, with ASCII fallbacks.
pub const DEFAULT_CLAUSE_DELIMITERS: &[char] = &[
    '，', '、', '；', '。', '！', '？', ',', ';', '!', '?',
];

/// Options controlling sentence alignment and word-error collection
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentOptions {
    /// Forward search radius, in sentence indices
    pub window_size: usize,
    /// Minimum similarity in [0,1] to accept a sentence match
    pub similarity_threshold: f64,
    /// N-gram length used by the similarity scorer
    pub ngram_size: usize,
    /// Index bias added to the window when searching
    pub offset: usize,
    /// How many times the window may grow when nothing clears the threshold
    pub max_window_expansion: usize,
    /// Consecutive failed expansions before giving up on the current cursor
    pub consecutive_fail_threshold: usize,
    /// Strip all internal whitespace before scoring
    pub remove_inner_whitespace: bool,
    /// Minimum similarity a clause pair must strictly exceed
    pub clause_similarity_threshold: f64,
    /// Characters that split a sentence into clauses
    pub clause_delimiters: Vec<char>,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            window_size: 5,
            similarity_threshold: 0.6,
            ngram_size: 2,
            offset: 0,
            max_window_expansion: 3,
            consecutive_fail_threshold: 3,
            remove_inner_whitespace: true,
            clause_similarity_threshold: 0.4,
            clause_delimiters: DEFAULT_CLAUSE_DELIMITERS.to_vec(),
        }
    }
}

impl AlignmentOptions {
    /// Create a builder pre-filled with defaults
    pub fn builder() -> AlignmentOptionsBuilder {
        AlignmentOptionsBuilder::default()
    }

    /// Check every documented range constraint
    ///
    /// Called by the aligner and collector entry points before any work;
    /// a violation surfaces as a single [`AlignError::Config`].
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(AlignError::Config("window_size must be >= 1".into()));
        }
        if self.ngram_size == 0 {
            return Err(AlignError::Config("ngram_size must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(AlignError::Config(format!(
                "similarity_threshold must be within [0,1], got {}",
                self.similarity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.clause_similarity_threshold) {
            return Err(AlignError::Config(format!(
                "clause_similarity_threshold must be within [0,1], got {}",
                self.clause_similarity_threshold
            )));
        }
        if self.clause_delimiters.is_empty() {
            return Err(AlignError::Config("clause_delimiters must not be empty".into()));
        }
        Ok(())
    }

    /// Upper bound on how far a moved sentence may travel and still be
    /// reported as moveout/movein instead of delete+insert.
    pub fn move_search_bound(&self) -> usize {
        self.window_size * (1 + self.max_window_expansion)
    }
}

/// Fluent builder for [`AlignmentOptions`]
#[derive(Debug, Default)]
pub struct AlignmentOptionsBuilder {
    options: AlignmentOptions,
}

impl AlignmentOptionsBuilder {
    /// Set the forward search radius
    pub fn window_size(mut self, size: usize) -> Self {
        self.options.window_size = size;
        self
    }

    /// Set the minimum sentence similarity
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.options.similarity_threshold = threshold;
        self
    }

    /// Set the n-gram length
    pub fn ngram_size(mut self, size: usize) -> Self {
        self.options.ngram_size = size;
        self
    }

    /// Set the window search bias
    pub fn offset(mut self, offset: usize) -> Self {
        self.options.offset = offset;
        self
    }

    /// Set the maximum number of window expansions
    pub fn max_window_expansion(mut self, expansions: usize) -> Self {
        self.options.max_window_expansion = expansions;
        self
    }

    /// Set the consecutive-fail give-up threshold
    pub fn consecutive_fail_threshold(mut self, fails: usize) -> Self {
        self.options.consecutive_fail_threshold = fails;
        self
    }

    /// Strip internal whitespace before scoring
    pub fn remove_inner_whitespace(mut self, remove: bool) -> Self {
        self.options.remove_inner_whitespace = remove;
        self
    }

    /// Set the minimum clause-pair similarity
    pub fn clause_similarity_threshold(mut self, threshold: f64) -> Self {
        self.options.clause_similarity_threshold = threshold;
        self
    }

    /// Replace the clause delimiter set
    pub fn clause_delimiters(mut self, delimiters: impl Into<Vec<char>>) -> Self {
        self.options.clause_delimiters = delimiters.into();
        self
    }

    /// Validate and return the options
    pub fn build(self) -> Result<AlignmentOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
