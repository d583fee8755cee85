//! Sentence/clause alignment and word-error extraction
//!
//! Given an original and a revised sentence sequence (pre- and
//! post-proofreading), this crate computes a structured alignment
//! classifying every sentence as matched, deleted, inserted, or moved,
//! then descends into matched pairs at clause granularity and extracts
//! atomic single-token replacements (wrong → correct) anchored to the
//! clause they occur in — the raw material of an errata table (勘误表).
//!
//! The core is a pure function of two input sequences plus configuration:
//! no I/O, no network, no state kept between invocations. Tokenization is
//! delegated to the caller through the [`Tokenizer`] trait, with a
//! character-level fallback shipped in-crate.
//!
//! # Example
//!
//! ```
//! use kanwu_core::{
//!     align, collect_word_errors, AlignmentOptions, ExtractMode, SentenceSequence,
//! };
//!
//! let original = SentenceSequence::from_texts(["今天天气很好。", "他去了五伯家。"]);
//! let revised = SentenceSequence::from_texts(["今天天气很好。", "他去了五百家。"]);
//! let options = AlignmentOptions::builder()
//!     .similarity_threshold(0.4)
//!     .build()
//!     .unwrap();
//!
//! let items = align(&original, &revised, &options).unwrap();
//! let errors = collect_word_errors(&items, &options, None, ExtractMode::Default).unwrap();
//! assert_eq!(errors[0].wrong, "伯");
//! assert_eq!(errors[0].correct, "百");
//! ```

#![warn(missing_docs)]

pub mod aligner;
pub mod clause;
pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod report;
pub mod sequence;
pub mod similarity;
pub mod stats;
pub mod tokenizer;

pub use aligner::{align, align_with_cancel, AlignmentItem, AlignmentKind, CancelToken, IndexList};
pub use clause::{align_clauses, split_clauses, ClausePair};
pub use collector::{collect_word_errors, collect_word_errors_with_cancel};
pub use config::{AlignmentOptions, AlignmentOptionsBuilder, DEFAULT_CLAUSE_DELIMITERS};
pub use error::{AlignError, Result};
pub use extract::{extract_word_replacement, ExtractMode, WordReplacement};
pub use report::replacements_to_csv;
pub use sequence::{Sentence, SentenceSequence};
pub use similarity::{Granularity, SimilarityScorer};
pub use stats::AlignmentStats;
pub use tokenizer::{CharTokenizer, Token, TokenizeMode, Tokenizer};
