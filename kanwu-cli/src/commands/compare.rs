//! Compare command implementation

use crate::error::CliError;
use crate::input::read_sentences;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use kanwu_core::{align, collect_word_errors, AlignmentOptions, AlignmentStats, ExtractMode};
use std::fs;
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original document (one sentence per line)
    #[arg(short = 'a', long, value_name = "FILE")]
    pub original: PathBuf,

    /// Revised document (one sentence per line)
    #[arg(short = 'b', long, value_name = "FILE")]
    pub revised: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Forward search radius in sentence indices
    #[arg(long, default_value_t = 5)]
    pub window_size: usize,

    /// Minimum similarity in [0,1] to accept a sentence match
    #[arg(long, default_value_t = 0.6)]
    pub similarity_threshold: f64,

    /// N-gram length for the similarity scorer
    #[arg(long, default_value_t = 2)]
    pub ngram_size: usize,

    /// Index bias added to the search window
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// How many times the search window may grow
    #[arg(long, default_value_t = 3)]
    pub max_window_expansion: usize,

    /// Consecutive failed expansions before giving up
    #[arg(long, default_value_t = 3)]
    pub consecutive_fail_threshold: usize,

    /// Keep inner whitespace when scoring
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Minimum clause-pair similarity (strictly exceeded)
    #[arg(long, default_value_t = 0.4)]
    pub clause_similarity_threshold: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!(
            "Comparing {} against {}",
            self.original.display(),
            self.revised.display()
        );

        let options = self.alignment_options()?;
        log::debug!("Options: {options:?}");

        let original = read_sentences(&self.original)?;
        let revised = read_sentences(&self.revised)?;
        log::info!(
            "Read {} original and {} revised sentences",
            original.len(),
            revised.len()
        );

        let items = align(&original, &revised, &options)
            .map_err(|e| CliError::AlignmentError(e.to_string()))?;
        let stats = AlignmentStats::from_items(&items);
        let errors = collect_word_errors(&items, &options, None, ExtractMode::Default)
            .map_err(|e| CliError::AlignmentError(e.to_string()))?;
        log::info!(
            "{} alignment items, {} word errors",
            stats.total,
            errors.len()
        );

        let rendered = match self.format {
            OutputFormat::Text => output::text::render(&items, &stats, &errors),
            OutputFormat::Json => output::json::render(&items, &stats, &errors)?,
            OutputFormat::Csv => output::csv::render(&errors),
        };
        self.write_output(&rendered)
    }

    fn alignment_options(&self) -> Result<AlignmentOptions> {
        AlignmentOptions::builder()
            .window_size(self.window_size)
            .similarity_threshold(self.similarity_threshold)
            .ngram_size(self.ngram_size)
            .offset(self.offset)
            .max_window_expansion(self.max_window_expansion)
            .consecutive_fail_threshold(self.consecutive_fail_threshold)
            .remove_inner_whitespace(!self.keep_whitespace)
            .clause_similarity_threshold(self.clause_similarity_threshold)
            .build()
            .map_err(|e| {
                CliError::ConfigError(match e {
                    kanwu_core::AlignError::Config(msg) => msg,
                    other => other.to_string(),
                })
                .into()
            })
    }

    fn write_output(&self, rendered: &str) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display())),
            None => {
                print!("{rendered}");
                Ok(())
            }
        }
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
