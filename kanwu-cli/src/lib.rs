//! Kanwu CLI library
//!
//! Command-line front end for the kanwu alignment core: reads an original
//! and a revised document, aligns them sentence by sentence, and renders
//! the resulting errata table.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
