//! Corpus to grouped-output conversion module
//!
//! This module contains the core grouping logic, configuration, and
//! statistics.

pub mod config;
pub mod engine;
pub mod groups;
pub mod stats;

pub use config::{ConversionConfig, CsvWriteMode, OutputFormat};

pub use engine::{convert_corpus, write_corpus_csv, ConversionEngine, GroupedData};

pub use groups::{CollocationEntry, GroupedCorpus};

use crate::error::ConversionError;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for operations that return grouped JSON data
pub type GroupedConversionResult = ConversionResult<GroupedData>;
