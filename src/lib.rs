//! Collocation Corpus Converter
//!
//! A Rust CLI tool and library for regrouping tab-separated collocation
//! corpus data into a grouped JSON mapping or a grouped CSV layout.

pub mod cli;
pub mod conversion;
pub mod corpus;
pub mod error;
pub mod formatter;

// Re-export commonly used types
pub use conversion::{
    convert_corpus, ConversionConfig, ConversionEngine, ConversionResult, CsvWriteMode,
    GroupedCorpus, GroupedData, OutputFormat,
};
pub use corpus::{CollocationRecord, CorpusSource};
pub use error::{ConversionError, ConversionErrorKind, RecordError};
pub use formatter::CsvRowWriter;

/// Group a corpus string and serialize it as JSON with default configuration
pub fn convert_corpus_to_json(corpus: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_corpus_to_json_with_config(corpus, &config)
}

/// Group a corpus string and serialize it as JSON with custom configuration
pub fn convert_corpus_to_json_with_config(
    corpus: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let engine = ConversionEngine::new(config.clone());
    let result = engine.convert_string(corpus)?;
    Ok(result.content)
}

/// Group a corpus string and render it as CSV rows with default configuration
pub fn convert_corpus_to_csv(corpus: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::new().with_format(OutputFormat::Csv);
    let engine = ConversionEngine::new(config);
    let source = CorpusSource::String(corpus.to_string());
    let mut out = Vec::new();
    engine.convert_csv_to(&source, &mut out)?;
    String::from_utf8(out).map_err(|e| ConversionError::other(e.into()))
}
