//! Core conversion engine for grouping corpus records

use crate::conversion::config::ConversionConfig;
use crate::conversion::groups::GroupedCorpus;
use crate::conversion::ConversionResult;
use crate::corpus::{CollocationRecord, CorpusSource};
use crate::error::ConversionError;
use crate::formatter::{format_json, CsvRowWriter};
use std::io::Write;
use std::time::Instant;

/// Result of a JSON-mode conversion: the serialized mapping plus metadata.
///
/// The content is produced in one terminal step at the end of the grouping
/// pass; nothing is written to disk until the whole pass has succeeded.
#[derive(Debug, Clone)]
pub struct GroupedData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl GroupedData {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about a conversion pass
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub record_count: usize,
    pub lemma_count: usize,
    pub processing_time_ms: u64,
}

/// Summary produced by a validation-only pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSummary {
    pub line_count: usize,
    pub record_count: usize,
    pub lemma_count: usize,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Group corpus lines by lemma in a single linear pass.
    ///
    /// The first malformed line aborts the pass; records already grouped
    /// are discarded with it.
    pub fn group_lines(&self, lines: &[String]) -> ConversionResult<GroupedCorpus> {
        let mut corpus = GroupedCorpus::new();
        for (line_number, line) in self.data_lines(lines) {
            let record = CollocationRecord::parse(line, line_number)?;
            corpus.push(record);
        }
        Ok(corpus)
    }

    /// Convert a corpus source to the grouped JSON mapping.
    ///
    /// The complete mapping is serialized once, after the pass; a failure
    /// anywhere leaves no JSON output at all.
    pub fn convert(&self, source: &CorpusSource) -> ConversionResult<GroupedData> {
        let start_time = Instant::now();

        let content = source.read_content()?;
        let lines: Vec<String> = content.lines().map(str::to_owned).collect();

        let grouped = self.group_lines(&lines)?;
        let json = format_json(&grouped)?;

        let metadata = ConversionMetadata {
            input_size: content.len() as u64,
            output_size: json.len() as u64,
            record_count: grouped.entry_count(),
            lemma_count: grouped.lemma_count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(GroupedData::new(json, metadata))
    }

    /// Convert a corpus string to the grouped JSON mapping
    pub fn convert_string(&self, corpus: &str) -> ConversionResult<GroupedData> {
        self.convert(&CorpusSource::String(corpus.to_string()))
    }

    /// Convert a corpus source to grouped CSV rows, written incrementally.
    ///
    /// Each record is written as soon as it is parsed: the first occurrence
    /// of a lemma as `lemma,collocate,score`, later occurrences as
    /// continuation rows `,collocate,score`. A malformed line mid-pass
    /// aborts the run and leaves the rows already written in place.
    pub fn convert_csv_to<W: Write>(
        &self,
        source: &CorpusSource,
        writer: W,
    ) -> ConversionResult<ConversionMetadata> {
        let start_time = Instant::now();

        let content = source.read_content()?;
        let lines: Vec<String> = content.lines().map(str::to_owned).collect();

        let mut rows = CsvRowWriter::new(writer);
        for (line_number, line) in self.data_lines(&lines) {
            let record = CollocationRecord::parse(line, line_number)?;
            rows.write_record(&record)
                .map_err(|e| ConversionError::io(e, None))?;
        }
        rows.flush().map_err(|e| ConversionError::io(e, None))?;

        Ok(ConversionMetadata {
            input_size: content.len() as u64,
            output_size: rows.bytes_written(),
            record_count: rows.rows_written(),
            lemma_count: rows.lemma_count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    /// Parse every record without producing output
    pub fn validate(&self, source: &CorpusSource) -> ConversionResult<CorpusSummary> {
        let lines = source.read_lines()?;
        let grouped = self.group_lines(&lines)?;

        Ok(CorpusSummary {
            line_count: lines.len(),
            record_count: grouped.entry_count(),
            lemma_count: grouped.lemma_count(),
        })
    }

    /// Lines that take part in the pass, paired with their 1-based source
    /// line numbers
    fn data_lines<'a>(
        &self,
        lines: &'a [String],
    ) -> impl Iterator<Item = (usize, &'a str)> {
        let skip = if self.config.skip_header { 1 } else { 0 };
        lines
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}

/// Convert a corpus source with the given configuration
pub fn convert_corpus(
    source: &CorpusSource,
    config: &ConversionConfig,
) -> ConversionResult<GroupedData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(source)
}

/// Write a corpus source as grouped CSV rows with the given configuration
pub fn write_corpus_csv<W: Write>(
    source: &CorpusSource,
    writer: W,
    config: &ConversionConfig,
) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_csv_to(source, writer)
}
