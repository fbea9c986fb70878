//! Output formatting for grouped corpora
//!
//! Two encodings of the same grouping: a JSON object serialized whole, and
//! a row-per-record CSV layout where only the first row of a lemma carries
//! the key. Continuation rows start with a bare comma and stay on their own
//! physical line.

use crate::conversion::groups::GroupedCorpus;
use crate::conversion::ConversionResult;
use crate::corpus::CollocationRecord;
use crate::error::{ConversionError, ConversionErrorKind};
use std::collections::HashSet;
use std::io::{self, Write};

/// Serialize a grouped corpus as a compact JSON object.
///
/// Lemma keys appear in first-seen order and every group's entries keep
/// input order, so the same input always produces identical bytes.
pub fn format_json(corpus: &GroupedCorpus) -> ConversionResult<String> {
    serde_json::to_string(corpus).map_err(|e| {
        ConversionError::conversion_with_source(
            ConversionErrorKind::conversion_failed(format!(
                "JSON serialization failed: {}",
                e
            )),
            e.into(),
        )
    })
}

/// Format one CSV row for a record.
///
/// Values are written raw, with no quoting or escaping; a comma inside a
/// corpus field passes through into the row.
pub fn format_csv_row(record: &CollocationRecord, first_occurrence: bool) -> String {
    if first_occurrence {
        format!("{},{},{}\n", record.lemma, record.collocate, record.score)
    } else {
        format!(",{},{}\n", record.collocate, record.score)
    }
}

/// Sequential CSV writer tracking which lemmas have already been written.
///
/// The seen set lives for one writer, i.e. one run; re-running against the
/// same output file starts with an empty set and repeats the keys.
pub struct CsvRowWriter<W: Write> {
    writer: W,
    seen: HashSet<String>,
    rows_written: usize,
    bytes_written: u64,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seen: HashSet::new(),
            rows_written: 0,
            bytes_written: 0,
        }
    }

    /// Write the row for one record, with or without its lemma key
    pub fn write_record(&mut self, record: &CollocationRecord) -> io::Result<()> {
        let first_occurrence = !self.seen.contains(&record.lemma);
        let row = format_csv_row(record, first_occurrence);
        self.writer.write_all(row.as_bytes())?;

        if first_occurrence {
            self.seen.insert(record.lemma.clone());
        }
        self.rows_written += 1;
        self.bytes_written += row.len() as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Distinct lemmas written so far
    pub fn lemma_count(&self) -> usize {
        self.seen.len()
    }

    /// Consume the writer, returning the underlying output
    pub fn into_inner(self) -> W {
        self.writer
    }
}
