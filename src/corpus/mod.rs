//! Corpus input sources and line reading

pub mod record;

pub use record::CollocationRecord;

use crate::error::{ConversionError, ConversionResult};
use std::io::Read;
use std::path::PathBuf;

/// Source a corpus is read from
#[derive(Debug, Clone)]
pub enum CorpusSource {
    /// Raw corpus text held in memory
    String(String),
    /// A corpus file on disk
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl CorpusSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CorpusSource::String(_) => "string input".to_string(),
            CorpusSource::File(path) => format!("file: {}", path.display()),
            CorpusSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            CorpusSource::String(_) => true,
            CorpusSource::File(path) => path.exists() && path.is_file(),
            CorpusSource::Stdin => true,
        }
    }

    /// Get the size of the source in bytes (if known without reading)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CorpusSource::String(s) => Some(s.len() as u64),
            CorpusSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            CorpusSource::Stdin => None,
        }
    }

    /// Read the complete corpus content as a string.
    ///
    /// A missing or unreadable file fails here, before any output is
    /// touched.
    pub fn read_content(&self) -> ConversionResult<String> {
        match self {
            CorpusSource::String(content) => Ok(content.clone()),
            CorpusSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| ConversionError::io(e, Some(path.clone()))),
            CorpusSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| ConversionError::io(e, None))?;
                Ok(buffer)
            }
        }
    }

    /// Read the whole corpus into memory as a sequence of lines.
    ///
    /// The full file is materialized before any record is processed; there
    /// is no streaming.
    pub fn read_lines(&self) -> ConversionResult<Vec<String>> {
        let content = self.read_content()?;
        Ok(content.lines().map(str::to_owned).collect())
    }
}

/// Metadata about a corpus that was read
#[derive(Debug, Clone)]
pub struct CorpusMetadata {
    pub source_description: String,
    pub size_bytes: u64,
    pub line_count: usize,
}

impl CorpusMetadata {
    /// Capture metadata for corpus content read from a source
    pub fn from_content(source: &CorpusSource, content: &str) -> Self {
        Self {
            source_description: source.description(),
            size_bytes: content.len() as u64,
            line_count: content.lines().count(),
        }
    }
}
