//! Error types and handling infrastructure for corpus conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Conversion failed: {message}")]
    ConversionFailed { message: String },
}

impl ConversionErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn conversion_failed(message: String) -> Self {
        Self::ConversionFailed { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    RecordError(#[from] RecordError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn record(line_number: usize, field_count: usize) -> Self {
        Self::RecordError(RecordError::new(line_number, field_count))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Conversion {
            kind: ConversionErrorKind::Io {
                message: err.to_string(),
                path,
            },
            source: Some(err.into()),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::RecordError(err) => {
                format!("Malformed corpus record: {}", err)
            }
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Io {
                    message,
                    path: Some(path),
                } => {
                    format!("IO error for {}: {}", path.display(), message)
                }
                ConversionErrorKind::Io { message, path: None } => {
                    format!("IO error: {}", message)
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// Malformed-record errors raised while splitting input lines
#[derive(Debug, Clone)]
pub struct RecordError {
    pub line_number: usize,
    pub field_count: usize,
    pub line_preview: Option<String>,
}

impl RecordError {
    pub fn new(line_number: usize, field_count: usize) -> Self {
        Self {
            line_number,
            field_count,
            line_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.line_preview = Some(preview);
        self
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} has {} tab-separated field{} (at least {} required)",
            self.line_number,
            self.field_count,
            if self.field_count == 1 { "" } else { "s" },
            crate::corpus::record::MIN_FIELDS,
        )?;
        if let Some(preview) = &self.line_preview {
            write!(f, ": {:?}", preview)?;
        }
        Ok(())
    }
}

impl std::error::Error for RecordError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for record parsing operations
pub type RecordResult<T> = Result<T, RecordError>;
