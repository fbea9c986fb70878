//! Configuration options for corpus conversion

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Grouped JSON object, written once at end of pass
    #[default]
    Json,
    /// Grouped CSV rows, written incrementally
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Invalid format '{}'. Use 'json' or 'csv'", other)),
        }
    }

    /// Default output file name for this format
    pub fn default_output_path(&self) -> &'static str {
        match self {
            OutputFormat::Json => "data.json",
            OutputFormat::Csv => "data.csv",
        }
    }
}

/// How an existing CSV output file is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvWriteMode {
    /// Append to the existing file; repeated runs accumulate rows
    #[default]
    Append,
    /// Truncate the file before writing
    Truncate,
}

/// Conversion configuration options
#[derive(Debug, Clone, Default)]
pub struct ConversionConfig {
    /// Output format
    pub format: OutputFormat,
    /// Skip the first corpus line. Off by default: the corpus header, if
    /// any, is parsed as a record like every other line.
    pub skip_header: bool,
    /// CSV output file handling; appending accumulates rows across runs
    pub csv_mode: CsvWriteMode,
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Skip the first corpus line before grouping
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Set CSV output file handling
    pub fn with_csv_mode(mut self, mode: CsvWriteMode) -> Self {
        self.csv_mode = mode;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.format == OutputFormat::Json && self.csv_mode == CsvWriteMode::Truncate {
            return Err("Truncate mode only applies to CSV output".to_string());
        }
        Ok(())
    }
}
