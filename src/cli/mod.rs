//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{ConversionConfig, CsvWriteMode, OutputFormat};
use crate::corpus::CorpusSource;
use crate::error::{ConversionError, ConversionErrorKind};

/// Corpus file read when no input path is given
pub const DEFAULT_INPUT: &str = "collocations.txt";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "colloconv")]
#[command(about = "Regroup collocation corpus TSV data into grouped JSON or CSV")]
#[command(version)]
pub struct Args {
    /// Input corpus file (default: collocations.txt)
    #[arg()]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Output file path (default: data.json or data.csv per format)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read the corpus from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Skip the first corpus line instead of parsing it as a record
    #[arg(long)]
    pub skip_header: bool,

    /// Truncate an existing CSV output file instead of appending to it
    #[arg(long)]
    pub truncate: bool,

    /// Only parse the corpus, don't write any output
    #[arg(long)]
    pub validate_only: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[value(name = "json")]
    Json,
    #[value(name = "csv")]
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> Result<Self, ConversionError> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> Result<ConversionConfig, ConversionError> {
        let csv_mode = if args.truncate {
            CsvWriteMode::Truncate
        } else {
            CsvWriteMode::Append
        };

        let config = ConversionConfig::new()
            .with_format(args.format.into())
            .with_skip_header(args.skip_header)
            .with_csv_mode(csv_mode);

        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// The corpus source the run reads from
    pub fn input_source(&self) -> CorpusSource {
        if self.args.stdin {
            CorpusSource::Stdin
        } else {
            let path = self
                .args
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            CorpusSource::File(path)
        }
    }

    /// The output path the run writes to
    pub fn output_path(&self) -> PathBuf {
        self.args.output.clone().unwrap_or_else(|| {
            PathBuf::from(self.conversion_config.format.default_output_path())
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }
}

/// Utilities for CLI output
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

        if bytes < 1024 {
            return format!("{} B", bytes);
        }

        let mut size = bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        format!("{:.1} {}", size, UNITS[unit])
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConversionError::RecordError(_) => {
            eprintln!("\nTip: Use --validate-only to check the corpus before converting");
        }
        ConversionError::Conversion {
            kind: ConversionErrorKind::Io { path: Some(_), .. },
            ..
        } => {
            eprintln!(
                "\nTip: Pass the corpus path as the first argument (default: {})",
                DEFAULT_INPUT
            );
        }
        _ => {}
    }

    eprintln!("\nTry 'colloconv --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, ConversionError>;
