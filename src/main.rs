use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use colloconv::cli::{handle_error, Args, CliConfig, CliResult, CliUtils};
use colloconv::conversion::stats::ConversionStatistics;
use colloconv::conversion::{ConversionEngine, CsvWriteMode, OutputFormat};
use colloconv::conversion::engine::ConversionMetadata;
use colloconv::error::ConversionError;

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        handle_error(&error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> CliResult<()> {
    let config = CliConfig::from_args(args)?;

    if config.args.stdin && config.args.input.is_some() {
        CliUtils::show_warning(
            "--stdin given; ignoring the input path argument",
            config.is_quiet(),
        );
    }

    if config.is_validate_only() {
        handle_validation(&config)
    } else {
        handle_conversion(&config)
    }
}

fn handle_validation(config: &CliConfig) -> CliResult<()> {
    let source = config.input_source();
    if config.is_verbose() {
        eprintln!("Validating {}", source.description());
    }

    let engine = ConversionEngine::new(config.conversion_config.clone());
    let summary = engine.validate(&source)?;

    CliUtils::show_success(
        &format!(
            "Valid corpus: {} records, {} lemmas",
            summary.record_count, summary.lemma_count
        ),
        config.is_quiet(),
    );
    Ok(())
}

fn handle_conversion(config: &CliConfig) -> CliResult<()> {
    let source = config.input_source();
    let output_path = config.output_path();

    if config.is_verbose() {
        eprintln!(
            "Converting {} to {}",
            source.description(),
            output_path.display()
        );
        if let Some(size) = source.estimated_size() {
            eprintln!("Corpus size: {}", CliUtils::format_file_size(size));
        }
    }

    let engine = ConversionEngine::new(config.conversion_config.clone());

    let metadata = match config.conversion_config.format {
        OutputFormat::Json => {
            // Single terminal write: nothing touches the output file until
            // the whole pass has succeeded
            let data = engine.convert(&source)?;
            ensure_parent_dir(&output_path)?;
            fs::write(&output_path, &data.content)
                .map_err(|e| ConversionError::io(e, Some(output_path.clone())))?;
            data.metadata
        }
        OutputFormat::Csv => {
            // Read the corpus before touching the output file, so a missing
            // input leaves no empty CSV behind
            let content = source.read_content()?;
            let source = colloconv::corpus::CorpusSource::String(content);

            ensure_parent_dir(&output_path)?;
            let mut options = OpenOptions::new();
            options.create(true).write(true);
            match config.conversion_config.csv_mode {
                CsvWriteMode::Append => options.append(true),
                CsvWriteMode::Truncate => options.truncate(true),
            };
            let file = options
                .open(&output_path)
                .map_err(|e| ConversionError::io(e, Some(output_path.clone())))?;

            // Rows land on disk as they are parsed; a mid-pass failure
            // leaves the rows already written
            engine.convert_csv_to(&source, BufWriter::new(file))?
        }
    };

    CliUtils::show_success(
        &format!("Converted to: {}", output_path.display()),
        config.is_quiet(),
    );

    if config.want_stats() {
        output_statistics(&metadata, config.is_quiet());
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| ConversionError::io(e, Some(parent.to_path_buf())))?;
        }
    }
    Ok(())
}

fn output_statistics(metadata: &ConversionMetadata, quiet: bool) {
    if quiet {
        return;
    }

    let stats = ConversionStatistics::for_conversion(metadata);

    println!("\nConversion Statistics:");
    println!("Records: {}", stats.record_count);
    println!("Lemmas: {}", stats.lemma_count);
    println!(
        "Input size: {}",
        CliUtils::format_file_size(stats.input_size_bytes)
    );
    println!(
        "Output size: {}",
        CliUtils::format_file_size(stats.output_size_bytes)
    );
    println!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(stats.processing_time_ms))
    );
}
