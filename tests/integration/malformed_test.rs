//! Integration tests for malformed-corpus failure behavior

use assert_matches::assert_matches;
use colloconv::conversion::{ConversionConfig, ConversionEngine};
use colloconv::corpus::CorpusSource;
use colloconv::error::ConversionError;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use tempfile::tempdir;

fn engine() -> ConversionEngine {
    ConversionEngine::new(ConversionConfig::default())
}

#[test]
fn test_six_field_line_is_accepted() {
    let corpus = "1\tgo\tv\trun\tv\t4.52\n";
    let result = engine().convert_string(corpus).unwrap();
    assert_eq!(result.metadata.record_count, 1);
}

#[test]
fn test_five_field_line_aborts_the_run() {
    let corpus = "1\tgo\tv\trun\tv\n";
    let err = engine().convert_string(corpus).unwrap_err();
    assert_matches!(
        err,
        ConversionError::RecordError(ref e) if e.line_number == 1 && e.field_count == 5
    );
}

#[test]
fn test_malformed_line_reports_its_position() {
    let corpus = "1\tgo\tv\trun\tv\t4.52\t120\t5%\n\
                  2\tgo\tv\tfast\ta\t3.10\t80\t3%\n\
                  oops\n";
    let err = engine().convert_string(corpus).unwrap_err();
    assert_matches!(
        err,
        ConversionError::RecordError(ref e) if e.line_number == 3 && e.field_count == 1
    );
}

#[test]
fn test_no_skip_and_continue_after_failure() {
    // A malformed line in the middle poisons the whole pass even though
    // later lines are well-formed
    let corpus = "1\tgo\tv\trun\tv\t4.52\t120\t5%\n\
                  short\tline\n\
                  3\tstop\tv\tsudden\ta\t2.00\t40\t2%\n";
    assert!(engine().convert_string(corpus).is_err());
}

#[test]
fn test_json_mode_leaves_no_partial_file() {
    let tmp = tempdir().unwrap();
    let corpus_path = tmp.path().join("collocations.txt");
    let output_path = tmp.path().join("data.json");

    let mut file = fs::File::create(&corpus_path).unwrap();
    write!(file, "1\tgo\tv\trun\tv\t4.52\t120\t5%\nbroken\n").unwrap();

    // The write is a single terminal operation; the failing pass never
    // reaches it
    let result = engine().convert(&CorpusSource::File(corpus_path));
    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_csv_mode_leaves_rows_written_before_failure() {
    let tmp = tempdir().unwrap();
    let corpus_path = tmp.path().join("collocations.txt");
    let output_path = tmp.path().join("data.csv");

    let mut file = fs::File::create(&corpus_path).unwrap();
    write!(file, "1\tgo\tv\trun\tv\t4.52\t120\t5%\nbroken\n").unwrap();

    let out = OpenOptions::new()
        .create(true)
        .write(true)
        .append(true)
        .open(&output_path)
        .unwrap();

    let result = engine().convert_csv_to(
        &CorpusSource::File(corpus_path),
        BufWriter::new(out),
    );
    assert!(result.is_err());

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "go,run,4.52\n");
}

#[test]
fn test_missing_input_is_an_io_error() {
    let tmp = tempdir().unwrap();
    let err = engine()
        .convert(&CorpusSource::File(tmp.path().join("absent.txt")))
        .unwrap_err();
    assert_matches!(err, ConversionError::Conversion { .. });
    assert!(err.user_message().contains("absent.txt"));
}
