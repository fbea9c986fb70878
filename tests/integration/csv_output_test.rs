//! Integration tests for the grouped CSV output mode

use colloconv::conversion::{write_corpus_csv, ConversionConfig, ConversionEngine};
use colloconv::corpus::CorpusSource;
use colloconv::convert_corpus_to_csv;
use pretty_assertions::assert_eq;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::tempdir;

const SAMPLE: &str = "1\tgo\tv\trun\tv\t4.52\t120\t5%\n\
                      2\tgo\tv\tfast\ta\t3.10\t80\t3%\n\
                      3\tstop\tv\tsudden\ta\t2.00\t40\t2%\n";

fn append_run(corpus_path: &Path, output_path: &Path) {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(true)
        .open(output_path)
        .unwrap();
    write_corpus_csv(
        &CorpusSource::File(corpus_path.to_path_buf()),
        BufWriter::new(file),
        &ConversionConfig::default(),
    )
    .unwrap();
}

#[test]
fn test_sample_corpus_rows() {
    let csv = convert_corpus_to_csv(SAMPLE).unwrap();
    assert_eq!(csv, "go,run,4.52\n,fast,3.10\nstop,sudden,2.00\n");
}

#[test]
fn test_only_first_occurrence_carries_the_lemma() {
    let csv = convert_corpus_to_csv(SAMPLE).unwrap();
    let keyed: Vec<&str> = csv
        .lines()
        .filter(|line| !line.starts_with(','))
        .collect();
    assert_eq!(keyed, vec!["go,run,4.52", "stop,sudden,2.00"]);
}

#[test]
fn test_fresh_file_gets_one_line_per_record() {
    let tmp = tempdir().unwrap();
    let corpus_path = tmp.path().join("collocations.txt");
    let output_path = tmp.path().join("data.csv");

    let mut file = fs::File::create(&corpus_path).unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    append_run(&corpus_path, &output_path);

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_second_run_appends_duplicate_rows() {
    let tmp = tempdir().unwrap();
    let corpus_path = tmp.path().join("collocations.txt");
    let output_path = tmp.path().join("data.csv");

    let mut file = fs::File::create(&corpus_path).unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    append_run(&corpus_path, &output_path);
    append_run(&corpus_path, &output_path);

    // Seen-key state is scoped to a run, so the second pass repeats the
    // keyed rows instead of continuing the first pass's groups
    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        content,
        "go,run,4.52\n,fast,3.10\nstop,sudden,2.00\n\
         go,run,4.52\n,fast,3.10\nstop,sudden,2.00\n"
    );
}

#[test]
fn test_truncate_mode_discards_previous_rows() {
    let tmp = tempdir().unwrap();
    let corpus_path = tmp.path().join("collocations.txt");
    let output_path = tmp.path().join("data.csv");

    let mut file = fs::File::create(&corpus_path).unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    append_run(&corpus_path, &output_path);

    let engine = ConversionEngine::new(ConversionConfig::default());
    let truncated = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&output_path)
        .unwrap();
    engine
        .convert_csv_to(
            &CorpusSource::File(corpus_path.clone()),
            BufWriter::new(truncated),
        )
        .unwrap();

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_interleaved_lemmas_share_one_key() {
    let corpus = "1\tgo\tv\trun\tv\t4.52\t120\t5%\n\
                  2\tstop\tv\tsudden\ta\t2.00\t40\t2%\n\
                  3\tgo\tv\tfast\ta\t3.10\t80\t3%\n";
    let csv = convert_corpus_to_csv(corpus).unwrap();
    assert_eq!(csv, "go,run,4.52\nstop,sudden,2.00\n,fast,3.10\n");
}

#[test]
fn test_empty_corpus_writes_no_rows() {
    let csv = convert_corpus_to_csv("").unwrap();
    assert_eq!(csv, "");
}
