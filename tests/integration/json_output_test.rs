//! Integration tests for the grouped JSON output mode

use colloconv::conversion::{convert_corpus, ConversionConfig, ConversionEngine};
use colloconv::corpus::CorpusSource;
use colloconv::convert_corpus_to_json;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

const SAMPLE: &str = "1\tgo\tv\trun\tv\t4.52\t120\t5%\n\
                      2\tgo\tv\tfast\ta\t3.10\t80\t3%\n\
                      3\tstop\tv\tsudden\ta\t2.00\t40\t2%\n";

fn engine() -> ConversionEngine {
    ConversionEngine::new(ConversionConfig::default())
}

#[test]
fn test_sample_corpus_grouping() {
    let json = convert_corpus_to_json(SAMPLE).unwrap();
    assert_eq!(
        json,
        r#"{"go":[{"assoc":"run","info":"4.52"},{"assoc":"fast","info":"3.10"}],"stop":[{"assoc":"sudden","info":"2.00"}]}"#
    );
}

#[test]
fn test_every_record_appears_exactly_once() {
    let json = convert_corpus_to_json(SAMPLE).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();

    let total_entries: usize = object
        .values()
        .map(|entries| entries.as_array().unwrap().len())
        .sum();
    assert_eq!(total_entries, 3);

    for entries in object.values() {
        for entry in entries.as_array().unwrap() {
            let entry = entry.as_object().unwrap();
            assert_eq!(entry.len(), 2);
            assert!(entry["assoc"].is_string());
            assert!(entry["info"].is_string());
        }
    }
}

#[test]
fn test_lemma_keys_keep_first_seen_order() {
    let corpus = "1\tzebra\tn\tstripe\tn\t1.00\t5\t1%\n\
                  2\tapple\tn\tpie\tn\t2.00\t9\t1%\n\
                  3\tzebra\tn\therd\tn\t3.00\t7\t1%\n";
    let json = convert_corpus_to_json(corpus).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    // preserve_order keeps the map in insertion order
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zebra", "apple"]);
}

#[test]
fn test_rewriting_output_file_is_idempotent() {
    let tmp = tempdir().unwrap();
    let corpus_path = tmp.path().join("collocations.txt");
    let output_path = tmp.path().join("data.json");

    let mut file = fs::File::create(&corpus_path).unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    let source = CorpusSource::File(corpus_path);

    let first = engine().convert(&source).unwrap();
    fs::write(&output_path, &first.content).unwrap();
    let first_bytes = fs::read(&output_path).unwrap();

    let second = engine().convert(&source).unwrap();
    fs::write(&output_path, &second.content).unwrap();
    let second_bytes = fs::read(&output_path).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_missing_corpus_file_writes_nothing() {
    let tmp = tempdir().unwrap();
    let source = CorpusSource::File(tmp.path().join("absent.txt"));

    let result = convert_corpus(&source, &ConversionConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_scores_stay_opaque_strings() {
    // MI values are never parsed; whatever the corpus carries is emitted
    let corpus = "1\tgo\tv\trun\tv\t004.520\t120\t5%\n";
    let json = convert_corpus_to_json(corpus).unwrap();
    assert!(json.contains(r#""info":"004.520""#));
}
