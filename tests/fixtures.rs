use std::collections::HashSet;
use std::path::Path;

use tempfile::tempdir;
use text_stats::config::SAMPLE_CSV_VAR;
use text_stats::{
    read_sample_csv, write_analysis_details, write_analysis_details_from, Document, TextStats,
};

fn base() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn open(name: &str) -> TextStats {
    let doc = Document::open_in(base(), &format!("files_for_testing/{}", name)).unwrap();
    TextStats::new(doc)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_sentence_count() {
    for (name, expected) in [
        ("tinyfile_1.txt", 1),
        ("tinyfile_3.txt", 3),
        ("buckeye_battle_cry.txt", 3),
    ] {
        let ta = open(name);
        assert_eq!(ta.sentence_count(), expected, "{}", name);
        assert_eq!(ta.sentence_count(), expected, "{} (second call)", name);
    }
}

#[test]
fn test_words() {
    assert_eq!(open("tinyfile_1.txt").words(), ["coffee", "is", "so", "good"]);
    assert_eq!(open("tinyfile_2.txt").words(), ["you", "hate", "tea"]);
    assert_eq!(
        open("tinyfile_4.txt").words(),
        ["i", "love", "coffee", "so", "so", "so", "so", "so", "so", "much"]
    );
}

#[test]
fn test_word_count() {
    assert_eq!(open("tinyfile_1.txt").word_count(), 4);
    assert_eq!(open("tinyfile_3.txt").word_count(), 24);
    assert_eq!(open("osusong.txt").word_count(), 7);
}

#[test]
fn test_punctuation_tokens_count_as_words() {
    let ta = open("punctuation.txt");
    assert_eq!(ta.word_count(), 6);
    assert_eq!(ta.frequency_of(""), 3);
    assert_eq!(ta.sentence_count(), 1);
}

#[test]
fn test_frequencies() {
    let freqs = open("tinyfile_4.txt").frequencies();
    assert_eq!(freqs["i"], 1);
    assert_eq!(freqs["love"], 1);
    assert_eq!(freqs["coffee"], 1);
    assert_eq!(freqs["so"], 6);
    assert_eq!(freqs["much"], 1);
    assert_eq!(freqs.values().sum::<usize>(), 10);
}

#[test]
fn test_frequency_of() {
    let ta = open("osusong.txt");
    for word in ["come", "on", "ohio", "victory", "through"] {
        assert_eq!(ta.frequency_of(word), 1, "{}", word);
    }

    let ta = open("tinyfile_2.txt");
    assert_eq!(ta.frequency_of("tea"), 1);
    assert_eq!(ta.frequency_of("coffee"), 0);
}

#[test]
fn test_vocabulary() {
    assert_eq!(open("tinyfile_1.txt").vocabulary(), ["coffee", "good", "is", "so"]);
    assert_eq!(
        open("tinyfile_3.txt").vocabulary(),
        ["coffee", "hate", "i", "juice", "love", "much", "so", "tea"]
    );
    assert_eq!(
        open("tinyfile_4.txt").vocabulary(),
        ["coffee", "i", "love", "much", "so"]
    );
}

#[test]
fn test_vocabulary_is_sorted_key_set() {
    for name in ["tinyfile_3.txt", "buckeye_battle_cry.txt", "punctuation.txt"] {
        let ta = open(name);
        let vocab = ta.vocabulary();
        assert!(vocab.windows(2).all(|w| w[0] < w[1]), "{}", name);

        let keys: HashSet<String> = ta.frequencies().into_keys().collect();
        assert_eq!(keys, vocab.into_iter().collect::<HashSet<_>>(), "{}", name);
    }
}

#[test]
fn test_percent_frequencies() {
    let pct = open("tinyfile_3.txt").percent_frequencies();
    assert!(approx(pct["i"], 3.0 / 24.0));
    assert!(approx(pct["love"], 2.0 / 24.0));
    assert!(approx(pct["coffee"], 1.0 / 24.0));
    assert!(approx(pct["tea"], 1.0 / 24.0));
    assert!(approx(pct["juice"], 1.0 / 24.0));
    assert!(approx(pct["much"], 3.0 / 24.0));
    assert!(approx(pct["so"], 12.0 / 24.0));
    assert!(approx(pct["hate"], 1.0 / 24.0));

    let pct = open("tinyfile_4.txt").percent_frequencies();
    assert!(approx(pct["so"], 0.6));
}

#[test]
fn test_most_common() {
    assert_eq!(open("tinyfile_3.txt").most_common(), Some(("so".to_string(), 12)));
    assert_eq!(open("tinyfile_4.txt").most_common(), Some(("so".to_string(), 6)));
    assert_eq!(open("tinyfile_1.txt").most_common(), Some(("coffee".to_string(), 1)));
}

#[test]
fn test_empty_file() {
    let ta = open("empty.txt");
    assert_eq!(ta.word_count(), 0);
    assert_eq!(ta.sentence_count(), 1);
    assert!(ta.percent_frequencies().is_empty());
    assert_eq!(ta.most_common(), None);
}

#[test]
fn test_missing_file_is_error() {
    assert!(Document::open_in(base(), "files_for_testing/missing.txt").is_err());
}

#[test]
fn test_similarity() {
    let tiny1 = open("tinyfile_1.txt");
    let tiny2 = open("tinyfile_2.txt");
    let tiny4 = open("tinyfile_4.txt");

    assert!(approx(tiny1.similarity_with(&tiny1), 1.0));
    assert_eq!(tiny1.similarity_with(&tiny2), 0.0);

    let forward = tiny1.similarity_with(&tiny4);
    assert!(forward > 0.0 && forward < 1.0);
    assert!(approx(forward, tiny4.similarity_with(&tiny1)));
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_read_sample_csv() {
    let header = read_sample_csv(base().join("sample.csv")).unwrap();
    assert_eq!(header, ["filepath", "total words", "line count", "most common word"]);
}

#[test]
fn test_write_analysis_details_round_trip() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("test.csv");
    write_analysis_details_from(&open("tinyfile_4.txt"), base().join("sample.csv"), &out).unwrap();

    let lines = read_rows(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ["filepath", "total words", "line count", "most common word"]);
    assert_eq!(lines[1], ["files_for_testing/tinyfile_4.txt", "10", "1", "so"]);
}

#[test]
fn test_write_analysis_details_uses_configured_sample() {
    // The only test in this binary that reads the environment.
    std::env::set_var(SAMPLE_CSV_VAR, base().join("sample.csv"));

    let dir = tempdir().unwrap();
    let out = dir.path().join("configured.csv");
    write_analysis_details(&open("tinyfile_3.txt"), &out).unwrap();

    let lines = read_rows(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ["filepath", "total words", "line count", "most common word"]);
    assert_eq!(lines[1], ["files_for_testing/tinyfile_3.txt", "24", "3", "so"]);
}
