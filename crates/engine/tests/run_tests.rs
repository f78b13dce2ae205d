use std::io::Write;
use tempfile::NamedTempFile;
use word_tally_engine::config::{SortOrder, TallyConfig, TallyConfigBuilder};
use word_tally_engine::error::EngineError;
use word_tally_engine::run;

const SAMPLE: &str = "The cat sat on the mat. The CAT ran.\n";

fn fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn config_for(file: &NamedTempFile) -> TallyConfigBuilder {
    let mut builder = TallyConfigBuilder::default();
    builder.source(file.path().to_path_buf());
    builder
}

fn lines(config: &TallyConfig) -> Vec<String> {
    let result = run(config).unwrap();
    assert!(result.error.is_none());
    result.entries.into_iter().map(|e| e.line).collect()
}

#[test]
fn ignore_case_with_minimum_length() {
    let file = fixture(SAMPLE);
    let config = config_for(&file)
        .ignore_case(true)
        .min_length(3usize)
        .build()
        .unwrap();
    assert_eq!(
        lines(&config),
        [
            "       3: the",
            "       2: cat",
            "       1: sat",
            "       1: ran",
            "       1: mat",
        ]
    );
}

#[test]
fn minimum_count_keeps_frequent_words() {
    let file = fixture(SAMPLE);
    let config = config_for(&file)
        .ignore_case(true)
        .min_length(3usize)
        .min_count(2u64)
        .build()
        .unwrap();
    assert_eq!(lines(&config), ["       3: the", "       2: cat"]);
}

#[test]
fn case_sensitive_counts_forms_separately() {
    let file = fixture(SAMPLE);
    let config = config_for(&file).order(SortOrder::Ascending).build().unwrap();
    let result = run(&config).unwrap();
    let words: Vec<_> = result.entries.iter().map(|e| e.word.as_str()).collect();
    assert!(words.contains(&"CAT"));
    assert!(words.contains(&"cat"));
    assert_eq!(result.entries.last().unwrap().line, "       2: The");
    assert_eq!(result.total_words, 9);
    assert_eq!(result.distinct_words, 8);
    assert_eq!(result.lines, 1);
}

#[test]
fn prefix_filter() {
    let file = fixture("Prepare the prefix, preview and Present a pre-war press.\n");
    let config = config_for(&file).prefix("pre").min_length(4usize).build().unwrap();
    let result = run(&config).unwrap();
    let mut words: Vec<_> = result.entries.iter().map(|e| e.word.clone()).collect();
    words.sort();
    assert_eq!(words, ["pre-war", "prefix", "press", "preview"]);

    let config = config_for(&file)
        .prefix("pre")
        .ignore_case(true)
        .min_length(4usize)
        .build()
        .unwrap();
    let result = run(&config).unwrap();
    let mut words: Vec<_> = result.entries.iter().map(|e| e.word.clone()).collect();
    words.sort();
    assert_eq!(words, ["pre-war", "prefix", "prepare", "present", "press", "preview"]);
}

#[test]
fn empty_file_gives_empty_report() {
    let file = fixture("");
    let config = config_for(&file).build().unwrap();
    let result = run(&config).unwrap();
    assert!(result.entries.is_empty());
    assert!(result.error.is_none());
    assert_eq!(result.lines, 0);
}

#[test]
fn repeated_runs_are_identical() {
    let file = fixture("one two two three three three\nfour four four four\n");
    let config = config_for(&file).build().unwrap();
    assert_eq!(lines(&config), lines(&config));
}

#[test]
fn missing_file_is_an_open_error() {
    let config = TallyConfigBuilder::default()
        .source("no/such/input.txt")
        .build()
        .unwrap();
    assert!(matches!(run(&config), Err(EngineError::FileOpen { .. })));
}
