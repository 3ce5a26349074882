//! Extract and dedup stages through the binary.

use crate::helpers::TestCorpus;
use std::fs;

#[test]
fn extract_numbers_files_in_traversal_order() {
    let corpus = TestCorpus::new();
    corpus.write_raw("a.svelte", "first");
    corpus.write_raw("b.svelte", "second");
    corpus.write_raw("c.svelte", "third");

    let (stdout, stderr, code) = corpus.run(&["extract"]);
    assert_eq!(code, 0, "stdout: {stdout} stderr: {stderr}");
    assert!(stdout.contains("Extracting..."));

    assert_eq!(
        fs::read_to_string(corpus.stage_file("cleaned", "0000.svelte")).unwrap(),
        "first"
    );
    assert_eq!(
        fs::read_to_string(corpus.stage_file("cleaned", "0001.svelte")).unwrap(),
        "second"
    );
    assert_eq!(
        fs::read_to_string(corpus.stage_file("cleaned", "0002.svelte")).unwrap(),
        "third"
    );
    assert!(!corpus.stage_file("cleaned", "0003.svelte").exists());
}

#[test]
fn extract_missing_raw_tree_fails_the_stage() {
    let corpus = TestCorpus::new();

    let (_stdout, stderr, code) = corpus.run(&["extract"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("raw"), "stderr: {stderr}");
}

#[test]
fn dedup_removes_later_duplicates_only() {
    let corpus = TestCorpus::new();
    corpus.write_raw("a.svelte", "same content");
    corpus.write_raw("b.svelte", "unique content");
    corpus.write_raw("c.svelte", "same content");

    let (_stdout, _stderr, code) = corpus.run(&["extract"]);
    assert_eq!(code, 0);
    let (stdout, _stderr, code) = corpus.run(&["dedup"]);
    assert_eq!(code, 0);

    assert!(stdout.contains("Duplicate!"));
    assert!(corpus.stage_file("cleaned", "0000.svelte").exists());
    assert!(corpus.stage_file("cleaned", "0001.svelte").exists());
    assert!(!corpus.stage_file("cleaned", "0002.svelte").exists());
}

#[test]
fn dedup_on_clean_set_removes_nothing() {
    let corpus = TestCorpus::new();
    corpus.write_raw("a.svelte", "one");
    corpus.write_raw("b.svelte", "two");

    corpus.run(&["extract"]);
    let (stdout, _stderr, code) = corpus.run(&["dedup"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 0 duplicates"));
}
