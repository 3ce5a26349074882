//! Stats stage: totals, counterpart skipping, anomaly detection.

use crate::helpers::TestCorpus;

#[test]
fn totals_cover_only_base_names_present_in_both() {
    let corpus = TestCorpus::new();
    corpus.write_stage("compiled", "a.js", &"x".repeat(100));
    corpus.write_stage("compiled", "b.js", &"x".repeat(200));
    corpus.write_stage("minified", "a.js", &"x".repeat(80));

    let (stdout, stderr, code) = corpus.run(&["stats"]);
    assert_eq!(code, 0, "stderr: {stderr}");

    assert!(stdout.contains("Total compiled: 100"), "stdout: {stdout}");
    assert!(stdout.contains("Total minified: 80"));
    assert!(!stdout.contains("minified size is bigger"));
}

#[test]
fn minified_not_strictly_smaller_is_flagged() {
    let corpus = TestCorpus::new();
    corpus.write_stage("compiled", "c.js", &"x".repeat(50));
    corpus.write_stage("minified", "c.js", &"x".repeat(60));

    let (stdout, _stderr, code) = corpus.run(&["stats"]);
    assert_eq!(code, 0);

    assert!(stdout.contains("For some reason, the minified size is bigger"));
    assert!(stdout.contains("=> 50"));
    assert!(stdout.contains("=> 60"));
    assert!(stdout.contains("Total compiled: 50"));
    assert!(stdout.contains("Total minified: 60"));
}

#[test]
fn stats_before_any_other_stage_reports_zeros() {
    let corpus = TestCorpus::new();

    let (stdout, _stderr, code) = corpus.run(&["stats"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Total compiled: 0"));
    assert!(stdout.contains("Total minified: 0"));
}

#[test]
fn stats_leaves_the_corpus_untouched() {
    let corpus = TestCorpus::new();
    corpus.write_stage("compiled", "a.js", "abc");
    corpus.write_stage("minified", "a.js", "ab");

    let before = std::fs::read_dir(corpus.root()).unwrap().count();
    corpus.run(&["stats"]);
    let after = std::fs::read_dir(corpus.root()).unwrap().count();
    assert_eq!(before, after);
}
