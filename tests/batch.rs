use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use bitty_splitter::batch::{run_batch, BatchOptions};
use bitty_splitter::config::Config;
use bitty_splitter::ingestion::{FileContext, FileStats, SplitObserver};
use bitty_splitter::{Severity, SplitterError};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<FileStats>>,
    failures: Mutex<Vec<(String, Severity)>>,
}

impl SplitObserver for RecordingObserver {
    fn on_success(&self, _ctx: &FileContext, stats: FileStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, ctx: &FileContext, severity: Severity, _error: &SplitterError) {
        let name = ctx.path.file_name().unwrap().to_string_lossy().into_owned();
        self.failures.lock().unwrap().push((name, severity));
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn fixture_config_splits_ledger_into_per_person_files() {
    let config = Config::from_path("tests/fixtures/conf.toml").unwrap();
    let rules = config.rule_set().unwrap();
    let out = tempfile::tempdir().unwrap();

    let report = run_batch(
        config.input_dir.as_deref().unwrap(),
        out.path(),
        &rules,
        &BatchOptions::default(),
    )
    .unwrap();

    assert!(report.is_success());
    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(
        read(out.path().join("alice").join("ledger.csv")),
        "date,category,amount\n2024-01-15,Rent,30.00\n2024-06-30,Utilities,22.750\n"
    );
    assert_eq!(
        read(out.path().join("bob").join("ledger.csv")),
        concat!(
            "date,category,amount\n",
            "2024-01-15,Rent,70.00\n",
            "2024-06-30,Utilities,22.750\n",
            "2024-07-01,Utilities,60\n",
        )
    );
    assert_eq!(
        read(out.path().join("shared").join("ledger.csv")),
        "date,category,amount\n2024-03-02,Groceries,12.34\n"
    );
}

#[test]
fn failed_file_is_skipped_and_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(input.path().join("a_bad.csv"), "k,v\nRent,1\nFood,2\n").unwrap();
    fs::write(input.path().join("b_good.csv"), "k,v\nRent,4\n").unwrap();

    let config = Config::from_toml_str(
        "[Splitters]\n\"Rent\" = '{\"rowsToSplit\":[1],\"split\":{\"me\":\"0.25\"}}'\n",
    )
    .unwrap();
    let rules = config.rule_set().unwrap();

    let observer = Arc::new(RecordingObserver::default());
    let options = BatchOptions::with_observer(observer.clone());
    let report = run_batch(input.path(), out.path(), &rules, &options).unwrap();

    assert!(!report.is_success());
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        report.failed[0].1,
        SplitterError::NoMatch { row: 2, .. }
    ));
    assert!(!out.path().join("me").join("a_bad.csv").exists());
    assert_eq!(read(out.path().join("me").join("b_good.csv")), "k,v\nRent,1.00\n");

    assert_eq!(
        observer.failures.lock().unwrap().clone(),
        vec![("a_bad.csv".to_string(), Severity::Error)]
    );
    assert_eq!(
        observer.successes.lock().unwrap().clone(),
        vec![FileStats {
            data_rows: 1,
            splits: 1
        }]
    );
}

#[test]
fn missing_input_directory_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    let err = run_batch(
        out.path().join("missing"),
        out.path(),
        &Config::default().rule_set().unwrap(),
        &BatchOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.severity(), Severity::Critical);
}
