//! End-to-end session flow over the CSV record store.

use crashlab_core::domain::Prediction;
use crashlab_core::store::{CsvRecordStore, RecordStore};
use crashlab_core::{CoinFlip, ScriptedSource, Session, SessionError};

#[test]
fn add_reload_reset_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let script = vec![Prediction::Above, Prediction::Above, Prediction::Above];
    let mut session = Session::new(CsvRecordStore::new(&path), ScriptedSource::new(script));

    session.submit("100").unwrap(); // 1.0, Above loses
    session.submit("1.0").unwrap(); // Above loses
    let last = session.submit("300").unwrap(); // 3.0, Above wins
    assert_eq!(last.total, 3);
    assert_eq!(last.message(), "Prediction: Above | Actual: 3.00 → Correct");

    // A fresh session over the same file sees the same history.
    let reopened = Session::new(CsvRecordStore::new(&path), CoinFlip::seeded(0));
    let d = reopened.dashboard().unwrap();
    assert_eq!(d.summary.total, 3);
    assert_eq!(d.summary.correct, 1);
    assert_eq!(d.summary.accuracy, Some(1.0 / 3.0));
    let want = [0.09, 0.07, 0.11];
    for (got, want) in d.series.martingale.iter().zip(want) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    session.reset().unwrap();
    assert!(!path.exists());
    let d = reopened.dashboard().unwrap();
    assert_eq!(d.summary.total, 0);
    assert!(d.series.is_empty());

    // Second reset with no file is a no-op.
    session.reset().unwrap();
}

#[test]
fn invalid_input_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let mut session = Session::new(
        CsvRecordStore::new(&path),
        ScriptedSource::new(vec![Prediction::Under]),
    );

    session.submit("1.5").unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    for raw in ["", "x", "1,5", "NaN"] {
        assert!(matches!(session.submit(raw), Err(SessionError::InvalidInput)));
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert_eq!(session.store().load().unwrap().len(), 1);
}

#[test]
fn seeded_sessions_record_identical_predictions() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = ["1.2", "2.5", "187", "3.9", "1.01", "12.0", "2.0", "5"];

    let run = |name: &str| {
        let path = dir.path().join(name);
        let mut session = Session::new(CsvRecordStore::new(&path), CoinFlip::seeded(2024));
        for raw in inputs {
            session.submit(raw).unwrap();
        }
        session.records().unwrap()
    };

    let a = run("a.csv");
    let b = run("b.csv");
    assert_eq!(a.len(), inputs.len());
    assert_eq!(a, b);
}
