//! Application state — single-owner, main-thread only.
//!
//! Every action runs synchronously against the session, then the derived view
//! (records, series, stakes, metrics) is rebuilt from the store.

use std::collections::VecDeque;

use chrono::NaiveDateTime;

use crashlab_core::normalize::PERCENT_CUTOFF;
use crashlab_core::simulator::martingale_stakes;
use crashlab_core::{
    Dashboard, OutcomeRecord, PredictionSource, RecordStore, Session, SessionError,
};

/// Cap on the activity log.
const ACTIVITY_CAP: usize = 50;

pub type DynSession = Session<Box<dyn RecordStore>, Box<dyn PredictionSource>>;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One line in the activity log.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub timestamp: NaiveDateTime,
    pub level: StatusLevel,
    pub message: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub input: String,
    pub overlay: Overlay,

    // Derived view, rebuilt after each action.
    pub records: Vec<OutcomeRecord>,
    pub stakes: Vec<f64>,
    pub dashboard: Dashboard,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub activity: VecDeque<ActivityRecord>,
    pub history_scroll: usize,

    session: DynSession,
}

impl AppState {
    pub fn new(session: DynSession) -> Self {
        let mut app = Self {
            running: true,
            input: String::new(),
            overlay: Overlay::None,
            records: Vec::new(),
            stakes: Vec::new(),
            dashboard: Dashboard::default(),
            status_message: None,
            activity: VecDeque::with_capacity(ACTIVITY_CAP),
            history_scroll: 0,
            session,
        };
        app.refresh();
        app
    }

    /// Reload records and recompute every derived value.
    pub fn refresh(&mut self) {
        match self.session.records() {
            Ok(records) => {
                self.dashboard = Dashboard::from_records(&records);
                self.stakes = martingale_stakes(&records);
                self.records = records;
            }
            Err(e) => {
                self.records.clear();
                self.stakes.clear();
                self.dashboard = Dashboard::default();
                self.push(StatusLevel::Error, format!("Failed to load records: {e}"));
            }
        }
        self.history_scroll = self.history_scroll.min(self.records.len().saturating_sub(1));
    }

    /// "Add": submit the current input.
    ///
    /// The input is cleared on success and kept on failure so it can be fixed.
    pub fn submit_input(&mut self) {
        match self.session.submit(&self.input) {
            Ok(submission) => {
                let message = submission.message();
                if in_percent_band(&self.input) {
                    self.push(
                        StatusLevel::Warning,
                        format!("{message} (read {} as percent)", self.input.trim()),
                    );
                } else {
                    self.push(StatusLevel::Info, message);
                }
                self.input.clear();
                self.refresh();
            }
            Err(SessionError::InvalidInput) => {
                self.push(StatusLevel::Error, "Invalid input.");
            }
            Err(e) => {
                tracing::error!(error = %e, "submission failed");
                self.push(StatusLevel::Error, format!("Failed to save: {e}"));
            }
        }
    }

    /// "Reset Data": delete every record unconditionally.
    pub fn reset_data(&mut self) {
        match self.session.reset() {
            Ok(()) => {
                self.push(StatusLevel::Info, "Data reset.");
                self.history_scroll = 0;
                self.refresh();
            }
            Err(e) => {
                tracing::error!(error = %e, "reset failed");
                self.push(StatusLevel::Error, format!("Failed to reset: {e}"));
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }

    pub fn scroll_history_down(&mut self) {
        if self.history_scroll + 1 < self.records.len() {
            self.history_scroll += 1;
        }
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    /// Set the status line and log the message, capping the log.
    pub fn push(&mut self, level: StatusLevel, message: impl Into<String>) {
        let message = message.into();
        self.activity.push_front(ActivityRecord {
            timestamp: chrono::Local::now().naive_local(),
            level,
            message: message.clone(),
        });
        if self.activity.len() > ACTIVITY_CAP {
            self.activity.pop_back();
        }
        self.status_message = Some((message, level));
    }
}

/// Raw input between 10 and 100 is ambiguous: it is read as percent form.
fn in_percent_band(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|v| v > PERCENT_CUTOFF && v < 100.0)
        .unwrap_or(false)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crashlab_core::domain::Prediction;
    use crashlab_core::{CsvRecordStore, MemoryStore, ScriptedSource};

    pub(crate) fn app_with(script: Vec<Prediction>) -> AppState {
        let session: DynSession = Session::new(
            Box::new(MemoryStore::new()),
            Box::new(ScriptedSource::new(script)),
        );
        AppState::new(session)
    }

    #[test]
    fn submit_clears_input_and_refreshes() {
        let mut app = app_with(vec![Prediction::Above]);
        app.input = "250".into();
        app.submit_input();
        assert!(app.input.is_empty());
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.stakes.len(), 1);
        assert_eq!(app.dashboard.summary.correct, 1);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Info);
        assert_eq!(msg, "Prediction: Above | Actual: 2.50 → Correct");
    }

    #[test]
    fn invalid_input_keeps_text_and_state() {
        let mut app = app_with(vec![Prediction::Above]);
        app.input = "two".into();
        app.submit_input();
        assert_eq!(app.input, "two");
        assert!(app.records.is_empty());
        assert_eq!(
            app.status_message,
            Some(("Invalid input.".to_string(), StatusLevel::Error))
        );
    }

    #[test]
    fn reset_empties_view() {
        let mut app = app_with(vec![Prediction::Under]);
        for raw in ["1.5", "3.0"] {
            app.input = raw.into();
            app.submit_input();
        }
        assert_eq!(app.records.len(), 2);
        app.reset_data();
        assert!(app.records.is_empty());
        assert!(app.dashboard.series.is_empty());
        assert_eq!(app.dashboard.summary.accuracy, None);
        assert_eq!(
            app.status_message,
            Some(("Data reset.".to_string(), StatusLevel::Info))
        );
    }

    #[test]
    fn ambiguous_percent_input_warns() {
        let mut app = app_with(vec![Prediction::Under]);
        app.input = "15.5".into();
        app.submit_input();
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("Actual: 0.1"), "{msg}");
        assert!(msg.ends_with("(read 15.5 as percent)"));
        assert!((app.records[0].actual() - 0.155).abs() < 1e-12);
    }

    #[test]
    fn activity_log_caps() {
        let mut app = app_with(vec![]);
        for i in 0..60 {
            app.push(StatusLevel::Warning, format!("event {i}"));
        }
        assert_eq!(app.activity.len(), ACTIVITY_CAP);
        assert!(app.activity[0].message.contains("59"));
    }

    #[test]
    fn unreadable_record_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "prediction,actual,correct\nAbove,1.5,True\n").unwrap();

        let session: DynSession = Session::new(
            Box::new(CsvRecordStore::new(&path)),
            Box::new(ScriptedSource::new(vec![Prediction::Above])),
        );
        let app = AppState::new(session);
        assert!(app.records.is_empty());
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(msg.starts_with("Failed to load records"), "{msg}");
    }

    #[test]
    fn history_scroll_is_bounded() {
        let mut app = app_with(vec![Prediction::Above]);
        for raw in ["1.1", "1.2", "1.3"] {
            app.input = raw.into();
            app.submit_input();
        }
        for _ in 0..10 {
            app.scroll_history_down();
        }
        assert_eq!(app.history_scroll, 2);
        app.scroll_history_up();
        assert_eq!(app.history_scroll, 1);
    }
}
