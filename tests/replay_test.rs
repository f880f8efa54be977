//! Integration tests for trace replay, configuration and history files


use blink_monitor::{
    app::{AppConfig, BlinkApp},
    config::Config,
    session_history::SessionHistoryLog,
    sinks::AlertSink,
    trace::Trace,
    window_aggregator::LowBlinkRateAlert,
    Error, Result,
};
use std::sync::{Arc, Mutex};
use test_helpers::synthetic_trace;

/// Alert sink recording every alert it receives
#[derive(Clone, Default)]
struct RecordingAlertSink {
    alerts: Arc<Mutex<Vec<LowBlinkRateAlert>>>,
}

impl AlertSink for RecordingAlertSink {
    fn on_low_blink_rate(&mut self, alert: &LowBlinkRateAlert) -> Result<()> {
        self.alerts.lock().unwrap().push(*alert);
        Ok(())
    }
}

/// Alert sink that is always unavailable
struct FailingAlertSink;

impl AlertSink for FailingAlertSink {
    fn on_low_blink_rate(&mut self, _alert: &LowBlinkRateAlert) -> Result<()> {
        Err(Error::CollaboratorFailure("display unavailable".to_string()))
    }
}

/// Closures every `spacing` seconds, each lasting 0.2s, over `duration`
fn closures(duration: f64, spacing: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    let mut t = 1.0;
    while t < duration {
        out.push((t, t + 0.2));
        t += spacing;
    }
    out
}

#[test]
fn test_replay_two_windows() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.yaml");
    let history_path = dir.path().join("history.yaml");

    // Window 1: blinks every 3s (20 blinks). Window 2: every 6s (10 blinks).
    let mut blinks = closures(60.0, 3.0);
    blinks.extend(closures(60.0, 6.0).into_iter().map(|(s, e)| (s + 60.0, e + 60.0)));
    synthetic_trace(120.0, 10.0, &blinks).to_file(&trace_path).unwrap();

    let mut settings = Config::default();
    settings.history.output = Some(history_path.clone());

    let sink = RecordingAlertSink::default();
    let mut app = BlinkApp::new(AppConfig { trace_path, settings })
        .unwrap()
        .with_alert_sink(Box::new(sink.clone()));
    let summary = app.run().unwrap();

    assert_eq!(summary.windows, 2);
    assert_eq!(summary.total_blinks, 30);
    assert_eq!(summary.low_rate_windows, 1);

    let records = app.history().records();
    assert_eq!(records[0].blink_count, 20);
    assert!(!records[0].is_low_blink_rate);
    assert_eq!(records[1].blink_count, 10);
    assert!(records[1].is_low_blink_rate);

    let alerts = sink.alerts.lock().unwrap();
    assert_eq!(alerts.len(), 1);
    assert!((alerts[0].average_rate - 10.0 / 60.0).abs() < 1e-9);

    let saved = SessionHistoryLog::from_file(&history_path).unwrap();
    assert_eq!(saved.records(), records);
}

#[test]
fn test_alert_failure_does_not_stop_replay() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.yaml");
    synthetic_trace(130.0, 10.0, &[]).to_file(&trace_path).unwrap();

    let mut app = BlinkApp::new(AppConfig {
        trace_path,
        settings: Config::default(),
    })
    .unwrap()
    .with_alert_sink(Box::new(FailingAlertSink));

    let summary = app.run().unwrap();
    assert_eq!(summary.windows, 2);
    assert_eq!(summary.low_rate_windows, 2);
    assert_eq!(app.history().len(), 2);
}

#[test]
fn test_partial_window_blinks_are_counted_by_monitor() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.yaml");
    synthetic_trace(30.0, 10.0, &closures(30.0, 3.0)).to_file(&trace_path).unwrap();

    let mut app = BlinkApp::new(AppConfig {
        trace_path,
        settings: Config::default(),
    })
    .unwrap();
    let summary = app.run().unwrap();

    // No window closed, yet the session saw every blink
    assert_eq!(summary.windows, 0);
    assert_eq!(summary.total_blinks, 0);
    assert_eq!(app.monitor().state().total_blinks, 10);
}

#[test]
fn test_json_trace_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.json");
    std::fs::write(&trace_path, r#"{"frames": [{"timestamp": 0.0, "faces": []}, {"timestamp": 0.5}]}"#).unwrap();

    let trace = Trace::from_file(&trace_path).unwrap();
    assert_eq!(trace.into_frames().unwrap().len(), 2);
}

#[test]
fn test_missing_trace_is_collaborator_failure() {
    let result = BlinkApp::new(AppConfig {
        trace_path: "does/not/exist.yaml".into(),
        settings: Config::default(),
    });
    assert!(matches!(result, Err(Error::CollaboratorFailure(_))));
}

#[test]
fn test_invalid_settings_rejected_before_loading() {
    let mut settings = Config::default();
    settings.window.window_duration_seconds = 0;
    let result = BlinkApp::new(AppConfig {
        trace_path: "does/not/exist.yaml".into(),
        settings,
    });
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_oversized_cooldown_rejected() {
    let mut settings = Config::default();
    settings.detection.cooldown_seconds = 1e20;
    let result = BlinkApp::new(AppConfig {
        trace_path: "does/not/exist.yaml".into(),
        settings,
    });
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.detection.cooldown_seconds = 0.2;
    config.detection.ratio_filter = "median:5".to_string();
    config.window.min_blink_count = 12;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "detection: [not, a, map]").unwrap();

    assert!(matches!(Config::from_file(&path), Err(Error::ConfigError(_))));
}
