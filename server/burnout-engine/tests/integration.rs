//! Integration tests for the burnout engine.

use burnout_engine::{analyze, Config, InboundSnapshot, RiskLevel, SessionPolicy};

fn parse(json: &str) -> InboundSnapshot {
  serde_json::from_str(json).unwrap()
}

fn empty_snapshot() -> InboundSnapshot {
  parse(
    r#"{
      "window_days": 30,
      "commits": [],
      "issues": []
    }"#,
  )
}

#[test]
fn empty_snapshot_scores_zero_low_risk() {
  let out = analyze(&empty_snapshot(), &Config::default()).unwrap();
  assert_eq!(out.score, 0);
  assert_eq!(out.risk_level, RiskLevel::Low);
  assert_eq!(
    out.recommendations,
    vec!["Keep maintaining a good balance!".to_string()]
  );
}

#[test]
fn ten_night_commits_make_twenty_points() {
  // Wednesday 2025-01-15, all at 23:xx — night but not weekend, and
  // 10 commits / 30 days stays under the frequency threshold.
  let commits: Vec<String> = (0..10)
    .map(|i| format!(r#"{{"timestamp": "2025-01-15T23:{:02}:00Z", "author": "alice"}}"#, i))
    .collect();
  let json = format!(
    r#"{{"window_days": 30, "commits": [{}], "issues": []}}"#,
    commits.join(",")
  );
  let out = analyze(&parse(&json), &Config::default()).unwrap();
  assert_eq!(out.factors.late_night_work, 20.0);
  assert_eq!(out.factors.weekend_work, 0.0);
  assert_eq!(out.factors.high_frequency, 0.0);
  assert_eq!(out.score, 20);
  assert_eq!(out.risk_level, RiskLevel::Low);
}

#[test]
fn forty_weekend_commits_cap_at_twenty() {
  // Saturday 2025-01-18, midday. 40 * 3 = 120 raw, capped at 20.
  let commits: Vec<String> = (0..40)
    .map(|i| format!(r#"{{"timestamp": "2025-01-18T12:{:02}:00Z", "author": "bob"}}"#, i % 60))
    .collect();
  let json = format!(
    r#"{{"window_days": 30, "commits": [{}], "issues": []}}"#,
    commits.join(",")
  );
  let out = analyze(&parse(&json), &Config::default()).unwrap();
  assert_eq!(out.factors.weekend_work, 20.0);
}

#[test]
fn five_open_issues_cap_stress_at_ten() {
  let issues: Vec<String> = (0..5)
    .map(|_| r#"{"state": "open", "created_at": "2025-01-10T09:00:00Z"}"#.to_string())
    .collect();
  let json = format!(
    r#"{{"window_days": 30, "commits": [], "issues": [{}]}}"#,
    issues.join(",")
  );
  let out = analyze(&parse(&json), &Config::default()).unwrap();
  assert_eq!(out.factors.stress_indicators, 10.0);
}

#[test]
fn score_is_min_of_hundred_and_factor_sum() {
  let out = analyze(&empty_snapshot(), &Config::default()).unwrap();
  let sum = out.factors.late_night_work
    + out.factors.weekend_work
    + out.factors.long_sessions
    + out.factors.high_frequency
    + out.factors.low_breaks
    + out.factors.stress_indicators;
  assert_eq!(out.score as f64, sum.min(100.0).round());
}

#[test]
fn sessions_presence_selects_time_tracking_policy() {
  let json = r#"{
    "window_days": 30,
    "commits": [],
    "issues": [],
    "sessions": [
      {"duration_minutes": 250.0},
      {"duration_minutes": 300.0},
      {"duration_minutes": 120.0}
    ]
  }"#;
  let out = analyze(&parse(json), &Config::default()).unwrap();
  assert_eq!(out.session_policy, SessionPolicy::TimeTracking);
  assert_eq!(out.factors.long_sessions, 8.0);
}

#[test]
fn no_sessions_selects_commit_only_policy() {
  let out = analyze(&empty_snapshot(), &Config::default()).unwrap();
  assert_eq!(out.session_policy, SessionPolicy::CommitOnly);
}

#[test]
fn low_breaks_counts_against_score() {
  let json = r#"{
    "window_days": 30,
    "commits": [],
    "issues": [],
    "daily_break_minutes": [20.0, 20.0, 20.0]
  }"#;
  let out = analyze(&parse(json), &Config::default()).unwrap();
  // avg 20 -> (30 - 20) * 0.5 = 5.
  assert_eq!(out.factors.low_breaks, 5.0);
}

#[test]
fn utc_offset_shifts_night_classification() {
  let base = r#"{
    "window_days": 30,
    "utc_offset_minutes": %OFF%,
    "commits": [{"timestamp": "2025-01-15T23:00:00Z", "author": "alice"}],
    "issues": []
  }"#;

  // +120 min: 01:00 local, still night.
  let out = analyze(&parse(&base.replace("%OFF%", "120")), &Config::default()).unwrap();
  assert_eq!(out.factors.late_night_work, 2.0);

  // -300 min: 18:00 local, not night.
  let out = analyze(&parse(&base.replace("%OFF%", "-300")), &Config::default()).unwrap();
  assert_eq!(out.factors.late_night_work, 0.0);
}

#[test]
fn deterministic_output_across_runs() {
  let json = r#"{
    "window_days": 30,
    "commits": [
      {"timestamp": "2025-01-18T23:30:00Z", "author": "alice"},
      {"timestamp": "2025-01-19T02:15:00Z", "author": "alice"}
    ],
    "issues": [
      {"state": "open", "created_at": "2025-01-10T09:00:00Z"},
      {"state": "closed", "created_at": "2025-01-05T09:00:00Z", "closed_at": "2025-01-08T10:00:00Z"}
    ],
    "sessions": [{"duration_minutes": 260.0}]
  }"#;

  let s1 = analyze(&parse(json), &Config::default()).unwrap();
  let s2 = analyze(&parse(json), &Config::default()).unwrap();
  assert_eq!(
    serde_json::to_string(&s1).unwrap(),
    serde_json::to_string(&s2).unwrap(),
    "Same inputs must produce identical JSON output"
  );
}

#[test]
fn unknown_fields_are_ignored() {
  let json = r#"{
    "window_days": 30,
    "commits": [],
    "issues": [],
    "some_unknown_field": "should be ignored",
    "another": 42
  }"#;
  let raw: InboundSnapshot = serde_json::from_str(json).unwrap();
  assert!(analyze(&raw, &Config::default()).is_ok());
}

#[test]
fn non_positive_window_gives_clear_error() {
  let json = r#"{"window_days": 0, "commits": [], "issues": []}"#;
  let err = analyze(&parse(json), &Config::default()).unwrap_err();
  assert!(
    err.to_string().contains("window_days"),
    "Error should mention the field: {}",
    err
  );
}

#[test]
fn bad_issue_state_gives_clear_error() {
  let json = r#"{
    "window_days": 30,
    "commits": [],
    "issues": [{"state": "merged", "created_at": "2025-01-10T09:00:00Z"}]
  }"#;
  let err = analyze(&parse(json), &Config::default()).unwrap_err();
  assert!(err.to_string().contains("issues[].state"));
}

#[test]
fn trends_are_flat_replay_when_enabled() {
  let config = Config {
    emit_trends: true,
    ..Config::default()
  };
  let out = analyze(&empty_snapshot(), &config).unwrap();
  let trends = out.trends.expect("trends enabled");
  assert_eq!(trends.daily, vec![out.score; 7]);
  assert_eq!(trends.weekly, vec![out.score; 4]);
  assert_eq!(trends.monthly, vec![out.score; 2]);
}

#[test]
fn output_serializes_lowercase_enums() {
  let out = analyze(&empty_snapshot(), &Config::default()).unwrap();
  let json = serde_json::to_string(&out).unwrap();
  assert!(json.contains(r#""risk_level":"low""#));
  assert!(json.contains(r#""session_policy":"commit_only""#));
  assert!(!json.contains("trends"));
}

#[test]
fn heavy_activity_reaches_high_risk() {
  // 40 night commits on weekends: late_night 25 (cap) + weekend 20 (cap),
  // plus 5 open issues (10) and starved breaks (10) and long sessions (20 cap)
  // = 85 -> high, not critical.
  let commits: Vec<String> = (0..40)
    .map(|i| format!(r#"{{"timestamp": "2025-01-18T23:{:02}:00Z", "author": "alice"}}"#, i % 60))
    .collect();
  let issues: Vec<String> = (0..5)
    .map(|_| r#"{"state": "open", "created_at": "2025-01-10T09:00:00Z"}"#.to_string())
    .collect();
  let json = format!(
    r#"{{
      "window_days": 30,
      "commits": [{}],
      "issues": [{}],
      "sessions": [
        {{"duration_minutes": 300.0}}, {{"duration_minutes": 300.0}},
        {{"duration_minutes": 300.0}}, {{"duration_minutes": 300.0}},
        {{"duration_minutes": 300.0}}
      ],
      "daily_break_minutes": [5.0, 5.0]
    }}"#,
    commits.join(","),
    issues.join(",")
  );
  let out = analyze(&parse(&json), &Config::default()).unwrap();
  assert_eq!(out.factors.late_night_work, 25.0);
  assert_eq!(out.factors.weekend_work, 20.0);
  assert_eq!(out.factors.long_sessions, 20.0);
  assert_eq!(out.factors.low_breaks, 10.0);
  assert_eq!(out.factors.stress_indicators, 10.0);
  assert_eq!(out.score, 85);
  assert_eq!(out.risk_level, RiskLevel::High);

  // Everything but high_frequency fires, in factor order.
  assert_eq!(out.factors.high_frequency, 0.0);
  assert_eq!(out.recommendations.len(), 5);
  assert!(out.recommendations[0].contains("22:00"));
  assert!(out.recommendations[1].contains("weekends"));
  assert!(out.recommendations[2].contains("15-minute break"));
  assert!(out.recommendations[3].contains("break time"));
  assert!(out.recommendations[4].contains("pending issues"));
}
