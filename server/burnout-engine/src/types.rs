//! Core types for the burnout engine (JSON contracts + internal models).

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound snapshot object from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundSnapshot {
  pub window_days: i64,
  /// Developer's UTC offset, applied before night/weekend classification.
  #[serde(default)]
  pub utc_offset_minutes: i32,
  pub commits: Vec<InboundCommit>,
  pub issues: Vec<InboundIssue>,
  /// Present (even empty) when a time-tracking integration is connected.
  #[serde(default)]
  pub sessions: Option<Vec<InboundSession>>,
  /// Per-day break minutes from a break-time data source.
  #[serde(default)]
  pub daily_break_minutes: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommit {
  pub timestamp: String,
  #[serde(default)]
  pub author: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundIssue {
  pub state: String,
  pub created_at: String,
  #[serde(default)]
  pub closed_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundSession {
  pub duration_minutes: f64,
}

// ---------------------------------------------------------------------------
// Issue state enum (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
  Open,
  Closed,
}

impl IssueState {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "open" => Some(Self::Open),
      "closed" => Some(Self::Closed),
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical internal snapshot after normalization + validation.
#[derive(Debug, Clone)]
pub struct Snapshot {
  pub window_days: i64,
  /// Offset the caller declared for the developer; all hour/weekday
  /// classification happens in this zone, never the process locale.
  pub offset: FixedOffset,
  pub commits: Vec<Commit>,
  pub issues: Vec<Issue>,
  pub sessions: Option<Vec<Session>>,
  pub daily_break_minutes: Option<Vec<f64>>,
}

#[derive(Debug, Clone)]
pub struct Commit {
  pub timestamp: DateTime<Utc>,
  pub author: String,
}

#[derive(Debug, Clone)]
pub struct Issue {
  pub state: IssueState,
  pub created_at: DateTime<Utc>,
  pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Session {
  pub duration_minutes: f64,
}

// ---------------------------------------------------------------------------
// Session policy
// ---------------------------------------------------------------------------

/// Which long-session rule set was applied, driven by data presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
  /// Real session durations available: sessions over 4 h count.
  TimeTracking,
  /// Commit-only fallback: long sessions inferred from commit density.
  CommitOnly,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Six independently capped factor values. Caps sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Factors {
  pub late_night_work: f64,
  pub weekend_work: f64,
  pub long_sessions: f64,
  pub high_frequency: f64,
  pub low_breaks: f64,
  pub stress_indicators: f64,
}

impl Factors {
  pub fn sum(&self) -> f64 {
    self.late_night_work
      + self.weekend_work
      + self.long_sessions
      + self.high_frequency
      + self.low_breaks
      + self.stress_indicators
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
  Critical,
}

/// Placeholder trend series: a flat replay of the current score, not a
/// historical record (the engine holds no score store).
#[derive(Debug, Clone, Serialize)]
pub struct Trends {
  pub daily: Vec<u8>,
  pub weekly: Vec<u8>,
  pub monthly: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
  pub score: u8,
  pub risk_level: RiskLevel,
  pub factors: Factors,
  pub session_policy: SessionPolicy,
  pub recommendations: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trends: Option<Trends>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
