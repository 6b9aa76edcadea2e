//! Burnout Scoring Engine — deterministic, rule-based.
//!
//! Maps a bounded window of developer activity (commits, issues, optional
//! time-tracking sessions) to a 0–100 burnout risk score with capped
//! per-factor breakdowns, a risk level, and advisory recommendations.
//!
//! No AI, no DB, no network; pure computation over an in-memory snapshot.
//! Stateless and idempotent: safe to call concurrently, identical input
//! yields identical output.

pub mod config;
pub mod error;
pub mod factors;
pub mod normalize;
pub mod recommend;
pub mod score;
pub mod trend;
pub mod types;

pub use config::{Config, StressAdviceTrigger};
pub use error::EngineError;
pub use types::{Analysis, Factors, InboundSnapshot, RiskLevel, SessionPolicy, Snapshot};

impl InboundSnapshot {
  /// Parse a snapshot from raw JSON (the binary's stdin contract).
  pub fn from_json(raw: &str) -> Result<Self, EngineError> {
    Ok(serde_json::from_str(raw)?)
  }
}

/// Validate an inbound snapshot and run the engine on it.
pub fn analyze(raw: &InboundSnapshot, config: &Config) -> Result<Analysis, EngineError> {
  let snapshot = normalize::normalize(raw)?;
  Ok(analyze_snapshot(&snapshot, config))
}

/// Run the engine on an already-normalized snapshot (total, no I/O).
pub fn analyze_snapshot(snapshot: &Snapshot, config: &Config) -> Analysis {
  let (factors, session_policy) = factors::compute_factors(snapshot);
  let score = score::total_score(&factors);
  let risk_level = score::classify(score);
  let recommendations = recommend::recommendations(&factors, config);
  let trends = config.emit_trends.then(|| trend::flat_replay(score));

  Analysis {
    score,
    risk_level,
    factors,
    session_policy,
    recommendations,
    trends,
  }
}
