//! Advisory recommendations derived from computed factor values.

use crate::config::{Config, StressAdviceTrigger};
use crate::types::Factors;

/// One fixed advisory per factor over its trigger, in factor order.
/// Never empty: falls back to an affirming message when nothing fires.
pub fn recommendations(factors: &Factors, config: &Config) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();

  if factors.late_night_work > 15.0 {
    out.push("Try to avoid working after 22:00".into());
  }
  if factors.weekend_work > 10.0 {
    out.push("Consider reducing work on weekends".into());
  }
  if factors.long_sessions > 15.0 {
    out.push("Take a 15-minute break every 2 hours".into());
  }
  if factors.high_frequency > 10.0 {
    out.push("Reduce commit frequency to avoid overload".into());
  }
  if factors.low_breaks > 5.0 {
    out.push("Increase break time during the workday".into());
  }

  let stress_fires = match config.stress_advice {
    StressAdviceTrigger::OverThreshold => factors.stress_indicators > 5.0,
    StressAdviceTrigger::AnyOpenIssue => factors.stress_indicators > 0.0,
  };
  if stress_fires {
    out.push("Resolve pending issues to reduce stress".into());
  }

  if out.is_empty() {
    out.push("Keep maintaining a good balance!".into());
  }
  out
}
