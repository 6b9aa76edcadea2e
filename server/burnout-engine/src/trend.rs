//! Placeholder trend series for dashboard callers.

use crate::types::Trends;

/// Flat replay of the current score: 7 daily, 4 weekly, 2 monthly entries.
/// A genuine trend needs a persisted score history, which lives with the
/// caller, not the engine.
pub fn flat_replay(score: u8) -> Trends {
  Trends {
    daily: vec![score; 7],
    weekly: vec![score; 4],
    monthly: vec![score; 2],
  }
}
