//! Per-factor scoring rules: six independently capped behavioral signals.
//!
//! Each factor is computed from the snapshot alone, clamped to [0, cap], and
//! summed by the caller. Caps are fixed policy constants totalling 100.

use chrono::{Datelike, Timelike, Weekday};

use crate::types::{Factors, SessionPolicy, Snapshot};

pub const LATE_NIGHT_CAP: f64 = 25.0;
pub const WEEKEND_CAP: f64 = 20.0;
pub const LONG_SESSIONS_CAP: f64 = 20.0;
pub const HIGH_FREQUENCY_CAP: f64 = 15.0;
pub const LOW_BREAKS_CAP: f64 = 10.0;
pub const STRESS_CAP: f64 = 10.0;

/// Commits per day above this mark start counting toward high frequency.
const HIGH_FREQUENCY_THRESHOLD: f64 = 10.0;
/// Commit density standing in for long sessions when no tracker is connected.
const FALLBACK_DENSITY_THRESHOLD: f64 = 15.0;
/// A tracked session longer than 4 h counts as a long session.
const LONG_SESSION_MINUTES: f64 = 4.0 * 60.0;
/// Under 30 min of daily break time counts against the developer.
const MIN_DAILY_BREAK_MINUTES: f64 = 30.0;

/// Compute all six factors plus the session policy that was applied.
pub fn compute_factors(snapshot: &Snapshot) -> (Factors, SessionPolicy) {
  let commits_per_day = snapshot.commits.len() as f64 / snapshot.window_days as f64;
  let (long_sessions, policy) = long_sessions(snapshot, commits_per_day);

  let factors = Factors {
    late_night_work: late_night_work(snapshot),
    weekend_work: weekend_work(snapshot),
    long_sessions,
    high_frequency: high_frequency(commits_per_day),
    low_breaks: low_breaks(snapshot),
    stress_indicators: stress_indicators(snapshot),
  };
  (factors, policy)
}

/// Commits between 22:00 and 06:59 local time, 2 points each.
fn late_night_work(snapshot: &Snapshot) -> f64 {
  let night_commits = snapshot
    .commits
    .iter()
    .filter(|c| {
      let hour = c.timestamp.with_timezone(&snapshot.offset).hour();
      hour >= 22 || hour <= 6
    })
    .count();
  clamp(night_commits as f64 * 2.0, LATE_NIGHT_CAP)
}

/// Commits on Saturday or Sunday local time, 3 points each.
fn weekend_work(snapshot: &Snapshot) -> f64 {
  let weekend_commits = snapshot
    .commits
    .iter()
    .filter(|c| {
      let day = c.timestamp.with_timezone(&snapshot.offset).weekday();
      day == Weekday::Sat || day == Weekday::Sun
    })
    .count();
  clamp(weekend_commits as f64 * 3.0, WEEKEND_CAP)
}

/// Policy A (tracker connected): sessions over 4 h, 4 points each.
/// Policy B (commit-only): commit density above 15/day, 2 points per excess.
fn long_sessions(snapshot: &Snapshot, commits_per_day: f64) -> (f64, SessionPolicy) {
  match &snapshot.sessions {
    Some(sessions) => {
      let long = sessions
        .iter()
        .filter(|s| s.duration_minutes > LONG_SESSION_MINUTES)
        .count();
      (
        clamp(long as f64 * 4.0, LONG_SESSIONS_CAP),
        SessionPolicy::TimeTracking,
      )
    }
    None => {
      let value = if commits_per_day > FALLBACK_DENSITY_THRESHOLD {
        clamp(
          (commits_per_day - FALLBACK_DENSITY_THRESHOLD) * 2.0,
          LONG_SESSIONS_CAP,
        )
      } else {
        0.0
      };
      (value, SessionPolicy::CommitOnly)
    }
  }
}

/// Commit rate above 10/day, 2 points per excess commit/day.
fn high_frequency(commits_per_day: f64) -> f64 {
  if commits_per_day > HIGH_FREQUENCY_THRESHOLD {
    clamp((commits_per_day - HIGH_FREQUENCY_THRESHOLD) * 2.0, HIGH_FREQUENCY_CAP)
  } else {
    0.0
  }
}

/// Average daily break under 30 min, half a point per missing minute.
/// Contributes 0 without break data.
fn low_breaks(snapshot: &Snapshot) -> f64 {
  let breaks = match &snapshot.daily_break_minutes {
    Some(b) if !b.is_empty() => b,
    _ => return 0.0,
  };
  let avg = breaks.iter().sum::<f64>() / breaks.len() as f64;
  if avg < MIN_DAILY_BREAK_MINUTES {
    clamp((MIN_DAILY_BREAK_MINUTES - avg) * 0.5, LOW_BREAKS_CAP)
  } else {
    0.0
  }
}

/// Open issues, 2 points each.
fn stress_indicators(snapshot: &Snapshot) -> f64 {
  let open = snapshot
    .issues
    .iter()
    .filter(|i| i.state == crate::types::IssueState::Open)
    .count();
  clamp(open as f64 * 2.0, STRESS_CAP)
}

fn clamp(raw: f64, cap: f64) -> f64 {
  raw.max(0.0).min(cap)
}
