//! Normalize inbound snapshots into canonical internal Snapshot models.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::EngineError;
use crate::types::*;

/// UTC offsets beyond ±14 h do not exist.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Parse and validate an InboundSnapshot into a canonical Snapshot.
pub fn normalize(raw: &InboundSnapshot) -> Result<Snapshot, EngineError> {
  if raw.window_days <= 0 {
    return Err(EngineError::validation("window_days", "must be positive"));
  }

  if raw.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
    return Err(EngineError::validation(
      "utc_offset_minutes",
      "must be within +/-840 minutes",
    ));
  }
  // Range-checked above, so the conversion cannot fail.
  let offset = FixedOffset::east_opt(raw.utc_offset_minutes * 60)
    .ok_or_else(|| EngineError::validation("utc_offset_minutes", "invalid offset"))?;

  let commits = raw
    .commits
    .iter()
    .map(|c| {
      Ok(Commit {
        timestamp: parse_timestamp("commits[].timestamp", &c.timestamp)?,
        author: c.author.clone(),
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  let issues = raw
    .issues
    .iter()
    .map(|i| {
      let state = IssueState::from_str_loose(&i.state).ok_or_else(|| {
        EngineError::validation("issues[].state", "expected open|closed")
      })?;
      let created_at = parse_timestamp("issues[].created_at", &i.created_at)?;
      let closed_at = match &i.closed_at {
        Some(t) => Some(parse_timestamp("issues[].closed_at", t)?),
        None => None,
      };
      Ok(Issue {
        state,
        created_at,
        closed_at,
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  let sessions = match &raw.sessions {
    Some(list) => {
      let parsed = list
        .iter()
        .map(|s| {
          if !s.duration_minutes.is_finite() || s.duration_minutes < 0.0 {
            return Err(EngineError::validation(
              "sessions[].duration_minutes",
              "must be finite and non-negative",
            ));
          }
          Ok(Session {
            duration_minutes: s.duration_minutes,
          })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
      Some(parsed)
    }
    None => None,
  };

  if let Some(breaks) = &raw.daily_break_minutes {
    if breaks.iter().any(|m| !m.is_finite() || *m < 0.0) {
      return Err(EngineError::validation(
        "daily_break_minutes",
        "entries must be finite and non-negative",
      ));
    }
  }

  Ok(Snapshot {
    window_days: raw.window_days,
    offset,
    commits,
    issues,
    sessions,
    daily_break_minutes: raw.daily_break_minutes.clone(),
  })
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, EngineError> {
  DateTime::parse_from_rfc3339(value)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| EngineError::validation(field, &format!("invalid RFC3339: {}", e)))
}
