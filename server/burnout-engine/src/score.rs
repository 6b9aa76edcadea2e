//! Total score aggregation and risk-level classification.

use crate::types::{Factors, RiskLevel};

/// Total 0–100: sum of capped factors, rounded to the nearest integer.
pub fn total_score(factors: &Factors) -> u8 {
  factors.sum().min(100.0).round() as u8
}

/// Risk level from the integer score. Checked highest first.
pub fn classify(score: u8) -> RiskLevel {
  if score > 85 {
    RiskLevel::Critical
  } else if score > 70 {
    RiskLevel::High
  } else if score > 50 {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}
