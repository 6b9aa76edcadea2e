//! Engine configuration with sane defaults.
//!
//! Factor caps and multipliers are fixed policy constants (see `factors`);
//! only the knobs that genuinely vary between callers live here.

/// When the "resolve pending issues" advisory fires. Both variants exist in
/// the wild; callers pick one rather than the engine guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressAdviceTrigger {
  /// Fire when the computed stress factor exceeds 5.
  OverThreshold,
  /// Fire whenever the stress factor is positive (any open issue).
  AnyOpenIssue,
}

/// Tunable behavior for analysis output.
#[derive(Debug, Clone)]
pub struct Config {
  pub stress_advice: StressAdviceTrigger,
  /// Emit the flat-replay trends block (7 daily / 4 weekly / 2 monthly
  /// copies of the current score). Off by default; it is decoration, not
  /// a historical series.
  pub emit_trends: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      stress_advice: StressAdviceTrigger::OverThreshold,
      emit_trends: false,
    }
  }
}
