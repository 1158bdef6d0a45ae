use crate::constants::DEFAULT_SKIP_THRESHOLD;
use crate::count::ParsedCount;

/// "Skip if fewer than this many likes."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdConfig {
    pub threshold: u64,
}

impl ThresholdConfig {
    pub const fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    /// Coerce a user-entered number. Negative and NaN clamp to zero, fractions
    /// round up (fewer than 2.5 likes means fewer than 3), huge values saturate.
    pub fn from_number(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self::new(0);
        }
        // `as` saturates at u64::MAX.
        Self::new(value.ceil() as u64)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_THRESHOLD)
    }
}

/// True when the count is strictly below the threshold.
///
/// An [`Unmatched`](crate::count::Confidence::Unmatched) count is compared
/// like any other; callers wanting to hold back on low confidence must check
/// `parsed.confidence` themselves.
pub fn should_skip(
    parsed: &ParsedCount,
    config: &ThresholdConfig,
) -> bool {
    parsed.value < config.threshold
}
