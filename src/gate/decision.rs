//! What the player integration does with a displayed count.

use crate::constants::DEFAULT_SKIP_ENABLED;
use crate::count::{CountError, ParsedCount, resolve_count};
use crate::gate::threshold::{ThresholdConfig, should_skip};
use tracing::warn;

/// The persisted skip options, passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipOptions {
    pub enabled: bool,
    pub threshold: ThresholdConfig,
}

impl Default for SkipOptions {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SKIP_ENABLED,
            threshold: ThresholdConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDecision {
    Skip,
    Keep,
    /// The count could not be read; treated as "do not skip".
    Undetermined,
}

impl SkipDecision {
    pub fn is_skip(self) -> bool {
        self == Self::Skip
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Keep => "keep",
            Self::Undetermined => "undetermined",
        }
    }
}

/// Decide whether to skip the video whose like count reads `raw`.
pub fn decide(
    raw: &str,
    options: &SkipOptions,
) -> SkipDecision {
    if !options.enabled {
        return SkipDecision::Keep;
    }
    decide_resolved(&resolve_count(raw), options)
}

/// Same as [`decide`] for a count the caller has already resolved.
pub fn decide_resolved(
    resolved: &Result<ParsedCount, CountError>,
    options: &SkipOptions,
) -> SkipDecision {
    if !options.enabled {
        return SkipDecision::Keep;
    }
    match resolved {
        Ok(parsed) if should_skip(parsed, &options.threshold) => SkipDecision::Skip,
        Ok(_) => SkipDecision::Keep,
        Err(err) => {
            warn!("{err}; not skipping");
            SkipDecision::Undetermined
        }
    }
}
