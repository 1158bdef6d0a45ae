pub mod decision;
pub mod threshold;

pub use decision::{SkipDecision, SkipOptions, decide, decide_resolved};
pub use threshold::{ThresholdConfig, should_skip};
