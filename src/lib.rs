pub mod cli;
pub mod config;
pub mod constants;
pub mod count;
pub mod gate;
pub mod io;
pub mod output;

pub use count::{
    Confidence, CountError, MagnitudeTable, ParsedCount, resolve_count, resolve_count_with,
};
pub use gate::{
    SkipDecision, SkipOptions, ThresholdConfig, decide, decide_resolved, should_skip,
};
