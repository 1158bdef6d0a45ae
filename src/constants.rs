// Centralized defaults, mirroring the extension's stored options
pub const DEFAULT_SKIP_THRESHOLD: u64 = 500;
pub const DEFAULT_SKIP_ENABLED: bool = false;
pub const DEFAULT_LOG_FILTER: &str = "warn";
