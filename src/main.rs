use anyhow::Result;
use like_gate::config::Config;
use like_gate::constants::DEFAULT_LOG_FILTER;
use like_gate::count::table::BUILTIN_ENTRIES;
use like_gate::io::input::read_counts;
use like_gate::output::{Evaluation, format_entry, format_evaluation};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code when at least one count could not be read.
const EXIT_MALFORMED: u8 = 3;

fn main() -> Result<ExitCode> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;

    if config.list_tokens {
        for entry in BUILTIN_ENTRIES {
            println!("{}", format_entry(entry));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let counts = read_counts(&config.source)?;
    tracing::debug!(
        count = counts.len(),
        threshold = config.options.threshold.threshold,
        enabled = config.options.enabled,
        "resolving counts"
    );

    let mut malformed = 0usize;
    for raw in &counts {
        let eval = Evaluation::new(raw, &config.options);
        if eval.is_malformed() {
            malformed += 1;
        }
        println!("{}", format_evaluation(&eval));
    }

    if malformed > 0 {
        tracing::debug!(malformed, "some counts could not be resolved");
        return Ok(ExitCode::from(EXIT_MALFORMED));
    }
    Ok(ExitCode::SUCCESS)
}
