use crate::cli::Cli;
use crate::gate::{SkipOptions, ThresholdConfig};
use crate::io::input::InputSource;
use anyhow::Result;
use clap::Parser;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub source: InputSource,
    pub options: SkipOptions,
    pub list_tokens: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Self::from(Cli::parse()))
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.file, cli.counts.is_empty()) {
            (Some(path), _) => InputSource::File(path),
            (None, false) => InputSource::Args(cli.counts),
            (None, true) => InputSource::Stdin,
        };
        Config {
            source,
            options: SkipOptions {
                enabled: !cli.disabled,
                threshold: ThresholdConfig::from_number(cli.threshold),
            },
            list_tokens: cli.list_tokens,
        }
    }
}
