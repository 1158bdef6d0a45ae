use crate::constants::DEFAULT_SKIP_THRESHOLD;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "like-gate")]
#[command(
    about = "Resolve localized like counts (\"1.2K\", \"3 万\", \"2,5 mln\") to integers \
                   and report which videos fall below the skip threshold."
)]
pub struct Cli {
    /// Like counts as displayed. Read one per line from --file or stdin when omitted.
    pub counts: Vec<String>,

    /// Read counts from this file, one per line.
    #[arg(short = 'f', long = "file", conflicts_with = "counts")]
    pub file: Option<PathBuf>,

    /// Skip videos with fewer than this many likes. Decimals round up, negatives clamp to 0.
    #[arg(
        short = 't',
        long = "threshold",
        default_value_t = DEFAULT_SKIP_THRESHOLD as f64,
        allow_negative_numbers = true
    )]
    pub threshold: f64,

    /// Report every video as kept, as when auto-skip is switched off.
    #[arg(long = "disabled")]
    pub disabled: bool,

    /// Print the abbreviation table and exit.
    #[arg(long = "list-tokens")]
    pub list_tokens: bool,
}
