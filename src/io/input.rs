use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Where the count strings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

/// Collect the count strings, one per non-blank line for file and stdin input.
pub fn read_counts(source: &InputSource) -> Result<Vec<String>> {
    match source {
        InputSource::Args(counts) => Ok(counts.clone()),
        InputSource::File(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            read_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        InputSource::Stdin => read_lines(std::io::stdin().lock()).context("Failed to read stdin"),
    }
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut counts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            counts.push(trimmed.to_string());
        }
    }
    Ok(counts)
}
