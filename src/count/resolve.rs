use crate::count::normalize::normalize;
use crate::count::table::MagnitudeTable;
use crate::count::types::{Confidence, CountError, ParsedCount};
use tracing::debug;

/// Resolve a displayed like count ("1.2K", "3 万", "2,5 mln") with the built-in table.
pub fn resolve_count(raw: &str) -> Result<ParsedCount, CountError> {
    resolve_count_with(MagnitudeTable::builtin(), raw)
}

/// Resolve a displayed like count against `table`.
///
/// Unknown trailing text does not fail: the number is taken unscaled and the
/// result is marked [`Confidence::Unmatched`].
pub fn resolve_count_with(
    table: &MagnitudeTable,
    raw: &str,
) -> Result<ParsedCount, CountError> {
    let mut matched = None;
    let normalized = normalize(raw, |remainder| {
        matched = match_abbreviation(table, remainder);
        matched.is_some()
    })?;

    let (magnitude, confidence) = match matched {
        Some(magnitude) => (magnitude, Confidence::Exact),
        None if normalized.remainder.is_empty() => (1, Confidence::Exact),
        None => {
            debug!(
                input = raw,
                remainder = %normalized.remainder,
                "no abbreviation matched, using unscaled value"
            );
            (1, Confidence::Unmatched)
        }
    };

    let value = normalized
        .value
        .scale_floor(magnitude)
        .ok_or_else(|| CountError::Overflow {
            input: raw.to_string(),
        })?;

    Ok(ParsedCount { value, confidence })
}

/// Magnitude of the longest table token that prefixes `remainder`.
pub fn match_abbreviation(
    table: &MagnitudeTable,
    remainder: &str,
) -> Option<u64> {
    // Char boundaries of every non-empty prefix, longest first.
    let mut ends: Vec<usize> = remainder
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take(table.longest_token())
        .collect();
    ends.reverse();
    ends.into_iter()
        .find_map(|end| table.lookup(&remainder[..end]))
}
