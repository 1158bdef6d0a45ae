use crate::count::{Confidence, CountError, MagnitudeEntry, ParsedCount, resolve_count};
use crate::gate::{SkipDecision, SkipOptions, decide_resolved};

/// One resolved input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub raw: String,
    pub parsed: Result<ParsedCount, CountError>,
    pub decision: SkipDecision,
}

impl Evaluation {
    pub fn new(
        raw: &str,
        options: &SkipOptions,
    ) -> Self {
        let parsed = resolve_count(raw);
        let decision = decide_resolved(&parsed, options);
        Self {
            raw: raw.to_string(),
            parsed,
            decision,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.parsed.is_err()
    }
}

/// `raw<TAB>value<TAB>confidence<TAB>decision`
pub fn format_evaluation(eval: &Evaluation) -> String {
    let (value, confidence) = match &eval.parsed {
        Ok(parsed) => (
            parsed.value.to_string(),
            match parsed.confidence {
                Confidence::Exact => "exact",
                Confidence::Unmatched => "unmatched",
            },
        ),
        Err(CountError::MalformedCount { .. }) => ("-".to_string(), "malformed"),
        Err(CountError::Overflow { .. }) => ("-".to_string(), "overflow"),
    };
    format!(
        "{}\t{}\t{}\t{}",
        eval.raw,
        value,
        confidence,
        eval.decision.as_str()
    )
}

/// `token<TAB>magnitude<TAB>language`
pub fn format_entry(entry: &MagnitudeEntry) -> String {
    format!("{}\t{}\t{}", entry.token, entry.magnitude, entry.language)
}
