/// Whether the trailing text of a count string was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    /// Bare number, or an abbreviation found in the magnitude table.
    Exact,
    /// Trailing text was present but matched no token; the number is unscaled.
    Unmatched,
}

/// A like count resolved from its displayed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedCount {
    pub value: u64,
    pub confidence: Confidence,
}

impl ParsedCount {
    pub fn is_exact(&self) -> bool {
        self.confidence == Confidence::Exact
    }
}

/// Exact decimal value: `digits / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decimal {
    pub digits: u128,
    pub scale: u32,
}

impl Decimal {
    /// Multiply by `magnitude` and floor. `None` when the result does not fit a `u64`.
    pub fn scale_floor(
        &self,
        magnitude: u64,
    ) -> Option<u64> {
        let product = self.digits.checked_mul(u128::from(magnitude))?;
        let divisor = 10u128.checked_pow(self.scale)?;
        u64::try_from(product / divisor).ok()
    }
}

/// Failure to resolve a count string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// The input has no leading digit.
    MalformedCount { input: String },
    /// The number is too large to represent.
    Overflow { input: String },
}

impl std::fmt::Display for CountError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::MalformedCount { input } => {
                write!(f, "malformed count {input:?}: no leading digit")
            }
            Self::Overflow { input } => write!(f, "count {input:?} is too large"),
        }
    }
}

impl std::error::Error for CountError {}
