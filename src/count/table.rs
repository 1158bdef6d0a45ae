//! Locale abbreviation tokens and the magnitude each one stands for.
//!
//! Tokens are lower case and compared byte for byte. A token string may only
//! appear once across all languages: where two languages spell the same token
//! with different meanings, the first language listed keeps it and the other
//! goes without. The built-in list is checked for duplicates at compile time.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const THOUSAND: u64 = 1_000;
const TEN_THOUSAND: u64 = 10_000;
const LAKH: u64 = 100_000;
const MILLION: u64 = 1_000_000;
const CRORE: u64 = 10_000_000;
const HUNDRED_MILLION: u64 = 100_000_000;
const BILLION: u64 = 1_000_000_000;

/// One abbreviation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeEntry {
    pub token: &'static str,
    pub language: &'static str,
    pub magnitude: u64,
}

const fn entry(
    token: &'static str,
    language: &'static str,
    magnitude: u64,
) -> MagnitudeEntry {
    MagnitudeEntry {
        token,
        language,
        magnitude,
    }
}

// New languages go at the end; do not add a token another language already owns.
pub const BUILTIN_ENTRIES: &[MagnitudeEntry] = &[
    entry("b", "English", BILLION),
    entry("m", "English", MILLION),
    entry("k", "English", THOUSAND),
    entry("mln", "Italian", MILLION),
    entry("lakh", "Indian English", LAKH),
    entry("crore", "Indian English", CRORE),
    entry("mil", "Portuguese", THOUSAND),
    entry("mio", "French", MILLION),
    entry("md", "French", BILLION),
    entry("mrd", "German", BILLION),
    entry("tsd", "German", THOUSAND),
    entry("億", "Japanese", HUNDRED_MILLION),
    entry("万", "Japanese", TEN_THOUSAND),
    entry("亿", "Chinese (Simplified)", HUNDRED_MILLION),
    entry("萬", "Chinese (Traditional)", TEN_THOUSAND),
    entry("млн", "Russian", MILLION),
    entry("млрд", "Russian", BILLION),
    entry("тыс", "Russian", THOUSAND),
    // करोड़, लाख, हज़ार. The nukta letters are listed both with a combining
    // nukta (NFC) and precomposed, since pages emit either.
    entry("\u{0915}\u{0930}\u{094B}\u{0921}\u{093C}", "Hindi", CRORE),
    entry("\u{0915}\u{0930}\u{094B}\u{095C}", "Hindi", CRORE),
    entry("\u{0932}\u{093E}\u{0916}", "Hindi", LAKH),
    entry("\u{0939}\u{091C}\u{093C}\u{093E}\u{0930}", "Hindi", THOUSAND),
    entry("\u{0939}\u{095B}\u{093E}\u{0930}", "Hindi", THOUSAND),
    entry("مليون", "Arabic", MILLION),
    entry("مليار", "Arabic", BILLION),
    entry("ألف", "Arabic", THOUSAND),
    entry("억", "Korean", HUNDRED_MILLION),
    entry("만", "Korean", TEN_THOUSAND),
    entry("천", "Korean", THOUSAND),
    entry("milyon", "Turkish", MILLION),
    entry("milyar", "Turkish", BILLION),
    entry("bin", "Turkish", THOUSAND),
    entry("triệu", "Vietnamese", MILLION),
    entry("tỷ", "Vietnamese", BILLION),
    entry("nghìn", "Vietnamese", THOUSAND),
    entry("ล้าน", "Thai", MILLION),
    entry("พันล้าน", "Thai", BILLION),
    entry("พัน", "Thai", THOUSAND),
    entry("mld", "Dutch", BILLION),
    entry("εκ", "Greek", MILLION),
    entry("δισ", "Greek", BILLION),
    entry("χιλ", "Greek", THOUSAND),
    entry("mn", "Swedish", MILLION),
    entry("t", "Swedish", THOUSAND),
];

const fn same_token(
    a: &str,
    b: &str,
) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn entries_are_valid(entries: &[MagnitudeEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        if entries[i].token.is_empty() || entries[i].magnitude == 0 {
            return false;
        }
        let mut j = i + 1;
        while j < entries.len() {
            if same_token(entries[i].token, entries[j].token) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    entries_are_valid(BUILTIN_ENTRIES),
    "built-in magnitude table has an empty, zero or duplicate token"
);

static BUILTIN: Lazy<MagnitudeTable> = Lazy::new(|| {
    MagnitudeTable::from_validated(
        BUILTIN_ENTRIES
            .iter()
            .map(|e| (e.token.to_string(), e.magnitude)),
    )
});

/// Rejected table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    EmptyToken,
    ZeroMagnitude { token: String },
    DuplicateToken { token: String },
}

impl std::fmt::Display for TableError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "magnitude table token must not be empty"),
            Self::ZeroMagnitude { token } => write!(f, "token {token:?} has zero magnitude"),
            Self::DuplicateToken { token } => {
                write!(f, "token {token:?} is defined more than once")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Immutable token -> magnitude lookup.
#[derive(Debug, Clone, Default)]
pub struct MagnitudeTable {
    magnitudes: HashMap<String, u64>,
    longest_token: usize,
}

impl MagnitudeTable {
    /// The table shared by every caller of [`crate::resolve_count`].
    pub fn builtin() -> &'static MagnitudeTable {
        &BUILTIN
    }

    /// Build a table, refusing empty tokens, zero magnitudes and duplicates.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (token, magnitude) in entries {
            let token = token.into();
            if token.is_empty() {
                return Err(TableError::EmptyToken);
            }
            if magnitude == 0 {
                return Err(TableError::ZeroMagnitude { token });
            }
            if table.magnitudes.contains_key(&token) {
                return Err(TableError::DuplicateToken { token });
            }
            table.insert(token, magnitude);
        }
        Ok(table)
    }

    fn from_validated(entries: impl Iterator<Item = (String, u64)>) -> Self {
        let mut table = Self::default();
        for (token, magnitude) in entries {
            table.insert(token, magnitude);
        }
        table
    }

    fn insert(
        &mut self,
        token: String,
        magnitude: u64,
    ) {
        self.longest_token = self.longest_token.max(token.chars().count());
        self.magnitudes.insert(token, magnitude);
    }

    /// Exact lookup, no case folding.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<u64> {
        self.magnitudes.get(token).copied()
    }

    /// Length in chars of the longest token.
    pub fn longest_token(&self) -> usize {
        self.longest_token
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}
