//! Splits a displayed count into its numeric prefix and trailing unit text.
//!
//! Grouping and decimal separators vary by locale ("1,234", "1.234",
//! "1 234", "2,5", "١٫٢"), so they are classified by position rather than by
//! character.

use crate::count::types::{CountError, Decimal};

/// Numeric prefix and the lower-cased text that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: Decimal,
    pub remainder: String,
}

/// Decimal digit value for ASCII, Arabic-Indic, Extended Arabic-Indic and Devanagari digits.
pub fn digit_value(c: char) -> Option<u8> {
    let base = match c {
        '0'..='9' => '0',
        '\u{0660}'..='\u{0669}' => '\u{0660}',
        '\u{06F0}'..='\u{06F9}' => '\u{06F0}',
        '\u{0966}'..='\u{096F}' => '\u{0966}',
        _ => return None,
    };
    Some((c as u32 - base as u32) as u8)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | '\'' | '\u{2019}' | '\u{066B}' | '\u{066C}' | '\u{00B7}'
        )
}

/// One separator inside the numeric run and the digits that follow it.
struct Group {
    separator: Option<char>,
    digits: Vec<u8>,
}

/// Fractional digits kept in the mantissa. Digits past this cannot change the
/// floored result for any power-of-ten magnitude up to 10^18.
pub const MAX_FRACTION_DIGITS: u32 = 18;

/// Extract the numeric prefix of `raw` as an exact decimal.
///
/// `is_unit` is asked whether the remainder starts with a known abbreviation;
/// a lone separator before three digits is only read as a decimal point when
/// it does ("1.999k" is 1.999 thousand, "1,234 likes" is 1234).
pub fn normalize(
    raw: &str,
    is_unit: impl FnOnce(&str) -> bool,
) -> Result<Normalized, CountError> {
    let text = raw.trim_start();
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    match chars.first() {
        Some(&(_, c)) if digit_value(c).is_some() => {}
        _ => {
            return Err(CountError::MalformedCount {
                input: raw.to_string(),
            });
        }
    }

    let mut groups = vec![Group {
        separator: None,
        digits: Vec::new(),
    }];
    let mut end = text.len();
    for (i, &(pos, c)) in chars.iter().enumerate() {
        if let Some(d) = digit_value(c) {
            if let Some(group) = groups.last_mut() {
                group.digits.push(d);
            }
            continue;
        }
        let next_is_digit = chars
            .get(i + 1)
            .is_some_and(|&(_, n)| digit_value(n).is_some());
        if is_separator(c) && next_is_digit {
            groups.push(Group {
                separator: Some(c),
                digits: Vec::new(),
            });
            continue;
        }
        end = pos;
        break;
    }

    let remainder = fold_case(text[end..].trim());
    let unit_follows = !remainder.is_empty() && is_unit(&remainder);
    let decimal_at = decimal_group(&groups, unit_follows);

    let mut value = Decimal::default();
    for (idx, group) in groups.iter().enumerate() {
        let fractional = decimal_at.is_some_and(|at| idx >= at);
        for &d in &group.digits {
            if fractional && value.scale == MAX_FRACTION_DIGITS {
                break;
            }
            value.digits = value
                .digits
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(d)))
                .ok_or_else(|| CountError::Overflow {
                    input: raw.to_string(),
                })?;
            if fractional {
                value.scale += 1;
            }
        }
    }

    Ok(Normalized { value, remainder })
}

/// Lower-case with Unicode rules, undoing the Greek word-final sigma so
/// "ΔΙΣ" folds to the table's "δισ".
fn fold_case(text: &str) -> String {
    text.to_lowercase().replace('ς', "σ")
}

/// Index of the group that starts after the decimal separator, if any.
///
/// Whitespace always groups. Only the last punctuation separator can be the
/// decimal point, and only when nothing but digits follow it before the end
/// of the run. It is decimal when the digits after it are not a group of
/// three, when an earlier separator used a different character, or when it
/// stands alone in front of a known abbreviation.
fn decimal_group(
    groups: &[Group],
    unit_follows: bool,
) -> Option<usize> {
    let punct: Vec<usize> = groups
        .iter()
        .enumerate()
        .filter(|(_, g)| g.separator.is_some_and(|c| !c.is_whitespace()))
        .map(|(i, _)| i)
        .collect();
    let &last = punct.last()?;
    if last + 1 != groups.len() {
        return None;
    }
    let sep = groups[last].separator;
    let mixed = punct[..punct.len() - 1]
        .iter()
        .any(|&i| groups[i].separator != sep);
    let lone = punct.len() == 1 && unit_follows;
    if groups[last].digits.len() != 3 || mixed || lone {
        Some(last)
    } else {
        None
    }
}
