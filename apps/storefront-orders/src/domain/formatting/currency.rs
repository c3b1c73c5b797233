//! VND currency formatting.
//!
//! Amounts are whole đồng. Thousands are grouped with `.` as in
//! `500.000 ₫`.

use rust_decimal::Decimal;

/// Suffix appended by [`format_currency_vnd`].
pub const VND_SUFFIX: &str = " ₫";

const SEPARATOR: char = '.';
const CURRENCY_SYMBOL: char = '₫';

/// Group the decimal digits of `amount` in threes from the right.
///
/// A negative amount keeps its sign in front of the grouped magnitude.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    group_digits(amount < 0, &amount.unsigned_abs().to_string())
}

/// [`format_currency`] followed by the đồng sign.
#[must_use]
pub fn format_currency_vnd(amount: i64) -> String {
    format!("{}{VND_SUFFIX}", format_currency(amount))
}

/// Format a decimal total, truncating any fractional đồng.
///
/// Totals beyond the `i64` range are grouped the same way.
#[must_use]
pub fn format_amount_vnd(amount: Decimal) -> String {
    let whole = amount.trunc();
    let negative = whole.is_sign_negative() && !whole.is_zero();
    format!(
        "{}{VND_SUFFIX}",
        group_digits(negative, &whole.abs().trunc().to_string())
    )
}

/// Insert [`SEPARATOR`] every three ASCII digits from the right.
fn group_digits(negative: bool, digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if negative {
        out.push('-');
    }

    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(ch);
    }

    out
}

/// Parse a string produced by [`format_currency`] or [`format_currency_vnd`].
///
/// Every `.` is removed before parsing, so grouping is not validated.
pub fn parse_currency(formatted: &str) -> Result<i64, CurrencyParseError> {
    let trimmed = formatted.trim();
    let trimmed = trimmed
        .strip_suffix(CURRENCY_SYMBOL)
        .map_or(trimmed, str::trim_end);

    let stripped: String = trimmed.chars().filter(|c| *c != SEPARATOR).collect();
    if stripped.is_empty() {
        return Err(CurrencyParseError::Empty);
    }

    let digits = stripped.strip_prefix('-').unwrap_or(&stripped);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CurrencyParseError::InvalidDigits {
            input: formatted.to_string(),
        });
    }

    stripped
        .parse::<i64>()
        .map_err(|_| CurrencyParseError::Overflow {
            input: formatted.to_string(),
        })
}

/// Failure to read a formatted amount back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyParseError {
    /// Nothing left after removing separators.
    #[error("empty currency string")]
    Empty,

    /// Something other than digits after removing separators.
    #[error("not a currency amount: {input:?}")]
    InvalidDigits {
        /// The rejected input.
        input: String,
    },

    /// Digits do not fit a 64-bit amount.
    #[error("currency amount out of range: {input:?}")]
    Overflow {
        /// The rejected input.
        input: String,
    },
}
