//! Parsing of display price strings such as `"₹500"` or `"$89.99"`.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Parses a currency-prefixed price into a non-negative decimal.
///
/// Everything before the first digit is treated as the currency prefix
/// (`₹`, `$`, `Rs.`, whitespace, or mis-encoded glyph bytes). A `.`
/// directly before the first digit is kept unless the prefix contains a
/// letter, so `"$.50"` is half a unit while `"Rs.500"` is five hundred.
/// Comma digit-group separators are ignored.
pub fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidPrice {
        price: raw.to_string(),
    };

    let trimmed = raw.trim();
    let first_digit = trimmed.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
    let (prefix, digits) = trimmed.split_at(first_digit);

    if prefix.contains('-') {
        return Err(invalid());
    }

    let leading_point = prefix.ends_with('.') && !prefix.chars().any(char::is_alphabetic);
    let mut numeric = String::with_capacity(digits.len() + 2);
    if leading_point {
        numeric.push_str("0.");
    }
    numeric.extend(digits.chars().filter(|c| *c != ','));

    if !numeric.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    Decimal::from_str(&numeric).map_err(|_| invalid())
}
