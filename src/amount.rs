//! Parsing and rendering of money amounts typed at the console.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::Error;

/// Parses a deposit amount entered by the user.
///
/// Surrounding whitespace is ignored. Plain decimal notation (`100`, `-5.25`)
/// and scientific notation (`1e3`, `2.5E-1`) are accepted. Amounts that do not
/// fit the decimal precision are rejected rather than rounded.
pub fn parse_amount(input: &str) -> Result<Decimal, Error> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidNumericInput(input.to_owned());
    if trimmed.is_empty() || trimmed.contains('_') {
        return Err(invalid());
    }
    match trimmed.split_once(['e', 'E']) {
        Some((_, exponent)) => {
            let exponent: i32 = exponent.parse().map_err(|_| invalid())?;
            if exponent.abs() > MAX_EXPONENT {
                return Err(invalid());
            }
            Decimal::from_scientific(trimmed).map_err(|_| invalid())
        }
        None => {
            let amount = Decimal::from_str(trimmed).map_err(|_| invalid())?;
            if fraction_digits(trimmed) > amount.normalize().scale() {
                return Err(invalid());
            }
            Ok(amount)
        }
    }
}

/// Significant digits after the decimal point, as typed.
fn fraction_digits(plain: &str) -> u32 {
    plain
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.trim_end_matches('0').len() as u32)
}

/// Largest exponent magnitude worth handing to the decimal parser; anything
/// beyond cannot be represented.
const MAX_EXPONENT: i32 = 56;

/// Renders an amount the way balances are shown to the user: trailing zeros
/// dropped, but always at least one fractional digit.
pub fn format_amount(amount: Decimal) -> String {
    let amount = amount.normalize();
    if amount.scale() == 0 {
        format!("{}.0", amount)
    } else {
        amount.to_string()
    }
}
