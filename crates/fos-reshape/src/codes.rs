//! Code unit formatting and parsing
//!
//! Hex dumps of UTF-16 code units, as printed when checking which
//! presentation forms a string was shaped into.

use std::fmt;

use crate::{ReshapeError, Result};

/// Display adapter printing code units as space-separated uppercase hex
pub struct CodeUnits<'a>(pub &'a [u16]);

impl fmt::Display for CodeUnits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{unit:04X}")?;
        }
        Ok(())
    }
}

/// Format code units as `"FEE6 FED3"`
pub fn format_code_units(units: &[u16]) -> String {
    CodeUnits(units).to_string()
}

/// Parse whitespace- or comma-separated hex code units.
///
/// Tokens may carry a `U+` or `0x` prefix.
pub fn parse_code_units(input: &str) -> Result<Vec<u16>> {
    let units = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<u16>>>()?;

    if units.is_empty() {
        return Err(ReshapeError::EmptyCodeList);
    }

    Ok(units)
}

fn parse_token(token: &str) -> Result<u16> {
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| token.strip_prefix(*prefix))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ReshapeError::InvalidCodeUnit(token.to_string()));
    }

    u16::from_str_radix(digits, 16).map_err(|_| ReshapeError::InvalidCodeUnit(token.to_string()))
}
