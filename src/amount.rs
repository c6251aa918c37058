use std::fmt;

use thiserror::Error;

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
///
/// Four fractional digits is the asset-quantity display precision; fiat
/// values reuse the same representation and are rounded to 2 digits
/// whenever they are derived rather than typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

/// Error from [`Amount::parse`]: the input contained no parseable number.
#[derive(Debug, Error)]
#[error("invalid amount '{0}'")]
pub struct ParseAmountError(pub String);

impl Amount {
    const SCALE: i64 = 10_000;

    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub fn to_float(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Round to 2 fractional digits, half away from zero.
    pub fn round2(self) -> Self {
        Amount(((self.0 as f64) / 100.0).round() as i64 * 100)
    }

    /// Parse user-entered text: currency symbols, grouping commas and any
    /// other non-numeric characters are stripped before parsing. A string
    /// that holds no single valid number (empty, "abc", "1.2.3") is an error.
    pub fn parse(raw: &str) -> Result<Self, ParseAmountError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        cleaned
            .parse::<f64>()
            .map(Amount::from_float)
            .map_err(|_| ParseAmountError(raw.to_string()))
    }

    /// Render with the given number of fractional digits (0..=4),
    /// rounding half away from zero.
    pub fn format(self, decimals: u8) -> String {
        let decimals = u32::from(decimals.min(4));
        let divisor = 10_i64.pow(4 - decimals);
        let v = ((self.0 as f64) / divisor as f64).round() as i64;
        let sign = if v < 0 { "-" } else { "" };
        let abs = v.abs();
        let scale = 10_i64.pow(decimals);
        let whole = abs / scale;
        let frac = abs % scale;
        if decimals == 0 {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{frac:0width$}", width = decimals as usize)
        }
    }
}

/// Normalize user input to a value: anything malformed is exactly zero.
/// The engine never surfaces a parse error to the caller; the explicit
/// [`Amount::parse`] result exists so callers that do care can observe
/// the failure before it is normalized away.
pub fn parse_or_zero(raw: &str) -> Amount {
    Amount::parse(raw).unwrap_or_default()
}

/// Display precision implied by raw fiat input: 0 digits when the text has
/// no decimal point, otherwise the typed fraction length capped at 2.
pub fn input_decimals(raw: &str) -> u8 {
    match raw.split_once('.') {
        Some((_, frac)) => frac
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .count()
            .min(2) as u8,
        None => 0,
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(4))
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}
