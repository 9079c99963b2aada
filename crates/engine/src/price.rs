use std::{fmt, str::FromStr};

use crate::EngineError;

/// Price represented as **integer cents**.
///
/// Use this type for every price the engine stores or compares to avoid
/// floating-point drift. The wire talks decimals; the conversion happens at
/// the edges.
///
/// # Examples
///
/// ```rust
/// use engine::PriceCents;
///
/// let price = PriceCents::new(25_99);
/// assert_eq!(price.cents(), 2599);
/// assert_eq!(price.to_string(), "25.99");
/// ```
///
/// Parsing from query-string input (rejects > 2 decimals):
///
/// ```rust
/// use engine::PriceCents;
///
/// assert_eq!("10".parse::<PriceCents>().unwrap().cents(), 1000);
/// assert_eq!("10.5".parse::<PriceCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<PriceCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PriceCents(i64);

impl PriceCents {
    /// Creates a new price from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the price is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns the price as a decimal number of major units.
    ///
    /// Stored prices carry at most 2 fractional digits, so the result is
    /// exact for every value the engine accepts.
    #[must_use]
    pub fn major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts a decimal number of major units into cents.
    ///
    /// Rejects non-finite values and values with more than 2 decimal places.
    /// The sign is preserved; strict positivity is a validation concern, not
    /// a representation one.
    pub fn try_from_major(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidPrice(
                "price must be a finite number".to_string(),
            ));
        }

        let scaled = value * 100.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 {
            return Err(EngineError::InvalidPrice(
                "price cannot have more than 2 decimal places".to_string(),
            ));
        }
        if rounded.abs() >= 9.0e15 {
            return Err(EngineError::InvalidPrice("price too large".to_string()));
        }

        Ok(Self(rounded as i64))
    }
}

impl fmt::Display for PriceCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl From<i64> for PriceCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<PriceCents> for i64 {
    fn from(value: PriceCents) -> Self {
        value.0
    }
}

impl FromStr for PriceCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts an optional leading `+`/`-`. Filter bounds may legally be
    /// zero or negative, so no positivity check happens here.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidPrice("empty price".to_string());
        let invalid = || EngineError::InvalidPrice("invalid price".to_string());
        let overflow = || EngineError::InvalidPrice("price too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        if rest.is_empty() {
            return Err(empty());
        }

        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(EngineError::InvalidPrice(
                            "price cannot have more than 2 decimal places".to_string(),
                        ));
                    }
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Self(signed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_strings() {
        assert_eq!("12".parse::<PriceCents>().unwrap().cents(), 1200);
        assert_eq!("12.3".parse::<PriceCents>().unwrap().cents(), 1230);
        assert_eq!("12.34".parse::<PriceCents>().unwrap().cents(), 1234);
        assert_eq!("0".parse::<PriceCents>().unwrap().cents(), 0);
        assert_eq!("-4.50".parse::<PriceCents>().unwrap().cents(), -450);
        assert_eq!(" 7.25 ".parse::<PriceCents>().unwrap().cents(), 725);
    }

    #[test]
    fn rejects_bad_strings() {
        assert!("".parse::<PriceCents>().is_err());
        assert!("  ".parse::<PriceCents>().is_err());
        assert!("abc".parse::<PriceCents>().is_err());
        assert!("1.234".parse::<PriceCents>().is_err());
        assert!("1.2.3".parse::<PriceCents>().is_err());
        assert!(".5".parse::<PriceCents>().is_err());
        assert!("1,5".parse::<PriceCents>().is_err());
    }

    #[test]
    fn converts_major_units() {
        assert_eq!(PriceCents::try_from_major(25.99).unwrap().cents(), 2599);
        assert_eq!(PriceCents::try_from_major(10.0).unwrap().cents(), 1000);
        assert_eq!(PriceCents::try_from_major(0.01).unwrap().cents(), 1);
        assert_eq!(PriceCents::try_from_major(-3.5).unwrap().cents(), -350);
    }

    #[test]
    fn rejects_bad_major_units() {
        assert!(PriceCents::try_from_major(0.001).is_err());
        assert!(PriceCents::try_from_major(12.345).is_err());
        assert!(PriceCents::try_from_major(f64::NAN).is_err());
        assert!(PriceCents::try_from_major(f64::INFINITY).is_err());
    }

    #[test]
    fn displays_as_decimal() {
        assert_eq!(PriceCents::new(2599).to_string(), "25.99");
        assert_eq!(PriceCents::new(500).to_string(), "5.00");
        assert_eq!(PriceCents::new(-75).to_string(), "-0.75");
    }

    #[test]
    fn round_trips_major_units() {
        let price = PriceCents::try_from_major(25.99).unwrap();
        assert_eq!(price.major(), 25.99);
    }
}
