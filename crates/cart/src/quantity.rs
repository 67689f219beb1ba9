use core::str::FromStr;

use serde::{Deserialize, Serialize};

use till_core::{DomainError, DomainResult, ValueObject};

/// Requested quantity: a validated positive integer.
///
/// Parses from the free-form text of the quantity field; empty, non-numeric
/// and zero input are all rejected with a validation error instead of being
/// coerced to a default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Build from a raw count. Zero is rejected.
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("quantity is required"));
        }
        let value: u32 = trimmed.parse().map_err(|_| {
            DomainError::validation(format!("quantity must be a whole number, got '{trimmed}'"))
        })?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("3".parse::<Quantity>().unwrap().get(), 3);
        assert_eq!("  12 ".parse::<Quantity>().unwrap().get(), 12);
    }

    #[test]
    fn rejects_empty_input() {
        let err = "   ".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        for input in ["abc", "1.5", "-2", "2x"] {
            let err = input.parse::<Quantity>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "input: {input}");
        }
    }

    #[test]
    fn rejects_zero() {
        let err = "0".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(Quantity::new(0).is_err());
    }
}
