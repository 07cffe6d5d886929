//! Input validation utilities for farm record front-ends
//!
//! The record service accepts any well-typed value. These checks are for
//! the presentation layer, which is responsible for what users type in.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Validate that a text input is not blank
pub fn validate_non_empty(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Value cannot be empty");
    }
    Ok(())
}

/// Validate that an amount (acreage, quantity, threshold) is not negative
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Value cannot be negative");
    }
    Ok(())
}

/// Parse a decimal amount, accepting surrounding whitespace and
/// scientific notation such as `1e3`
pub fn parse_decimal(input: &str) -> Result<Decimal, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("No number entered");
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| "Invalid number")
}

/// Parse a 1-based menu selection into an index into a list of `len` items
pub fn parse_selection(input: &str, len: usize) -> Result<usize, &'static str> {
    let number: usize = input.trim().parse().map_err(|_| "Invalid selection")?;
    if number == 0 || number > len {
        return Err("Invalid selection");
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("North Field").is_ok());
        assert!(validate_non_empty("").is_err());
        assert!(validate_non_empty("   ").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::new(255, 1)).is_ok());
        assert!(validate_non_negative(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("25").unwrap(), Decimal::from(25));
        assert_eq!(parse_decimal(" 10.5 ").unwrap(), Decimal::new(105, 1));
        assert_eq!(parse_decimal("-3").unwrap(), Decimal::from(-3));
        assert_eq!(parse_decimal("1e3").unwrap(), Decimal::from(1000));
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("ten").is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3).unwrap(), 0);
        assert_eq!(parse_selection(" 3 ", 3).unwrap(), 2);
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("-1", 3).is_err());
        assert!(parse_selection("abc", 3).is_err());
        assert!(parse_selection("1", 0).is_err());
    }
}
