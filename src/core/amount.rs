use crate::errors::{LedgerError, Result};

/// Parses a user-entered amount. Accepts `12.50` and `12,50`; rejects negatives.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount("amount is required".into()));
    }
    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(format!("`{}` is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(LedgerError::InvalidAmount(format!(
            "`{}` is not a finite number",
            trimmed
        )));
    }
    if value < 0.0 {
        return Err(LedgerError::InvalidAmount(format!(
            "`{}` is negative; choose income or expense instead",
            trimmed
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_comma_decimals() {
        assert_eq!(parse_amount("1000").unwrap(), 1000.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_amount("12,50").unwrap(), 12.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn parses_exponent_notation() {
        assert_eq!(parse_amount("1e3").unwrap(), 1000.0);
        assert_eq!(parse_amount("2.5E2").unwrap(), 250.0);
        assert_eq!(parse_amount("1e308").unwrap(), 1e308);
        assert_eq!(parse_amount("1e-2").unwrap(), 0.01);
    }

    #[test]
    fn rejects_exponents_beyond_f64() {
        // Parses to infinity.
        assert!(parse_amount("1e309").unwrap_err().is_input_error());
        assert!(parse_amount("-1e3").is_err());
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = parse_amount("abc").unwrap_err();
        assert!(err.is_input_error());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }
}
