//! Validation utilities
//!
//! The presentation layer collects raw strings; these helpers turn them into
//! the typed values the engine expects, so malformed input is rejected
//! before it ever reaches an operation.

use crate::traits::*;
use crate::types::*;

/// Parse a user-supplied amount string into minor units
pub fn parse_amount(input: &str) -> BankResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| BankError::Validation(format!("Amount '{}' is not numeric", input.trim())))
}

/// Parse a user-supplied pin string
pub fn parse_pin(input: &str) -> BankResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| BankError::Validation("Pin must be numeric".to_string()))
}

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i64) -> BankResult<()> {
    if amount <= 0 {
        Err(BankError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that an owner name is valid
pub fn validate_owner_name(name: &str) -> BankResult<()> {
    if name.trim().is_empty() {
        return Err(BankError::Validation(
            "Owner name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(BankError::Validation(
            "Owner name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Enhanced account validator with detailed checks
pub struct EnhancedAccountValidator;

impl AccountValidator for EnhancedAccountValidator {
    fn validate_account(&self, account: &Account) -> BankResult<()> {
        validate_owner_name(&account.owner)?;

        if account.username.is_empty() {
            return Err(BankError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }

        // Stock pins are four digits
        if !(1000..=9999).contains(&account.pin) {
            return Err(BankError::Validation(
                "Pin must be a four-digit number".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_closure(&self, _account: &Account) -> BankResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250").unwrap(), 250);
        assert_eq!(parse_amount("  -30 ").unwrap(), -30);
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12.5").is_err());
    }

    #[test]
    fn test_parse_pin() {
        assert_eq!(parse_pin("1111").unwrap(), 1111);
        assert!(parse_pin("pin").is_err());
        assert!(parse_pin("-1").is_err());
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(1).is_ok());
        assert!(validate_positive_amount(0).is_err());
        assert!(validate_positive_amount(-5).is_err());
    }

    #[test]
    fn test_enhanced_validator_pin_rule() {
        let account = Account::new("Jonas Schmedtmann".to_string(), 1111, BigDecimal::from(1));
        assert!(EnhancedAccountValidator.validate_account(&account).is_ok());

        let short_pin = Account::new("Jonas Schmedtmann".to_string(), 42, BigDecimal::from(1));
        assert!(EnhancedAccountValidator
            .validate_account(&short_pin)
            .is_err());
    }
}
