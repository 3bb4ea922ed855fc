//! # Validation Module
//!
//! Checks the console runs on raw input before calling
//! [`Ledger::register`](crate::Ledger::register), which itself accepts
//! anything.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt (inquire validator)                                   │
//! │  ├── Calls the validators below on each keystroke submit               │
//! │  └── Immediate user feedback, re-prompt on error                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: validate_new_item (THIS MODULE)                              │
//! │  └── Builds the Item only from input that passed every check           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger::register                                             │
//! │  └── No checks, always appends                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use supply_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("Luvas").is_ok());
//! assert_eq!(validate_quantity(" 12 ").unwrap(), 12);
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::expiry::parse_expiry;
use crate::normalize::is_numeric;
use crate::types::Item;
use crate::{MAX_NAME_LENGTH, MAX_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_NAME_LENGTH` characters
/// - Must not read as a number (`"12"`, `"3,5"`)
///
/// ## Returns
/// The trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    if is_numeric(name) {
        return Err(ValidationError::Numeric {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a typed quantity.
///
/// ## Rules
/// - Must be a whole number
/// - Must be between 0 and `MAX_QUANTITY`
pub fn validate_quantity(text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let value: i64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if !(0..=i64::from(MAX_QUANTITY)).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::from(MAX_QUANTITY),
        });
    }

    // In range, so the conversion cannot truncate
    Ok(value as u32)
}

/// Validates a typed expiry (`YYYY-MM-DD`, optional `Validade:` label).
pub fn validate_expiry(text: &str) -> ValidationResult<NaiveDate> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "expiry".to_string(),
        });
    }

    parse_expiry(text).ok_or_else(|| ValidationError::InvalidFormat {
        field: "expiry".to_string(),
        reason: "expected a valid date as YYYY-MM-DD".to_string(),
    })
}

// =============================================================================
// Item Validator
// =============================================================================

/// Validates every field and builds the [`Item`] to register.
///
/// The expiry text is stored trimmed, label included, as typed.
pub fn validate_new_item(name: &str, quantity: &str, expiry: &str) -> ValidationResult<Item> {
    let name = validate_item_name(name)?;
    let quantity = validate_quantity(quantity)?;
    validate_expiry(expiry)?;

    Ok(Item::new(name, quantity, expiry.trim()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("  Luvas ").unwrap(), "Luvas");
        assert!(validate_item_name("Álcool 70").is_ok());

        assert!(matches!(
            validate_item_name("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_name("42"),
            Err(ValidationError::Numeric { .. })
        ));
        assert!(matches!(
            validate_item_name("1,5"),
            Err(ValidationError::Numeric { .. })
        ));
        assert!(matches!(
            validate_item_name(&"á".repeat(MAX_NAME_LENGTH + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        // Length counts characters, not bytes
        assert!(validate_item_name(&"á".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity("0"), Ok(0));
        assert_eq!(validate_quantity(" 20 "), Ok(20));
        assert_eq!(validate_quantity(&MAX_QUANTITY.to_string()), Ok(MAX_QUANTITY));

        assert!(validate_quantity("").is_err());
        assert!(validate_quantity("-1").is_err());
        assert!(validate_quantity("2.5").is_err());
        assert!(validate_quantity("dez").is_err());
        assert!(validate_quantity(&(MAX_QUANTITY + 1).to_string()).is_err());
    }

    #[test]
    fn test_validate_expiry() {
        assert_eq!(
            validate_expiry("Validade: 2026-02-01"),
            Ok(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
        );
        assert!(matches!(
            validate_expiry(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_expiry("2026-02-30"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_new_item() {
        let item = validate_new_item(" Gaze ", "3", " 2028-01-01 ").unwrap();
        assert_eq!(item, Item::new("Gaze", 3, "2028-01-01"));

        assert!(validate_new_item("Gaze", "3", "amanhã").is_err());
        assert!(validate_new_item("7", "3", "2028-01-01").is_err());
    }
}
