//! # Validation Module
//!
//! Input validation for the sales-entry form and the catalog dataset.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI arguments (clap)                                         │
//! │  └── Type validation (integers, dates as text)                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Sales entry (journal.rs)                                     │
//! │  └── THIS MODULE: quantity, product id, sale date                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stats engine                                                 │
//! │  └── Trusts its input; nothing is re-checked there                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pos_core::validation::{parse_sale_date, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//! let date = parse_sale_date("2024-03-15").unwrap();
//! assert_eq!(date.to_string(), "2024-03-15");
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Date format used by the entry form and the persisted log.
pub const SALE_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// Record Sale form: quantity = 5
///       │
///       ▼
/// validate_quantity(5) ← THIS FUNCTION
///       │
///       ├── qty <= 0?  → "quantity must be positive"
///       ├── qty > 999? → "quantity must be between 1 and 999"
///       └── OK → Transaction created
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in the smallest currency unit.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a catalog product id (ids start at 1).
pub fn validate_product_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a sale date in `YYYY-MM-DD` form.
///
/// ## Example
/// ```rust
/// use pos_core::validation::parse_sale_date;
///
/// assert!(parse_sale_date("2024-02-29").is_ok());
/// assert!(parse_sale_date("2023-02-29").is_err());
/// assert!(parse_sale_date("").is_err());
/// ```
pub fn parse_sale_date(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, SALE_DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
