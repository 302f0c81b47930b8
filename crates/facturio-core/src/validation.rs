//! # Validation Module
//!
//! Boundary validation for Facturio forms and imports.
//!
//! The engine deliberately validates nothing (negative quantities are
//! legal discount rows; malformed numerics coerce to zero). These
//! checks exist for the layers that want to reject input before it is
//! stored: the client form, the payment dialog, the profile screen.
//!
//! ## Usage
//! ```rust
//! use facturio_core::money::Money;
//! use facturio_core::validation::validate_payment_amount;
//!
//! assert!(validate_payment_amount(Money::from_cents(5000)).is_ok());
//! assert!(validate_payment_amount(Money::zero()).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, Rate};
use crate::{MAX_DESIGNATION_LEN, MAX_DOCUMENT_ITEMS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a client (or supplier) display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a line-item designation.
///
/// Empty is allowed - rows are routinely created first and described
/// after. Only the length is bounded.
pub fn validate_designation(designation: &str) -> ValidationResult<()> {
    if designation.len() > MAX_DESIGNATION_LEN {
        return Err(ValidationError::TooLong {
            field: "designation".to_string(),
            max: MAX_DESIGNATION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a payment amount.
///
/// ## Rules
/// - Must be strictly positive; zero and negative amounts are rejected
///
/// The ledger additionally treats non-positive amounts as a no-op, so
/// state stays intact even if a caller skips this check.
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a percentage rate (VAT or deposit).
///
/// ## Rules
/// - Must be between 0 and 10000 basis points (0% to 100%)
pub fn validate_rate(rate: Rate) -> ValidationResult<()> {
    if rate.bps() > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a document's row count before adding another.
pub fn validate_item_count(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_DOCUMENT_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "document items".to_string(),
            min: 0,
            max: MAX_DOCUMENT_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
