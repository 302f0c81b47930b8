//! # Error Types
//!
//! Domain-specific error types for facturio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  facturio-core errors (this file)                                       │
//! │  ├── CoreError        - Domain errors (share codec, validation)        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  facturio-store errors (separate crate)                                │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  The ENGINE itself never errors: recompute, summarize, and the         │
//! │  number formatter are total over their documented input domain.        │
//! │  Malformed numerics coerce to zero at deserialization instead.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors outside the (total) computation engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A share payload that is not valid base64.
    #[error("share payload is not valid base64: {0}")]
    ShareEncoding(String),

    /// A share payload whose decoded bytes are not a document bundle.
    #[error("share payload is not a valid document bundle: {0}")]
    SharePayload(String),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These belong to the boundaries (forms, import) - the engine itself
/// accepts anything and coerces. Each variant maps to a user-facing
/// message.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
