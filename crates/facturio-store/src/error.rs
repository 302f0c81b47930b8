//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Filesystem error (std::io::Error)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the collection key as context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Embedding application decides: surface, retry, or abandon             │
//! │                                                                         │
//! │  One deliberate difference from the web build: corrupt JSON is an      │
//! │  ERROR here, not an empty collection. Returning empty would let the    │
//! │  next save silently overwrite whatever the user had.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem failure (permissions, disk full, ...).
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A collection file exists but does not parse. The file is left
    /// untouched so nothing is lost.
    #[error("collection '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value failed to serialize (should not occur with the domain
    /// types; kept as a typed error rather than a panic).
    #[error("collection '{key}' failed to serialize: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
