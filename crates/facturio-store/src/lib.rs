//! # facturio-store: Persistence Layer for Facturio
//!
//! This crate persists the Facturio collections as keyed JSON files on
//! local disk - the Rust rendition of the web build's localStorage
//! service, with the same whole-collection read/write contract.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Facturio Data Flow                               │
//! │                                                                         │
//! │  Editor / client-details UI                                            │
//! │       │  (documents already recomputed by facturio-core)               │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  facturio-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────────────────────┐  │   │
//! │  │   │     Store     │    │           Repositories             │  │   │
//! │  │   │  (store.rs)   │◄───│ DocumentRepository                 │  │   │
//! │  │   │               │    │ ClientRepository                   │  │   │
//! │  │   │ keyed JSON    │    │ SupplierRepository                 │  │   │
//! │  │   │ atomic writes │    │ ProfileRepository                  │  │   │
//! │  │   └───────────────┘    └────────────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <root>/facturio_docs.json, facturio_clients.json, ...                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle, collection keys, atomic JSON read/write
//! - [`error`] - Store error types
//! - [`repository`] - Per-collection repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! use facturio_store::Store;
//!
//! # fn main() -> Result<(), facturio_store::StoreError> {
//! let store = Store::open("/path/to/data")?;
//!
//! let documents = store.documents().list()?;
//! let profile = store.profile().load()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{keys, Store};

// Repository re-exports for convenience
pub use repository::client::ClientRepository;
pub use repository::document::DocumentRepository;
pub use repository::profile::ProfileRepository;
pub use repository::supplier::SupplierRepository;
