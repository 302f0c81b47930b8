//! # facturio-core: Pure Business Logic for Facturio
//!
//! This crate is the **heart** of Facturio, a browser-based quote and
//! invoice manager. It contains all business logic as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Facturio Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (browser)                         │   │
//! │  │    Editor UI ──► Client Details ──► Print Templates            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ calls after every field edit           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ facturio-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  engine   │  │  ledger   │  │   │
//! │  │   │ Document  │  │   Money   │  │ recompute │  │ summarize │  │   │
//! │  │   │  Client   │  │ Rate/Qty  │  │ self-heal │  │ payments  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  editor   │  │ numbering │  │ defaults  │  │   share   │  │   │
//! │  │   │ field ops │  │ schemes   │  │ patching  │  │   codec   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                facturio-store (Persistence Layer)               │   │
//! │  │          Keyed JSON collections: docs, clients, profile         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Document, Client, Payment, etc.)
//! - [`money`] - Money/Rate/Quantity fixed-point arithmetic (no floats!)
//! - [`engine`] - The recompute pass keeping document totals consistent
//! - [`editor`] - Field-level edit transitions (override state machine)
//! - [`ledger`] - Client balance rollup, payments, budget override
//! - [`numbering`] - Document number formatting and sequence strategies
//! - [`defaults`] - Partial-document merge over documented defaults
//! - [`share`] - Self-contained share payload codec
//! - [`validation`] - Boundary validation for forms/imports
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: recompute/summarize/format are deterministic
//! 2. **No I/O**: persistence, OCR, printing live in other crates
//! 3. **Integer Money**: cents, basis points, thousandth quantities
//! 4. **Total Engine**: malformed numerics coerce to zero, never panic
//! 5. **Callers own the clock**: `now`/`today` are always parameters
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use facturio_core::defaults::DocumentPatch;
//! use facturio_core::money::{Money, Quantity};
//! use facturio_core::types::Document;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let mut quote = Document::from_patch(DocumentPatch::default(), today);
//!
//! let row = quote.add_item();
//! quote.set_item_quantity(&row, Quantity::from_whole(3));
//! quote.set_item_unit_price(&row, Money::from_cents(10_000));
//! quote.set_vat_enabled(true);
//!
//! // Totals are already consistent - every mutator recomputes.
//! assert_eq!(quote.sub_total_cents, 30_000);
//! assert_eq!(quote.vat_amount_cents, 6_000);   // default 20% VAT
//! assert_eq!(quote.total_ttc_cents, 36_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod defaults;
pub mod editor;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod money;
pub mod numbering;
pub mod share;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use facturio_core::Document` instead of
// `use facturio_core::types::Document`

pub use defaults::DocumentPatch;
pub use engine::{recompute, recompute_in_place};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Quantity, Rate};
pub use numbering::{
    format_document_number, next_document_number, DocumentCount, NumberScheme, PeriodScan,
    SequenceStrategy,
};
pub use share::SharePayload;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default VAT rate: 20%, the standard Moroccan rate the original
/// deployments use. Applied by the defaults merge when a patch carries
/// no rate of its own.
pub const DEFAULT_VAT_RATE_BPS: u32 = 2_000;

/// Default deposit request: 50% of the grand total, the customary
/// advance on renovation quotes.
pub const DEFAULT_DEPOSIT_RATE_BPS: u32 = 5_000;

/// Default display currency.
pub const DEFAULT_CURRENCY: &str = "DH";

/// Maximum rows in a single document.
///
/// ## Business Reason
/// Keeps the per-keystroke recompute pass trivially cheap and prevents
/// runaway imports from producing unprintable documents.
pub const MAX_DOCUMENT_ITEMS: usize = 200;

/// Maximum length of a row designation, in bytes.
pub const MAX_DESIGNATION_LEN: usize = 500;
