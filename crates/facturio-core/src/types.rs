//! # Domain Types
//!
//! Core domain types shared by the engine, the ledger, and the store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Document     │   │     Client      │   │    Supplier     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  number         │   │  payments[]     │   │  category       │       │
//! │  │  items[]        │   │  customTotal?   │   │                 │       │
//! │  │  totals         │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Document ──clientId──► Client      (optional foreign key)             │
//! │  Document.clientName etc.           (point-in-time SNAPSHOT, never a   │
//! │                                      live join - see below)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A document that references a client copies the client's contact
//! fields at link time. Editing the client record afterwards must not
//! rewrite history: an invoice printed last year shows last year's
//! address. Same discipline as freezing a product's price into a cart
//! line.
//!
//! ## Storage Representation
//! Monetary fields are raw `*_cents: i64`, rates `*_bps: u32` and
//! quantities `*_milli: i64`, with typed accessors ([`Money`], [`Rate`],
//! [`Quantity`]). Numeric fields deserialize leniently: absent, `null`,
//! or non-numeric input coerces to `0` instead of failing, so partial
//! documents from the OCR/import collaborator and half-typed editor
//! state both flow through the same types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, Quantity, Rate};
use crate::numbering::NumberScheme;

// =============================================================================
// Lenient Numeric Deserialization
// =============================================================================

/// Coercion helpers for numeric fields.
///
/// The documented input domain is total: malformed numeric input is
/// `0`, never an error. Numbers, numeric strings, `null`, and absent
/// fields are all accepted; anything else coerces to zero.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn to_i64(value: Option<Value>) -> i64 {
        match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(to_i64(Option::<Value>::deserialize(deserializer)?))
    }

    pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(to_i64(Option::<Value>::deserialize(deserializer)?)
            .clamp(0, u32::MAX as i64) as u32)
    }

    fn to_opt_i64(value: Option<Value>) -> Option<i64> {
        match value {
            None | Some(Value::Null) => None,
            other => Some(to_i64(other)),
        }
    }

    /// Patch variant: absent/null stays `None` (so defaults can apply),
    /// anything present coerces like the non-optional helpers.
    pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(to_opt_i64(Option::<Value>::deserialize(deserializer)?)
            .map(|v| v.clamp(0, u32::MAX as i64) as u32))
    }
}

// =============================================================================
// Document Enums
// =============================================================================

/// The kind of commercial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// A quote/estimate (devis). May carry a deposit request.
    Quote,
    /// An invoice (facture). Feeds the client ledger.
    Invoice,
}

impl Default for DocType {
    fn default() -> Self {
        DocType::Quote
    }
}

/// Workflow status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    /// Being edited, not yet sent to the client.
    Draft,
    /// Sent to the client.
    Sent,
    /// Invoice settled in full.
    Paid,
    /// Quote accepted by the client.
    Accepted,
}

impl Default for DocStatus {
    fn default() -> Self {
        DocStatus::Draft
    }
}

/// Print template selection. Rendering is an external collaborator;
/// the core only carries the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Classic,
    Minimal,
    Modern,
}

impl Default for TemplateKind {
    fn default() -> Self {
        TemplateKind::Classic
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a document: a priced line or a section header.
///
/// ## Total Modes
/// ```text
/// is_section_header  → contributes 0, quantity/price/total ignored
/// is_total_overridden → stored total is authoritative (manual entry)
/// neither             → total MUST equal quantity × unit_price
///                       (the engine self-heals any drift)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable identifier, unique within the document (UUID v4).
    pub id: String,

    /// Free-text label shown on the printed row.
    #[serde(default)]
    pub designation: String,

    /// Quantity in fixed-point thousandths.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub quantity_milli: i64,

    /// Unit price in cents.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub unit_price_cents: i64,

    /// Row total in cents: derived or manually fixed, per the flag below.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total_cents: i64,

    /// When true, `total_cents` is authoritative and recompute leaves it alone.
    #[serde(default)]
    pub is_total_overridden: bool,

    /// When true, this row is a display-only grouping header.
    #[serde(default)]
    pub is_section_header: bool,
}

impl LineItem {
    /// Creates a fresh regular row (quantity 1, price 0).
    pub fn new() -> Self {
        LineItem {
            id: uuid::Uuid::new_v4().to_string(),
            designation: String::new(),
            quantity_milli: Quantity::from_whole(1).milli(),
            unit_price_cents: 0,
            total_cents: 0,
            is_total_overridden: false,
            is_section_header: false,
        }
    }

    /// Creates a section-header row.
    pub fn section(designation: impl Into<String>) -> Self {
        LineItem {
            id: uuid::Uuid::new_v4().to_string(),
            designation: designation.into(),
            quantity_milli: 0,
            unit_price_cents: 0,
            total_cents: 0,
            is_total_overridden: true,
            is_section_header: true,
        }
    }

    /// Returns the quantity.
    #[inline]
    pub fn quantity(&self) -> Quantity {
        Quantity::from_milli(self.quantity_milli)
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the stored row total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// The formula total: `quantity × unit_price`, rounded to cents.
    #[inline]
    pub fn auto_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity())
    }

    /// The amount this row contributes to the document subtotal.
    ///
    /// Headers contribute zero; overridden rows contribute their stored
    /// total; everything else contributes the formula total.
    pub fn effective_total(&self) -> Money {
        if self.is_section_header {
            Money::zero()
        } else if self.is_total_overridden {
            self.total()
        } else {
            self.auto_total()
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

// =============================================================================
// Document
// =============================================================================

/// A quote or invoice.
///
/// The stored totals (`sub_total_cents` .. `deposit_amount_cents`) are
/// pure functions of `{items, has_vat, vat_rate_bps, has_deposit,
/// deposit_rate_bps}`; [`crate::engine::recompute`] is the only code
/// that writes them. They are persisted anyway so list views can show
/// amounts without re-running the engine over every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Optional link to a client record.
    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(rename = "type")]
    pub doc_type: DocType,

    /// Formatted document number, e.g. `7-1225` or `FAC-2025-7`.
    pub number: String,

    /// Issue date.
    #[ts(as = "String")]
    pub date: NaiveDate,

    #[serde(default)]
    pub status: DocStatus,

    #[serde(default)]
    pub template: TemplateKind,

    // --- Client snapshot (point-in-time copy, never a live join) ---
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default)]
    pub client_ice: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,

    /// Subject line, e.g. "Travaux de rénovation".
    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub items: Vec<LineItem>,

    // --- Derived totals (owned by the engine) ---
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub sub_total_cents: i64,

    #[serde(default)]
    pub has_vat: bool,

    /// VAT rate in basis points (2000 = 20%). Only applied when `has_vat`.
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub vat_rate_bps: u32,

    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub vat_amount_cents: i64,

    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total_ttc_cents: i64,

    /// Deposit toggle. Meaningful for quotes as a UI policy; the engine
    /// computes it for any document type that asks.
    #[serde(default)]
    pub has_deposit: bool,

    /// Deposit percentage in basis points (5000 = 50%).
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub deposit_rate_bps: u32,

    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub deposit_amount_cents: i64,

    #[serde(default)]
    pub notes: Option<String>,

    /// Display currency code, e.g. "DH". Pure label; no conversion.
    #[serde(default)]
    pub currency: String,
}

impl Document {
    #[inline]
    pub fn is_quote(&self) -> bool {
        self.doc_type == DocType::Quote
    }

    #[inline]
    pub fn is_invoice(&self) -> bool {
        self.doc_type == DocType::Invoice
    }

    #[inline]
    pub fn sub_total(&self) -> Money {
        Money::from_cents(self.sub_total_cents)
    }

    #[inline]
    pub fn vat_rate(&self) -> Rate {
        Rate::from_bps(self.vat_rate_bps)
    }

    #[inline]
    pub fn vat_amount(&self) -> Money {
        Money::from_cents(self.vat_amount_cents)
    }

    #[inline]
    pub fn total_ttc(&self) -> Money {
        Money::from_cents(self.total_ttc_cents)
    }

    #[inline]
    pub fn deposit_rate(&self) -> Rate {
        Rate::from_bps(self.deposit_rate_bps)
    }

    #[inline]
    pub fn deposit_amount(&self) -> Money {
        Money::from_cents(self.deposit_amount_cents)
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment recorded against a client.
///
/// Payments are append-only: once recorded they are never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Amount in cents. Always positive once recorded; the ledger
    /// rejects non-positive amounts as a no-op.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub amount_cents: i64,

    /// Free-form payment method, e.g. "Espèces", "Chèque", "Virement".
    pub method: String,

    #[serde(default)]
    pub note: Option<String>,
}

impl Payment {
    /// Creates a payment with a fresh id.
    pub fn new(
        amount: Money,
        method: impl Into<String>,
        date: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        Payment {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            amount_cents: amount.cents(),
            method: method.into(),
            note,
        }
    }

    /// Returns the payment amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Client
// =============================================================================

/// A client with payment history and an optional budget override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Identifiant Commun de l'Entreprise (Morocco).
    #[serde(default)]
    pub ice: String,

    /// Payment history, newest first. [`Client::record_payment`] is the
    /// only code that appends; it prepends to preserve the ordering.
    #[serde(default)]
    pub payments: Vec<Payment>,

    #[serde(default)]
    pub notes: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Manual total owed, replacing the invoice-derived sum when present.
    #[serde(default)]
    pub custom_total_cents: Option<i64>,

    /// Free-text justification for the override. An empty string is a
    /// real value, distinct from absent.
    #[serde(default)]
    pub custom_total_note: Option<String>,
}

impl Client {
    /// Creates an empty client record.
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Client {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            ice: String::new(),
            payments: Vec::new(),
            notes: None,
            created_at,
            custom_total_cents: None,
            custom_total_note: None,
        }
    }

    /// Returns the budget override as Money, if set.
    #[inline]
    pub fn custom_total(&self) -> Option<Money> {
        self.custom_total_cents.map(Money::from_cents)
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier contact. Carried for completeness; suppliers do not
/// participate in any financial rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    /// e.g. "Matériaux", "Transport", "Service".
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub ice: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Company Profile
// =============================================================================

/// The issuing company's identity, banking details, and numbering
/// preference. Exactly one profile exists per installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    /// Identifiant Commun de l'Entreprise.
    #[serde(default)]
    pub ice: Option<String>,
    /// Registre de Commerce.
    #[serde(default)]
    pub rc: Option<String>,
    /// Identifiant Fiscal.
    #[serde(default)]
    pub if_tax: Option<String>,
    #[serde(default)]
    pub cnss: Option<String>,
    #[serde(default)]
    pub patente: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub rib: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,

    /// Numbering scheme consumed by [`crate::numbering`].
    #[serde(default)]
    #[ts(as = "String")]
    pub doc_number_format: NumberScheme,

    /// Literal prefix prepended to every document number.
    #[serde(default)]
    pub doc_number_prefix: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: None,
            ice: None,
            rc: None,
            if_tax: None,
            cnss: None,
            patente: None,
            bank_name: None,
            rib: None,
            logo_url: None,
            doc_number_format: NumberScheme::default(),
            doc_number_prefix: String::new(),
        }
    }
}

// =============================================================================
// Client Financial Summary
// =============================================================================

/// Derived financial rollup for a client. Never stored - always
/// computed on read by [`Client::summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientFinancialSummary {
    /// Sum of `total_ttc` over the client's invoices. Reported raw even
    /// when an override is active, so the UI can show the crossed-out
    /// computed figure next to the manual one.
    pub invoice_total_cents: i64,

    /// Sum of `total_ttc` over the client's quotes (informational).
    pub quote_total_cents: i64,

    /// Whether a budget override is active.
    pub is_custom: bool,

    /// The effective total owed: the override when active, otherwise
    /// the invoice total.
    pub final_total_cents: i64,

    /// Sum of recorded payment amounts.
    pub total_paid_cents: i64,

    /// `final_total - total_paid`. Negative means overpayment/credit.
    pub balance_cents: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
