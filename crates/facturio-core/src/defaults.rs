//! # Partial-Document Merge
//!
//! The OCR/import collaborator produces partial documents: whatever
//! fields it could extract, nothing more. Older persisted documents
//! predate some fields entirely. Both arrive as a [`DocumentPatch`] and
//! go through one explicit apply-defaults step before they ever reach
//! the engine or an editor - no implicit optional-field fallbacks
//! scattered through the UI.
//!
//! ## Defaults
//! ```text
//! has_vat            false
//! vat_rate           20%               (DEFAULT_VAT_RATE_BPS)
//! has_deposit        doc_type == Quote (deposits are a quote thing)
//! deposit_rate       50%               (DEFAULT_DEPOSIT_RATE_BPS)
//! template           Classic
//! status             Draft
//! currency           "DH"              (DEFAULT_CURRENCY)
//! items              []
//! ```
//!
//! The merged document is recomputed before it is returned, so its
//! stored totals are consistent from the first observation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::recompute_in_place;
use crate::types::{lenient, DocStatus, DocType, Document, LineItem, TemplateKind};
use crate::{DEFAULT_CURRENCY, DEFAULT_DEPOSIT_RATE_BPS, DEFAULT_VAT_RATE_BPS};

/// A partial document: every field optional.
///
/// Numeric fields use the lenient-optional coercion: absent or `null`
/// stays `None` (so the default applies), any present value coerces
/// the same way [`Document`]'s fields do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<DocType>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<DocStatus>,
    #[serde(default)]
    pub template: Option<TemplateKind>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_address: Option<String>,
    #[serde(default)]
    pub client_ice: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
    #[serde(default)]
    pub has_vat: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub vat_rate_bps: Option<u32>,
    #[serde(default)]
    pub has_deposit: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub deposit_rate_bps: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Document {
    /// Merges a partial document over the documented defaults.
    ///
    /// `today` fills a missing issue date - the caller owns the clock.
    /// The returned document has been recomputed and is internally
    /// consistent.
    pub fn from_patch(patch: DocumentPatch, today: NaiveDate) -> Document {
        let doc_type = patch.doc_type.unwrap_or_default();

        let mut doc = Document {
            id: patch
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            client_id: patch.client_id,
            doc_type,
            number: patch.number.unwrap_or_default(),
            date: patch.date.unwrap_or(today),
            status: patch.status.unwrap_or_default(),
            template: patch.template.unwrap_or_default(),
            client_name: patch.client_name.unwrap_or_default(),
            client_address: patch.client_address.unwrap_or_default(),
            client_ice: patch.client_ice,
            client_email: patch.client_email,
            client_phone: patch.client_phone,
            subject: patch.subject.unwrap_or_default(),
            items: patch.items.unwrap_or_default(),
            sub_total_cents: 0,
            has_vat: patch.has_vat.unwrap_or(false),
            vat_rate_bps: patch.vat_rate_bps.unwrap_or(DEFAULT_VAT_RATE_BPS),
            vat_amount_cents: 0,
            total_ttc_cents: 0,
            // Deposits default on for quotes only; an imported invoice
            // does not suddenly request an advance.
            has_deposit: patch.has_deposit.unwrap_or(doc_type == DocType::Quote),
            deposit_rate_bps: patch.deposit_rate_bps.unwrap_or(DEFAULT_DEPOSIT_RATE_BPS),
            deposit_amount_cents: 0,
            notes: patch.notes,
            currency: patch.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        };

        recompute_in_place(&mut doc);
        doc
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_empty_patch_yields_documented_defaults() {
        let doc = Document::from_patch(DocumentPatch::default(), today());

        assert_eq!(doc.doc_type, DocType::Quote);
        assert!(!doc.has_vat);
        assert_eq!(doc.vat_rate_bps, DEFAULT_VAT_RATE_BPS);
        assert!(doc.has_deposit); // quote → deposit on
        assert_eq!(doc.deposit_rate_bps, DEFAULT_DEPOSIT_RATE_BPS);
        assert_eq!(doc.template, TemplateKind::Classic);
        assert_eq!(doc.status, DocStatus::Draft);
        assert_eq!(doc.currency, DEFAULT_CURRENCY);
        assert_eq!(doc.date, today());
        assert!(doc.items.is_empty());
        assert!(!doc.id.is_empty());
    }

    #[test]
    fn test_invoice_patch_defaults_deposit_off() {
        let patch = DocumentPatch {
            doc_type: Some(DocType::Invoice),
            ..DocumentPatch::default()
        };
        let doc = Document::from_patch(patch, today());
        assert!(!doc.has_deposit);
    }

    #[test]
    fn test_explicit_deposit_survives_on_invoice() {
        let patch = DocumentPatch {
            doc_type: Some(DocType::Invoice),
            has_deposit: Some(true),
            ..DocumentPatch::default()
        };
        assert!(Document::from_patch(patch, today()).has_deposit);
    }

    #[test]
    fn test_merged_document_is_recomputed() {
        // An OCR result with items but stale/absent totals
        let json = r#"{
            "type": "invoice",
            "clientName": "Chantier Anfa",
            "items": [
                {"id": "r1", "designation": "Peinture", "quantityMilli": 2000, "unitPriceCents": 5000, "totalCents": 0}
            ],
            "hasVat": true
        }"#;
        let patch: DocumentPatch = serde_json::from_str(json).unwrap();
        let doc = Document::from_patch(patch, today());

        assert_eq!(doc.items[0].total_cents, 10_000);
        assert_eq!(doc.sub_total_cents, 10_000);
        assert_eq!(doc.vat_rate_bps, DEFAULT_VAT_RATE_BPS);
        assert_eq!(doc.vat_amount_cents, 2_000);
        assert_eq!(doc.total_ttc_cents, 12_000);
    }

    #[test]
    fn test_patch_lenient_numerics() {
        let json = r#"{"vatRateBps": "1400", "depositRateBps": null}"#;
        let patch: DocumentPatch = serde_json::from_str(json).unwrap();
        assert_eq!(patch.vat_rate_bps, Some(1400));
        assert_eq!(patch.deposit_rate_bps, None);

        let doc = Document::from_patch(patch, today());
        assert_eq!(doc.vat_rate_bps, 1400);
        assert_eq!(doc.deposit_rate_bps, DEFAULT_DEPOSIT_RATE_BPS);
    }

    #[test]
    fn test_patch_preserves_supplied_date_and_number() {
        let patch = DocumentPatch {
            number: Some("FAC-2025-7".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 11, 2),
            ..DocumentPatch::default()
        };
        let doc = Document::from_patch(patch, today());
        assert_eq!(doc.number, "FAC-2025-7");
        assert_eq!(doc.date, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
    }
}
