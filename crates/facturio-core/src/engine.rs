//! # Document Recompute Engine
//!
//! Keeps a document's line items, subtotal, VAT, deposit, and grand
//! total mutually consistent.
//!
//! ## Recompute Pass
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        recompute(document)                              │
//! │                                                                         │
//! │  for each item, in order:                                               │
//! │    section header  ──► skip (contributes 0, fields untouched)           │
//! │    overridden      ──► contribute stored total (left as-is)             │
//! │    regular         ──► contribute qty × unit price,                     │
//! │                        rewrite stored total if it drifted (self-heal)   │
//! │                                                                         │
//! │  subTotal   = Σ contributions                                           │
//! │  vatAmount  = hasVat ? subTotal × vatRate : 0                           │
//! │  totalTTC   = subTotal + vatAmount                                      │
//! │  deposit    = hasDeposit && rate > 0 ? totalTTC × rate : 0              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pass is total (never errors), idempotent, and linear in the item
//! count - it runs after every keystroke in the editor, so there is no
//! room for hidden re-scans. The original app ran this as a reactive
//! effect; here it is an explicit call the mutation layer makes before
//! returning, which is what makes it trivially testable.

use crate::money::Money;
use crate::types::Document;

/// Recomputes every derived amount on the document, in place.
///
/// Returns `true` if anything was written - any self-healed row total
/// or any document-level total. Reactive consumers use the flag to
/// decide whether to emit a change signal; an unchanged document
/// produces no writes at all.
pub fn recompute_in_place(doc: &mut Document) -> bool {
    let mut changed = false;
    let mut sub_total = Money::zero();

    for item in &mut doc.items {
        if item.is_section_header {
            continue;
        }

        let auto_total = item.auto_total();

        if item.is_total_overridden {
            // Manual entry wins until the override is explicitly cleared.
            sub_total += item.total();
        } else {
            sub_total += auto_total;
            if item.total_cents != auto_total.cents() {
                item.total_cents = auto_total.cents();
                changed = true;
            }
        }
    }

    let vat_amount = if doc.has_vat {
        sub_total.apply_rate(doc.vat_rate())
    } else {
        Money::zero()
    };

    let total_ttc = sub_total + vat_amount;

    let deposit_amount = if doc.has_deposit && doc.deposit_rate_bps > 0 {
        total_ttc.apply_rate(doc.deposit_rate())
    } else {
        Money::zero()
    };

    if doc.sub_total_cents != sub_total.cents() {
        doc.sub_total_cents = sub_total.cents();
        changed = true;
    }
    if doc.vat_amount_cents != vat_amount.cents() {
        doc.vat_amount_cents = vat_amount.cents();
        changed = true;
    }
    if doc.total_ttc_cents != total_ttc.cents() {
        doc.total_ttc_cents = total_ttc.cents();
        changed = true;
    }
    if doc.deposit_amount_cents != deposit_amount.cents() {
        doc.deposit_amount_cents = deposit_amount.cents();
        changed = true;
    }

    changed
}

/// Pure form of [`recompute_in_place`]: returns a consistent copy,
/// leaving the input untouched.
pub fn recompute(doc: &Document) -> Document {
    let mut out = doc.clone();
    recompute_in_place(&mut out);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Quantity;
    use crate::types::{DocStatus, DocType, LineItem, TemplateKind};
    use chrono::NaiveDate;

    fn test_document(items: Vec<LineItem>) -> Document {
        Document {
            id: "doc-1".to_string(),
            client_id: None,
            doc_type: DocType::Quote,
            number: "1-0126".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            status: DocStatus::Draft,
            template: TemplateKind::Classic,
            client_name: String::new(),
            client_address: String::new(),
            client_ice: None,
            client_email: None,
            client_phone: None,
            subject: String::new(),
            items,
            sub_total_cents: 0,
            has_vat: false,
            vat_rate_bps: 2000,
            vat_amount_cents: 0,
            total_ttc_cents: 0,
            has_deposit: false,
            deposit_rate_bps: 5000,
            deposit_amount_cents: 0,
            notes: None,
            currency: "DH".to_string(),
        }
    }

    fn row(qty: i64, unit_price_cents: i64) -> LineItem {
        let mut item = LineItem::new();
        item.quantity_milli = Quantity::from_whole(qty).milli();
        item.unit_price_cents = unit_price_cents;
        item.total_cents = 0;
        item
    }

    #[test]
    fn test_self_healing_stale_total() {
        // qty 3 × 10.00 with a stale total of 9.99 → rewritten to 30.00
        let mut item = row(3, 1000);
        item.total_cents = 999;
        let mut doc = test_document(vec![item]);

        assert!(recompute_in_place(&mut doc));
        assert_eq!(doc.items[0].total_cents, 3000);
        assert_eq!(doc.sub_total_cents, 3000);
    }

    #[test]
    fn test_override_preserved_and_counted() {
        // Overridden total 500.00 on a 1 × 0.01 row: stored total wins
        let mut item = row(1, 1);
        item.total_cents = 50_000;
        item.is_total_overridden = true;
        let mut doc = test_document(vec![item]);

        recompute_in_place(&mut doc);
        assert_eq!(doc.items[0].total_cents, 50_000);
        assert_eq!(doc.sub_total_cents, 50_000);
    }

    #[test]
    fn test_header_excluded_and_untouched() {
        let mut header = LineItem::section("Phase 1");
        // Garbage in the ignored fields must survive the pass verbatim
        header.quantity_milli = 7_000;
        header.unit_price_cents = 1234;
        header.total_cents = 9999;
        let doc_items = vec![header.clone(), row(2, 5000)];
        let mut doc = test_document(doc_items);

        recompute_in_place(&mut doc);
        assert_eq!(doc.sub_total_cents, 10_000);
        assert_eq!(doc.items[0], header);
    }

    #[test]
    fn test_vat_math() {
        let mut doc = test_document(vec![row(1, 100_000)]);
        doc.has_vat = true;
        doc.vat_rate_bps = 2000;

        recompute_in_place(&mut doc);
        assert_eq!(doc.sub_total_cents, 100_000);
        assert_eq!(doc.vat_amount_cents, 20_000);
        assert_eq!(doc.total_ttc_cents, 120_000);
    }

    #[test]
    fn test_vat_disabled_zeroes_amount() {
        let mut doc = test_document(vec![row(1, 100_000)]);
        doc.has_vat = false;
        doc.vat_rate_bps = 2000;

        recompute_in_place(&mut doc);
        assert_eq!(doc.vat_amount_cents, 0);
        assert_eq!(doc.total_ttc_cents, doc.sub_total_cents);
    }

    #[test]
    fn test_deposit_math() {
        let mut doc = test_document(vec![row(1, 100_000)]);
        doc.has_vat = true;
        doc.vat_rate_bps = 2000;
        doc.has_deposit = true;
        doc.deposit_rate_bps = 5000;

        recompute_in_place(&mut doc);
        assert_eq!(doc.total_ttc_cents, 120_000);
        assert_eq!(doc.deposit_amount_cents, 60_000);
    }

    #[test]
    fn test_deposit_disabled_regardless_of_rate() {
        let mut doc = test_document(vec![row(1, 100_000)]);
        doc.has_deposit = false;
        doc.deposit_rate_bps = 5000;

        recompute_in_place(&mut doc);
        assert_eq!(doc.deposit_amount_cents, 0);
    }

    #[test]
    fn test_deposit_zero_rate_is_zero() {
        let mut doc = test_document(vec![row(1, 100_000)]);
        doc.has_deposit = true;
        doc.deposit_rate_bps = 0;

        recompute_in_place(&mut doc);
        assert_eq!(doc.deposit_amount_cents, 0);
    }

    #[test]
    fn test_idempotence_across_toggles() {
        for (has_vat, has_deposit) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut item = row(3, 3333);
            item.total_cents = 1; // stale on purpose
            let mut doc = test_document(vec![item, LineItem::section("S"), row(-1, 500)]);
            doc.has_vat = has_vat;
            doc.has_deposit = has_deposit;

            let once = recompute(&doc);
            let twice = recompute(&once);
            assert_eq!(once, twice);

            // And the second pass reports no writes at all
            let mut again = once.clone();
            assert!(!recompute_in_place(&mut again));
        }
    }

    #[test]
    fn test_unchanged_input_reports_no_change() {
        let mut doc = test_document(vec![row(2, 5000)]);
        recompute_in_place(&mut doc);
        assert!(!recompute_in_place(&mut doc));
    }

    #[test]
    fn test_negative_quantities_flow_through() {
        // A discount row: no validation at this layer
        let mut doc = test_document(vec![row(2, 5000), row(-1, 2000)]);
        recompute_in_place(&mut doc);
        assert_eq!(doc.sub_total_cents, 8000);
        assert_eq!(doc.items[1].total_cents, -2000);
    }

    #[test]
    fn test_empty_document() {
        let mut doc = test_document(vec![]);
        recompute_in_place(&mut doc);
        assert_eq!(doc.sub_total_cents, 0);
        assert_eq!(doc.total_ttc_cents, 0);
    }
}
