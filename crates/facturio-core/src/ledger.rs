//! # Client Ledger
//!
//! Aggregates a client's invoices, manual budget override, and
//! payments into a single "amount owed" figure.
//!
//! ## Rollup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      summarize(client, documents)                       │
//! │                                                                         │
//! │  invoiceTotal = Σ totalTTC over the client's invoices                   │
//! │  quoteTotal   = Σ totalTTC over the client's quotes (informational)     │
//! │  finalTotal   = customTotal set? customTotal : invoiceTotal             │
//! │  totalPaid    = Σ payment amounts                                       │
//! │  balance      = finalTotal - totalPaid   (negative = credit)            │
//! │                                                                         │
//! │  invoiceTotal is reported raw even in override mode - the UI shows      │
//! │  the crossed-out computed figure next to the manual one.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Summaries are always derived on read, never cached on the client
//! record; there is no stale-summary state to invalidate.

use crate::money::Money;
use crate::types::{Client, ClientFinancialSummary, Document, Payment};

impl Client {
    /// Computes the financial rollup for this client.
    ///
    /// `documents` may be the whole collection; rows not attributed to
    /// this client (by `client_id`) are ignored, as are quotes for the
    /// owed/balance math.
    pub fn summarize(&self, documents: &[Document]) -> ClientFinancialSummary {
        let mine: Vec<&Document> = documents
            .iter()
            .filter(|d| d.client_id.as_deref() == Some(self.id.as_str()))
            .collect();

        let invoice_total: Money = mine
            .iter()
            .filter(|d| d.is_invoice())
            .map(|d| d.total_ttc())
            .sum();
        let quote_total: Money = mine
            .iter()
            .filter(|d| d.is_quote())
            .map(|d| d.total_ttc())
            .sum();

        let total_paid: Money = self.payments.iter().map(|p| p.amount()).sum();

        let is_custom = self.custom_total_cents.is_some();
        let final_total = self.custom_total().unwrap_or(invoice_total);

        ClientFinancialSummary {
            invoice_total_cents: invoice_total.cents(),
            quote_total_cents: quote_total.cents(),
            is_custom,
            final_total_cents: final_total.cents(),
            total_paid_cents: total_paid.cents(),
            balance_cents: (final_total - total_paid).cents(),
        }
    }

    /// Records a payment at the head of the history.
    ///
    /// Newest-first ordering is a semantic property of the list - the
    /// history view renders it as stored. A non-positive amount is a
    /// no-op returning `false`: the UI validates upstream, and the
    /// ledger refuses to corrupt state if it doesn't.
    pub fn record_payment(&mut self, payment: Payment) -> bool {
        if payment.amount_cents <= 0 {
            return false;
        }
        self.payments.insert(0, payment);
        true
    }

    /// Sets or clears the manual budget override.
    ///
    /// `amount` absent or non-positive clears both fields, reverting
    /// the client to auto (invoice-derived) mode. A positive amount
    /// sets both; the note is stored verbatim, so an empty string is
    /// kept as a real value.
    pub fn set_budget_override(&mut self, amount: Option<Money>, note: Option<String>) {
        match amount {
            Some(m) if m.is_positive() => {
                self.custom_total_cents = Some(m.cents());
                self.custom_total_note = note;
            }
            _ => {
                self.custom_total_cents = None;
                self.custom_total_note = None;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DocumentPatch;
    use crate::types::DocType;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn client() -> Client {
        Client::new("Karim Bennis", Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap())
    }

    fn invoice_for(client_id: &str, total_ttc_cents: i64) -> Document {
        let mut doc = Document::from_patch(
            DocumentPatch {
                doc_type: Some(DocType::Invoice),
                client_id: Some(client_id.to_string()),
                ..DocumentPatch::default()
            },
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        );
        // One overridden row carrying the desired total keeps the
        // document consistent under recompute.
        let row = doc.add_item();
        doc.set_item_total(&row, Money::from_cents(total_ttc_cents));
        doc
    }

    fn payment(cents: i64) -> Payment {
        Payment::new(
            Money::from_cents(cents),
            "Virement",
            Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
            None,
        )
    }

    #[test]
    fn test_auto_mode_balance() {
        let mut c = client();
        let docs = vec![
            invoice_for(&c.id, 300_000),
            invoice_for(&c.id, 200_000),
        ];
        assert!(c.record_payment(payment(200_000)));
        assert!(c.record_payment(payment(100_000)));

        let s = c.summarize(&docs);
        assert_eq!(s.invoice_total_cents, 500_000);
        assert_eq!(s.final_total_cents, 500_000);
        assert_eq!(s.total_paid_cents, 300_000);
        assert_eq!(s.balance_cents, 200_000);
        assert!(!s.is_custom);
    }

    #[test]
    fn test_override_mode_balance() {
        let mut c = client();
        let docs = vec![
            invoice_for(&c.id, 300_000),
            invoice_for(&c.id, 200_000),
        ];
        c.record_payment(payment(300_000));
        c.set_budget_override(Some(Money::from_cents(400_000)), Some("Remise chantier".into()));

        let s = c.summarize(&docs);
        assert!(s.is_custom);
        assert_eq!(s.final_total_cents, 400_000);
        assert_eq!(s.balance_cents, 100_000);
        // Raw invoice total still reported for display
        assert_eq!(s.invoice_total_cents, 500_000);
    }

    #[test]
    fn test_other_clients_documents_ignored() {
        let c = client();
        let docs = vec![invoice_for("someone-else", 999_999), invoice_for(&c.id, 100_000)];
        assert_eq!(c.summarize(&docs).invoice_total_cents, 100_000);
    }

    #[test]
    fn test_quotes_do_not_feed_the_balance() {
        let c = client();
        let mut quote = Document::from_patch(
            DocumentPatch {
                client_id: Some(c.id.clone()),
                ..DocumentPatch::default()
            },
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        );
        let row = quote.add_item();
        quote.set_item_total(&row, Money::from_cents(70_000));

        let docs = vec![quote, invoice_for(&c.id, 100_000)];
        let s = c.summarize(&docs);
        assert_eq!(s.invoice_total_cents, 100_000);
        assert_eq!(s.quote_total_cents, 70_000);
        assert_eq!(s.final_total_cents, 100_000);
    }

    #[test]
    fn test_overpayment_yields_negative_balance() {
        let mut c = client();
        let docs = vec![invoice_for(&c.id, 100_000)];
        c.record_payment(payment(150_000));
        assert_eq!(c.summarize(&docs).balance_cents, -50_000);
    }

    #[test]
    fn test_payments_are_newest_first() {
        let mut c = client();
        let first = payment(100);
        let second = payment(200);
        let (id1, id2) = (first.id.clone(), second.id.clone());
        c.record_payment(first);
        c.record_payment(second);

        assert_eq!(c.payments[0].id, id2);
        assert_eq!(c.payments[1].id, id1);
    }

    #[test]
    fn test_non_positive_payment_is_noop() {
        let mut c = client();
        assert!(!c.record_payment(payment(0)));
        assert!(!c.record_payment(payment(-500)));
        assert!(c.payments.is_empty());
    }

    #[test]
    fn test_clearing_override_restores_auto_mode() {
        let mut c = client();
        c.set_budget_override(Some(Money::from_cents(400_000)), Some(String::new()));
        // Empty note is a real value, distinct from absent
        assert_eq!(c.custom_total_note.as_deref(), Some(""));

        c.set_budget_override(None, Some("ignored".into()));
        assert_eq!(c.custom_total_cents, None);
        assert_eq!(c.custom_total_note, None);

        c.set_budget_override(Some(Money::from_cents(-1)), None);
        assert_eq!(c.custom_total_cents, None);
    }

    #[test]
    fn test_empty_client_summary_is_zero() {
        let c = client();
        let s = c.summarize(&[]);
        assert_eq!(s.invoice_total_cents, 0);
        assert_eq!(s.total_paid_cents, 0);
        assert_eq!(s.balance_cents, 0);
        assert!(!s.is_custom);
    }
}
