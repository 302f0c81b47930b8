//! # Document Repository
//!
//! Persistence for quotes and invoices.
//!
//! ## Contract
//! ```text
//! list()    whole collection, insertion order preserved
//! get(id)   point lookup
//! upsert(d) replace the document with the same id, else append
//! delete(id) remove; false when the id is unknown
//! ```
//!
//! Documents arrive here already recomputed - the editor mutators run
//! the engine before any save. The repository never recomputes; it
//! stores what it is given.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{keys, Store};
use facturio_core::types::Document;

/// Repository for document persistence.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    store: Store,
}

impl DocumentRepository {
    /// Creates a new DocumentRepository.
    pub fn new(store: Store) -> Self {
        DocumentRepository { store }
    }

    /// Loads the whole document collection.
    pub fn list(&self) -> StoreResult<Vec<Document>> {
        self.store.read(keys::DOCUMENTS)
    }

    /// Looks up one document by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Document>> {
        Ok(self.list()?.into_iter().find(|d| d.id == id))
    }

    /// Inserts or replaces a document by id.
    pub fn upsert(&self, document: &Document) -> StoreResult<()> {
        debug!(id = %document.id, number = %document.number, "upserting document");

        let mut documents = self.list()?;
        match documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document.clone(),
            None => documents.push(document.clone()),
        }
        self.store.write(keys::DOCUMENTS, &documents)
    }

    /// Deletes a document by id. Returns `false` if it was not there.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut documents = self.list()?;
        let before = documents.len();
        documents.retain(|d| d.id != id);

        if documents.len() == before {
            return Ok(false);
        }

        debug!(id, "deleting document");
        self.store.write(keys::DOCUMENTS, &documents)?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use facturio_core::defaults::DocumentPatch;
    use facturio_core::money::Money;
    use facturio_core::types::DocType;

    fn repo() -> (tempfile::TempDir, DocumentRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store.documents())
    }

    fn sample(number: &str) -> Document {
        let mut doc = Document::from_patch(
            DocumentPatch {
                doc_type: Some(DocType::Invoice),
                number: Some(number.to_string()),
                ..DocumentPatch::default()
            },
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        );
        let row = doc.add_item();
        doc.set_item_unit_price(&row, Money::from_cents(12_345));
        doc
    }

    #[test]
    fn test_upsert_appends_then_replaces() {
        let (_dir, repo) = repo();
        let mut doc = sample("1-0126");
        repo.upsert(&doc).unwrap();
        repo.upsert(&sample("2-0126")).unwrap();
        assert_eq!(repo.list().unwrap().len(), 2);

        doc.subject = "Ravalement façade".to_string();
        repo.upsert(&doc).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        // Replaced in place, order preserved
        assert_eq!(listed[0].id, doc.id);
        assert_eq!(listed[0].subject, "Ravalement façade");
    }

    #[test]
    fn test_round_trip_preserves_totals_exactly() {
        let (_dir, repo) = repo();
        let doc = sample("1-0126");
        repo.upsert(&doc).unwrap();

        let back = repo.get(&doc.id).unwrap().unwrap();
        assert_eq!(back, doc);
        // Re-running the engine on the reloaded value writes nothing
        let mut reloaded = back;
        assert!(!facturio_core::recompute_in_place(&mut reloaded));
    }

    #[test]
    fn test_delete() {
        let (_dir, repo) = repo();
        let doc = sample("1-0126");
        repo.upsert(&doc).unwrap();

        assert!(repo.delete(&doc.id).unwrap());
        assert!(!repo.delete(&doc.id).unwrap());
        assert!(repo.get(&doc.id).unwrap().is_none());
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (_dir, repo) = repo();
        assert!(repo.list().unwrap().is_empty());
    }
}
