//! # Supplier Repository
//!
//! Persistence for supplier contacts. Same contract as the other
//! collections; suppliers carry no financial state.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{keys, Store};
use facturio_core::types::Supplier;

/// Repository for supplier persistence.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    store: Store,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(store: Store) -> Self {
        SupplierRepository { store }
    }

    /// Loads the whole supplier collection.
    pub fn list(&self) -> StoreResult<Vec<Supplier>> {
        self.store.read(keys::SUPPLIERS)
    }

    /// Looks up one supplier by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Supplier>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }

    /// Inserts or replaces a supplier by id.
    pub fn upsert(&self, supplier: &Supplier) -> StoreResult<()> {
        debug!(id = %supplier.id, name = %supplier.name, "upserting supplier");

        let mut suppliers = self.list()?;
        match suppliers.iter_mut().find(|s| s.id == supplier.id) {
            Some(existing) => *existing = supplier.clone(),
            None => suppliers.push(supplier.clone()),
        }
        self.store.write(keys::SUPPLIERS, &suppliers)
    }

    /// Deletes a supplier by id. Returns `false` if it was not there.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut suppliers = self.list()?;
        let before = suppliers.len();
        suppliers.retain(|s| s.id != id);

        if suppliers.len() == before {
            return Ok(false);
        }

        debug!(id, "deleting supplier");
        self.store.write(keys::SUPPLIERS, &suppliers)?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
