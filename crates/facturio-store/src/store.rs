//! # Store
//!
//! Root handle over a directory of keyed JSON collections.
//!
//! ## Layout
//! ```text
//! <root>/
//!   facturio_docs.json       [Document, ...]
//!   facturio_clients.json    [Client, ...]
//!   facturio_suppliers.json  [Supplier, ...]
//!   facturio_profile.json    CompanyProfile
//! ```
//!
//! Collections are read and written whole, mirroring the web build's
//! localStorage contract: the store neither knows nor cares what is
//! inside a collection beyond it being JSON. Writes go to a temp file
//! in the same directory and are renamed into place, so a crash
//! mid-save leaves the previous contents intact.
//!
//! A missing file reads as the collection's default (empty list,
//! default profile) - that is simply first-run state.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::{
    ClientRepository, DocumentRepository, ProfileRepository, SupplierRepository,
};

// =============================================================================
// Collection Keys
// =============================================================================

/// Opaque collection keys. Persisted in file names; never parsed.
pub mod keys {
    pub const DOCUMENTS: &str = "facturio_docs";
    pub const CLIENTS: &str = "facturio_clients";
    pub const SUPPLIERS: &str = "facturio_suppliers";
    pub const PROFILE: &str = "facturio_profile";
}

// =============================================================================
// Store
// =============================================================================

/// Handle to the on-disk collections. Cheap to clone; every
/// repository holds its own copy of the handle.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens (creating if needed) the store directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Store> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "store opened");
        Ok(Store { root })
    }

    /// Document collection operations.
    pub fn documents(&self) -> DocumentRepository {
        DocumentRepository::new(self.clone())
    }

    /// Client collection operations.
    pub fn clients(&self) -> ClientRepository {
        ClientRepository::new(self.clone())
    }

    /// Supplier collection operations.
    pub fn suppliers(&self) -> SupplierRepository {
        SupplierRepository::new(self.clone())
    }

    /// Company profile operations.
    pub fn profile(&self) -> ProfileRepository {
        ProfileRepository::new(self.clone())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads a whole collection. Missing file → `T::default()`.
    pub(crate) fn read<T>(&self, key: &str) -> StoreResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces a whole collection atomically (temp file + rename).
    pub(crate) fn write<T>(&self, key: &str, value: &T) -> StoreResult<()>
    where
        T: Serialize,
    {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, self.path_for(key))?;

        debug!(key, bytes = json.len(), "collection written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
