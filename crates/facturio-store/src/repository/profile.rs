//! # Profile Repository
//!
//! Persistence for the single company profile. Unlike the list
//! collections this is one object: load returns the default profile
//! until something has been saved.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{keys, Store};
use facturio_core::types::CompanyProfile;

/// Repository for the company profile.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    store: Store,
}

impl ProfileRepository {
    /// Creates a new ProfileRepository.
    pub fn new(store: Store) -> Self {
        ProfileRepository { store }
    }

    /// Loads the profile, or the default one before first save.
    pub fn load(&self) -> StoreResult<CompanyProfile> {
        self.store.read(keys::PROFILE)
    }

    /// Replaces the profile.
    pub fn save(&self, profile: &CompanyProfile) -> StoreResult<()> {
        debug!(name = %profile.name, "saving company profile");
        self.store.write(keys::PROFILE, profile)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use facturio_core::numbering::NumberScheme;

    #[test]
    fn test_load_before_save_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Store::open(dir.path()).unwrap().profile();

        let profile = repo.load().unwrap();
        assert_eq!(profile, CompanyProfile::default());
        assert_eq!(profile.doc_number_format, NumberScheme::SeqMonthYear);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Store::open(dir.path()).unwrap().profile();

        let mut profile = CompanyProfile::default();
        profile.name = "Atlas Rénovation SARL".to_string();
        profile.doc_number_format = NumberScheme::YearSeq;
        profile.doc_number_prefix = "FAC-".to_string();
        repo.save(&profile).unwrap();

        assert_eq!(repo.load().unwrap(), profile);
    }
}
