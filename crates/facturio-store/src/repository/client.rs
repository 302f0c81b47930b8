//! # Client Repository
//!
//! Persistence for clients and their embedded payment history.
//!
//! Payments and budget overrides are mutated on the `Client` value via
//! the core ledger (`record_payment`, `set_budget_override`), then the
//! whole record is upserted - summaries are derived on read and never
//! stored, so there is nothing else to keep in sync.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{keys, Store};
use facturio_core::types::Client;

/// Repository for client persistence.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    store: Store,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(store: Store) -> Self {
        ClientRepository { store }
    }

    /// Loads the whole client collection.
    pub fn list(&self) -> StoreResult<Vec<Client>> {
        self.store.read(keys::CLIENTS)
    }

    /// Looks up one client by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Client>> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Inserts or replaces a client by id.
    pub fn upsert(&self, client: &Client) -> StoreResult<()> {
        debug!(id = %client.id, name = %client.name, "upserting client");

        let mut clients = self.list()?;
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => *existing = client.clone(),
            None => clients.push(client.clone()),
        }
        self.store.write(keys::CLIENTS, &clients)
    }

    /// Deletes a client by id. Returns `false` if it was not there.
    ///
    /// Documents referencing the client keep their snapshot fields and
    /// dangling `client_id`; history stays printable.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut clients = self.list()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);

        if clients.len() == before {
            return Ok(false);
        }

        debug!(id, "deleting client");
        self.store.write(keys::CLIENTS, &clients)?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use facturio_core::money::Money;
    use facturio_core::types::Payment;

    fn repo() -> (tempfile::TempDir, ClientRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store.clients())
    }

    fn sample(name: &str) -> Client {
        Client::new(name, Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_payment_history_round_trips_in_order() {
        let (_dir, repo) = repo();
        let mut client = sample("Karim Bennis");
        for cents in [100_000, 250_000] {
            client.record_payment(Payment::new(
                Money::from_cents(cents),
                "Chèque",
                Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
                None,
            ));
        }
        repo.upsert(&client).unwrap();

        let back = repo.get(&client.id).unwrap().unwrap();
        assert_eq!(back, client);
        // Newest-first ordering survives the round trip
        assert_eq!(back.payments[0].amount_cents, 250_000);
        assert_eq!(back.payments[1].amount_cents, 100_000);
    }

    #[test]
    fn test_override_fields_round_trip() {
        let (_dir, repo) = repo();
        let mut client = sample("Amal Haddad");
        client.set_budget_override(Some(Money::from_cents(400_000)), Some(String::new()));
        repo.upsert(&client).unwrap();

        let back = repo.get(&client.id).unwrap().unwrap();
        assert_eq!(back.custom_total_cents, Some(400_000));
        // Empty note stays an empty note, not absent
        assert_eq!(back.custom_total_note.as_deref(), Some(""));
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let (_dir, repo) = repo();
        let mut client = sample("Karim Bennis");
        repo.upsert(&client).unwrap();

        client.phone = "+212 6 11 22 33 44".to_string();
        repo.upsert(&client).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].phone, "+212 6 11 22 33 44");
    }

    #[test]
    fn test_delete_unknown_is_false() {
        let (_dir, repo) = repo();
        assert!(!repo.delete("ghost").unwrap());
    }
}
