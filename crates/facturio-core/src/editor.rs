//! # Editor Transitions
//!
//! Field-level mutations on a document, as the editing UI performs
//! them. Every mutator runs the recompute pass before returning, so a
//! document observed between calls is always internally consistent -
//! there is no eventual-consistency window, not even after a row
//! deletion.
//!
//! ## Override State Machine (per row)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │              edit total                                                 │
//! │   ┌────────┐ ─────────────────────► ┌────────────┐                     │
//! │   │  AUTO  │                        │ OVERRIDDEN │                     │
//! │   │ total= │ ◄───────────────────── │ total =    │                     │
//! │   │ qty×pu │   edit qty/price,      │ manual     │                     │
//! │   └────────┘   or reset-to-auto     └────────────┘                     │
//! │                                                                         │
//! │   An explicit quantity/price edit always wins over a stale manual      │
//! │   override; returning to AUTO self-heals the total immediately.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown row ids are no-ops returning `false`, matching the engine's
//! error-free contract. All mutators report whether anything changed.

use crate::engine::recompute_in_place;
use crate::money::{Money, Quantity, Rate};
use crate::types::{Client, Document, LineItem};

impl Document {
    fn item_mut(&mut self, item_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Sets a row's designation text.
    pub fn set_item_designation(&mut self, item_id: &str, designation: impl Into<String>) -> bool {
        let Some(item) = self.item_mut(item_id) else {
            return false;
        };
        let designation = designation.into();
        if item.designation == designation {
            return false;
        }
        item.designation = designation;
        true
    }

    /// Sets a row's quantity. Reverts the row to auto-calculated mode:
    /// an explicit quantity edit always wins over a stale override.
    pub fn set_item_quantity(&mut self, item_id: &str, quantity: Quantity) -> bool {
        let Some(item) = self.item_mut(item_id) else {
            return false;
        };
        item.quantity_milli = quantity.milli();
        item.is_total_overridden = false;
        recompute_in_place(self);
        true
    }

    /// Sets a row's unit price. Reverts the row to auto-calculated mode.
    pub fn set_item_unit_price(&mut self, item_id: &str, unit_price: Money) -> bool {
        let Some(item) = self.item_mut(item_id) else {
            return false;
        };
        item.unit_price_cents = unit_price.cents();
        item.is_total_overridden = false;
        recompute_in_place(self);
        true
    }

    /// Sets a row's total directly. Marks the row overridden: the
    /// manual entry is authoritative until explicitly reset.
    pub fn set_item_total(&mut self, item_id: &str, total: Money) -> bool {
        let Some(item) = self.item_mut(item_id) else {
            return false;
        };
        item.total_cents = total.cents();
        item.is_total_overridden = true;
        recompute_in_place(self);
        true
    }

    /// Clears a row's override, returning it to auto-calculated mode.
    /// The stored total self-heals in the same call.
    pub fn reset_item_total(&mut self, item_id: &str) -> bool {
        let Some(item) = self.item_mut(item_id) else {
            return false;
        };
        item.is_total_overridden = false;
        recompute_in_place(self);
        true
    }

    /// Appends a fresh regular row (quantity 1, price 0) and returns its id.
    pub fn add_item(&mut self) -> String {
        let item = LineItem::new();
        let id = item.id.clone();
        self.items.push(item);
        recompute_in_place(self);
        id
    }

    /// Appends a section-header row and returns its id.
    pub fn add_section_header(&mut self, designation: impl Into<String>) -> String {
        let item = LineItem::section(designation);
        let id = item.id.clone();
        self.items.push(item);
        recompute_in_place(self);
        id
    }

    /// Removes a row by id and recomputes immediately. Deleting without
    /// recomputing would leave stale totals; the two are one operation.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return false;
        }
        recompute_in_place(self);
        true
    }

    /// Swaps the row at `index` with the one above it. No-op at the top
    /// boundary and for out-of-range indices; row state is untouched.
    pub fn move_item_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.swap(index, index - 1);
        true
    }

    /// Swaps the row at `index` with the one below it. No-op at the
    /// bottom boundary.
    pub fn move_item_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.items.len() {
            return false;
        }
        self.items.swap(index, index + 1);
        true
    }

    /// Toggles VAT and recomputes.
    pub fn set_vat_enabled(&mut self, enabled: bool) -> bool {
        if self.has_vat == enabled {
            return false;
        }
        self.has_vat = enabled;
        recompute_in_place(self);
        true
    }

    /// Sets the VAT rate and recomputes.
    pub fn set_vat_rate(&mut self, rate: Rate) -> bool {
        if self.vat_rate_bps == rate.bps() {
            return false;
        }
        self.vat_rate_bps = rate.bps();
        recompute_in_place(self);
        true
    }

    /// Toggles the deposit request and recomputes.
    pub fn set_deposit_enabled(&mut self, enabled: bool) -> bool {
        if self.has_deposit == enabled {
            return false;
        }
        self.has_deposit = enabled;
        recompute_in_place(self);
        true
    }

    /// Sets the deposit percentage and recomputes.
    pub fn set_deposit_rate(&mut self, rate: Rate) -> bool {
        if self.deposit_rate_bps == rate.bps() {
            return false;
        }
        self.deposit_rate_bps = rate.bps();
        recompute_in_place(self);
        true
    }

    /// Links the document to a client and snapshots their contact
    /// fields. The copies are frozen: later edits to the client record
    /// do not flow back into this document.
    pub fn apply_client_snapshot(&mut self, client: &Client) {
        self.client_id = Some(client.id.clone());
        self.client_name = client.name.clone();
        self.client_address = client.address.clone();
        self.client_email = Some(client.email.clone());
        self.client_phone = Some(client.phone.clone());
        self.client_ice = Some(client.ice.clone());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
