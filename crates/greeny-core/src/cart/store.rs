//! The persistent cart store.
//!
//! Owns the in-memory line-item list and mirrors it into durable storage
//! after every mutation. The store is the only writer of the cart slot;
//! every other component reads snapshots or calls operations here.
//!
//! # Persistence contract
//!
//! - Hydration never fails: absent, malformed, or schema-mismatched data
//!   degrades to an empty cart.
//! - Writes never fail the caller: a storage failure is logged and the
//!   in-memory cart stays authoritative for the session.
//! - `subtotal` and `item_count` are recomputed by summing the current
//!   lines on every read, so they can never drift from the items.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::item::CartLineItem;
use crate::storage::{KeyValueStore, CART_KEY};

/// The durable shape of the cart slot: the items plus a last-updated stamp.
#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    items: Vec<CartLineItem>,
    #[serde(default)]
    updated: String,
}

/// The cart and the storage slot it mirrors.
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    items: Vec<CartLineItem>,
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Hydrate a cart from storage, or start empty when nothing usable is
    /// persisted. Malformed data is never surfaced as an error.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<CartSnapshot>(&raw) {
                Ok(snapshot) => snapshot.items,
                Err(e) => {
                    tracing::debug!(error = %e, "discarding malformed cart snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart storage unreadable, starting empty");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// Start from an explicitly empty cart, ignoring any persisted state.
    pub fn empty(storage: S) -> Self {
        Self { items: Vec::new(), storage }
    }

    /// Read-only snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of all line totals. Recomputed, never cached.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|it| it.line_total).sum()
    }

    /// Sum of all line quantities. Recomputed, never cached.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|it| u64::from(it.quantity)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a prospective line, merging with an existing line that shares
    /// the `(item_id, special_request)` key. On merge the quantity grows
    /// and the line total is recomputed from the unit price; otherwise the
    /// item appends at the end.
    pub fn add_or_merge(&mut self, item: CartLineItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.merge_key() == item.merge_key())
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                existing.recompute_total();
            }
            None => self.items.push(item),
        }
        self.persist();
    }

    /// Adjust the quantity of the line at `index` by `delta` (either sign).
    /// Driving the quantity to zero or below removes the line. An
    /// out-of-range index is a no-op.
    pub fn adjust_quantity(&mut self, index: usize, delta: i64) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        let new_qty = i64::from(item.quantity) + delta;
        if new_qty > 0 {
            // quantities are bounded well below u32::MAX in practice
            item.quantity = u32::try_from(new_qty).unwrap_or(u32::MAX);
            item.recompute_total();
            self.persist();
        } else {
            self.remove(index);
        }
    }

    /// Delete the line at `index`. An out-of-range index is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        self.persist();
    }

    /// Serialize the cart plus an update timestamp into the durable slot.
    ///
    /// A write failure (quota, permissions, disk) is logged and swallowed:
    /// the in-memory cart remains authoritative for this session.
    pub fn persist(&mut self) {
        let snapshot = CartSnapshot {
            items: self.items.clone(),
            updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let payload = match serde_json::to_string(&snapshot) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_KEY, &payload) {
            tracing::error!(error = %e, "failed to save cart");
        }
    }

    /// Access the underlying storage, e.g. to check session presence.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
