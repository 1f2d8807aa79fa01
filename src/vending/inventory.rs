//! Item catalog and stock tracking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for an item slot in the machine.
pub type ItemId = u32;

/// A stocked item: identifier, display name, and remaining quantity.
///
/// Quantity is unsigned, so it can never go negative; the dispense
/// logic only decrements when stock remains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl Item {
    /// Create an item for the initial catalog.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// Mapping from item identifier to item.
///
/// Built once from a catalog at machine construction, mutated in place
/// by the dispense logic, and never replaced during the machine's
/// lifetime.
///
/// # Example
///
/// ```rust
/// use vendo::vending::{Inventory, Item};
///
/// let inventory = Inventory::from_catalog(vec![
///     Item::new(1, "coke", 10),
///     Item::new(2, "pepsi", 10),
/// ]);
///
/// assert_eq!(inventory.quantity(1), Some(10));
/// assert!(inventory.get(99).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<ItemId, Item>,
}

impl Inventory {
    /// Build an inventory from a fixed catalog.
    ///
    /// If the catalog lists the same id twice, the last entry wins.
    pub fn from_catalog(catalog: Vec<Item>) -> Self {
        Self {
            items: catalog.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Look up an item for stock mutation. Only the state logic
    /// decrements quantities.
    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    /// Remaining quantity for an item, or `None` if the id is unknown.
    pub fn quantity(&self, id: ItemId) -> Option<u32> {
        self.items.get(&id).map(|item| item.quantity)
    }

    /// Iterate over all stocked items in id order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of distinct item slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
