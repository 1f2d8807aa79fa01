//! Error types for vending machine operations.

use super::inventory::ItemId;
use thiserror::Error;

/// Errors that can occur while operating the vending machine.
///
/// Selecting an item that was never stocked is the only failure mode;
/// every state/event pair in the transition table is total and produces
/// a defined message and successor state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VendingError {
    #[error("No item with id {item_id} in the inventory")]
    UnknownItem { item_id: ItemId },
}
