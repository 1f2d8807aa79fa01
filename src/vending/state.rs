//! The four operating states and their transition logic.
//!
//! Each event handler is a pure function over the current state (plus the
//! inventory for item selection): it returns the user-facing message and
//! the successor state, and the machine shell applies both. The matches
//! are exhaustive, so the whole transition table is checked by the
//! compiler.

use super::error::VendingError;
use super::inventory::{Inventory, ItemId};
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Operating mode of the vending machine.
///
/// The machine starts in [`NoCoin`](Self::NoCoin) and cycles between the
/// four variants for the life of the process; there is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendingState {
    /// Waiting for a coin.
    NoCoin,
    /// Coin accepted, waiting for a selection.
    HasCoin,
    /// Selection made, item ready to drop.
    Dispensing,
    /// The last selected item had no stock left.
    ItemSoldOut,
}

impl State for VendingState {
    fn name(&self) -> &str {
        match self {
            Self::NoCoin => "NoCoin",
            Self::HasCoin => "HasCoin",
            Self::Dispensing => "Dispensing",
            Self::ItemSoldOut => "ItemSoldOut",
        }
    }
}

impl VendingState {
    /// Handle a press of the front-panel button.
    pub fn on_button_press(self) -> (String, VendingState) {
        match self {
            Self::NoCoin => ("Please enter coin".to_string(), Self::NoCoin),
            Self::HasCoin => ("Please select item".to_string(), Self::HasCoin),
            Self::Dispensing => ("ITEM DISPENSED".to_string(), Self::NoCoin),
            Self::ItemSoldOut => (
                "Item is Sold Out, please select another item".to_string(),
                Self::HasCoin,
            ),
        }
    }

    /// Handle a coin dropping into the slot.
    pub fn on_coin_insert(self) -> (String, VendingState) {
        match self {
            Self::NoCoin => (
                "Coin inserted, please select item".to_string(),
                Self::HasCoin,
            ),
            // One coin buys one item; extra coins are acknowledged and ignored.
            Self::HasCoin => ("Coin already there".to_string(), Self::HasCoin),
            Self::Dispensing => ("Coin already there".to_string(), Self::Dispensing),
            Self::ItemSoldOut => ("Coin already there".to_string(), Self::ItemSoldOut),
        }
    }

    /// Handle a press of an item's selection button.
    ///
    /// Fails with [`VendingError::UnknownItem`] when `item_id` was never
    /// stocked, regardless of the current state.
    pub fn on_item_select(
        self,
        item_id: ItemId,
        inventory: &mut Inventory,
    ) -> Result<(String, VendingState), VendingError> {
        match self {
            Self::NoCoin => {
                let item = inventory
                    .get(item_id)
                    .ok_or(VendingError::UnknownItem { item_id })?;
                Ok((
                    format!("Please enter coin to get item {}", item.name),
                    Self::NoCoin,
                ))
            }
            Self::HasCoin | Self::Dispensing | Self::ItemSoldOut => {
                dispense_check(item_id, inventory)
            }
        }
    }
}

/// Shared stock check for every state that accepts a paid selection.
///
/// In-stock items are decremented by one and the machine moves to
/// `Dispensing`; out-of-stock items leave the quantity at zero and the
/// machine moves to `ItemSoldOut`. The message names the requested item
/// on both branches: the front panel displays the selection before the
/// stock check resolves.
fn dispense_check(
    item_id: ItemId,
    inventory: &mut Inventory,
) -> Result<(String, VendingState), VendingError> {
    let item = inventory
        .get_mut(item_id)
        .ok_or(VendingError::UnknownItem { item_id })?;
    let message = format!("Item now selected is {}", item.name);

    let next = if item.quantity > 0 {
        item.quantity -= 1;
        VendingState::Dispensing
    } else {
        VendingState::ItemSoldOut
    };

    Ok((message, next))
}
