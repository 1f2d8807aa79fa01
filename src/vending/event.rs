//! External stimuli the machine accepts.

use super::inventory::ItemId;
use serde::{Deserialize, Serialize};

/// One of the three external events a vending machine responds to.
///
/// Every event is handled by the current state; there is no queueing
/// and no event is ever deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The large button on the front panel was pressed.
    PressButton,
    /// A coin was dropped into the slot.
    InsertCoin,
    /// The numbered selection button for an item was pressed.
    SelectItem(ItemId),
}

impl Event {
    /// Stable name used as the trigger tag in the transition history.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PressButton => "press_button",
            Self::InsertCoin => "insert_coin",
            Self::SelectItem(_) => "select_item",
        }
    }
}
