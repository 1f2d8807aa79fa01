//! The machine shell: delegation, state adoption, history recording.

use super::error::VendingError;
use super::event::Event;
use super::inventory::{Inventory, Item, ItemId};
use super::state::VendingState;
use crate::core::{StateHistory, StateTransition};
use chrono::Utc;

/// A vending machine: one active state, an item inventory, and a
/// transition history.
///
/// The machine holds no transition logic of its own. Every operation is
/// forwarded to the current [`VendingState`], which computes the response
/// message and the successor state; the machine then adopts the successor
/// (dropping the previous state value) and records the move.
///
/// Operations are synchronous and complete before returning. The machine
/// assumes one caller at a time; a concurrent host must wrap the whole
/// machine in a single mutex so that state adoption and inventory
/// mutation stay atomic with respect to each other.
///
/// # Example
///
/// ```rust
/// use vendo::vending::{Item, VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::new(vec![Item::new(1, "coke", 10)]);
///
/// assert_eq!(machine.insert_coin(), "Coin inserted, please select item");
/// assert_eq!(machine.select_item(1)?, "Item now selected is coke");
/// assert_eq!(machine.state(), &VendingState::Dispensing);
/// assert_eq!(machine.press_button(), "ITEM DISPENSED");
/// assert_eq!(machine.state(), &VendingState::NoCoin);
/// # Ok::<(), vendo::vending::VendingError>(())
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    state: VendingState,
    inventory: Inventory,
    history: StateHistory<VendingState>,
}

impl VendingMachine {
    /// Create a machine from a fixed catalog, starting in
    /// [`VendingState::NoCoin`] with an empty history.
    pub fn new(catalog: Vec<Item>) -> Self {
        Self {
            state: VendingState::NoCoin,
            inventory: Inventory::from_catalog(catalog),
            history: StateHistory::new(),
        }
    }

    /// Press the front-panel button.
    pub fn press_button(&mut self) -> String {
        let (message, next) = self.state.on_button_press();
        self.adopt(Event::PressButton, next);
        message
    }

    /// Insert a coin.
    pub fn insert_coin(&mut self) -> String {
        let (message, next) = self.state.on_coin_insert();
        self.adopt(Event::InsertCoin, next);
        message
    }

    /// Press the selection button for an item.
    ///
    /// Returns [`VendingError::UnknownItem`] when the id was never
    /// stocked; in that case the state and inventory are untouched and
    /// nothing is recorded in the history.
    pub fn select_item(&mut self, item_id: ItemId) -> Result<String, VendingError> {
        let (message, next) = self.state.on_item_select(item_id, &mut self.inventory)?;
        self.adopt(Event::SelectItem(item_id), next);
        Ok(message)
    }

    /// Dispatch an [`Event`] to the matching operation.
    ///
    /// Useful for driving the machine from a scripted or generated
    /// event sequence.
    pub fn handle(&mut self, event: Event) -> Result<String, VendingError> {
        match event {
            Event::PressButton => Ok(self.press_button()),
            Event::InsertCoin => Ok(self.insert_coin()),
            Event::SelectItem(item_id) => self.select_item(item_id),
        }
    }

    /// Current state.
    pub fn state(&self) -> &VendingState {
        &self.state
    }

    /// Current inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Transition history, one record per handled event.
    pub fn history(&self) -> &StateHistory<VendingState> {
        &self.history
    }

    /// Adopt the successor state and record the move. The previous
    /// state value is dropped here.
    fn adopt(&mut self, event: Event, next: VendingState) {
        self.history = self.history.record(StateTransition {
            from: self.state,
            to: next,
            trigger: event.name().to_string(),
            timestamp: Utc::now(),
        });
        self.state = next;
    }
}
