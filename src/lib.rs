//! Vendo: a vending machine finite state machine.
//!
//! The transition logic is a pure core: each of the four operating states
//! handles the three external events by returning a message and a
//! successor state. The [`VendingMachine`](vending::VendingMachine) shell
//! delegates events to the current state, adopts the successor, mutates
//! the inventory, and keeps an immutable transition history.
//!
//! # Core Concepts
//!
//! - **State**: the four operating modes, a closed sum type matched
//!   exhaustively in every handler
//! - **Event**: press button, insert coin, select item by id
//! - **History**: immutable audit trail of every handled event
//!
//! # Example
//!
//! ```rust
//! use vendo::{Item, VendingMachine, VendingState};
//!
//! let mut machine = VendingMachine::new(vec![
//!     Item::new(1, "coke", 10),
//!     Item::new(2, "pepsi", 10),
//! ]);
//!
//! assert_eq!(machine.press_button(), "Please enter coin");
//! assert_eq!(machine.insert_coin(), "Coin inserted, please select item");
//! assert_eq!(machine.select_item(1)?, "Item now selected is coke");
//! assert_eq!(machine.state(), &VendingState::Dispensing);
//! assert_eq!(machine.press_button(), "ITEM DISPENSED");
//! # Ok::<(), vendo::VendingError>(())
//! ```

pub mod core;
pub mod vending;

// Re-export commonly used types
pub use crate::core::{State, StateHistory, StateTransition};
pub use vending::{Event, Inventory, Item, ItemId, VendingError, VendingMachine, VendingState};
