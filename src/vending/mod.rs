//! The vending machine itself.
//!
//! The split follows the classic state-pattern separation: all transition
//! decisions live in [`VendingState`]'s event handlers, while
//! [`VendingMachine`] is an imperative shell that delegates each event to
//! the current state, adopts the successor state the handler returns, and
//! records the move in its history.

mod error;
mod event;
mod inventory;
mod machine;
mod state;

pub use error::VendingError;
pub use event::Event;
pub use inventory::{Inventory, Item, ItemId};
pub use machine::VendingMachine;
pub use state::VendingState;
