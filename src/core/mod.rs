//! Generic state machine substrate.
//!
//! This module contains the reusable, pure part of the crate:
//! - State definitions via the `State` trait
//! - Immutable history tracking of transitions
//!
//! Nothing in this module knows about vending machines; the concrete
//! machine in [`crate::vending`] builds on these types.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
