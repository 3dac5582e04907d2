//! Scroll/gesture engine
//!
//! Molecular layer over the `scroll` atoms: owns the scroll state, turns drag
//! and wheel input into a settle trajectory and emits one selection event per
//! settled index change.

mod picker;
pub mod snap;
mod state;

pub use picker::WheelEngine;
pub use state::{PickerState, ScrollState, SettleToken, SnapPlan, TickOutcome};
