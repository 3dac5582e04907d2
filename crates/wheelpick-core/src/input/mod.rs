//! Input adapters
//!
//! Both adapters translate device input into the engine's contract, so the
//! engine itself has no per-platform branches:
//! - `DragAdapter` - pointer press/move/release into `begin_drag`,
//!   `update_drag` and `end_drag` (with a release velocity estimate)
//! - `WheelAdapter` - wheel notches or pixel deltas into `handle_wheel_delta`

mod drag;
mod wheel;

pub use drag::{DragAdapter, VelocityTracker};
pub use wheel::WheelAdapter;
