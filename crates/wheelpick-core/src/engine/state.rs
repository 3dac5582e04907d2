//! Engine state types

/// Coarse engine state, as seen by the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// Resting on an item, nothing scheduled
    Idle,
    /// Pointer is down and the offset follows it
    Dragging,
    /// Waiting out the wheel quiet period or animating towards a snap target
    Settling,
}

/// Continuous scroll position and the last emitted selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Signed offset; `-index * item_extent` when settled on `index`
    pub offset: f64,
    /// Last emitted (or jumped-to) index
    pub current_index: usize,
    pub dragging: bool,
    /// Offset captured by `begin_drag`; drag translations are relative to it
    pub drag_anchor_offset: f64,
}

/// Where a settle animation lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPlan {
    pub target_offset: f64,
    pub target_index: usize,
}

/// Identifies one settle animation. Ticks carrying an older token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleToken(pub(crate) u64);

/// Result of advancing the engine by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing in flight
    Idle,
    /// Wheel input is still inside its quiet period
    Waiting,
    /// Settle animation moved the offset
    Animating { offset: f64 },
    /// Settle finished on `index`; `emitted` is true when the selection changed
    Settled { index: usize, emitted: bool },
    /// Tick belonged to a settle that has since been superseded
    Stale,
}
