pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod item;
pub mod presentation;
pub mod scroll;
pub mod selection;

pub use config::{AppConfig, EasingType, InputMode, PickerConfig, PresentationConfig, ScrollConfig};
pub use engine::{PickerState, ScrollState, SettleToken, SnapPlan, TickOutcome, WheelEngine};
pub use error::{Error, Result};
pub use geometry::{Geometry, WheelLayout};
pub use input::{DragAdapter, WheelAdapter};
pub use item::{parse_items, Item};
pub use presentation::{row_visual, RowVisual};
pub use selection::{selection_channel, spawn_selection_handler, SelectionEvent};
