mod status_bar;
mod wheel_picker;

pub use status_bar::StatusBarWidget;
pub use wheel_picker::{fit_label, WheelPickerWidget};
