pub mod app;
pub mod event;
pub mod input;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, Outcome};
pub use event::{AppEvent, EventHandler};
pub use input::{handle_key_event, Action};
pub use theme::Theme;
pub use ui::draw;
