use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::widgets::{StatusBarWidget, WheelPickerWidget};

/// Draw one frame and remember where the wheel landed for mouse hit-testing
pub fn draw<T: Clone>(frame: &mut Frame, app: &mut App<T>) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg1)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let picker = WheelPickerWidget::area(chunks[0], app.engine.geometry());
    app.picker_area = Some(picker);

    WheelPickerWidget::render(frame, picker, app);
    StatusBarWidget::render(frame, chunks[1], app);
}
