use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;
use wheelpick_core::{InputMode, PickerState};

use crate::app::App;
use crate::widgets::fit_label;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<T: Clone>(frame: &mut Frame, area: Rect, app: &App<T>) {
        let theme = &app.theme;
        let help_hint = " j/k:move gg/G:ends enter:pick q:cancel ";
        let status_text = fit_label(
            &status_text(app),
            (area.width as usize).saturating_sub(help_hint.width()),
        );
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

fn status_text<T: Clone>(app: &App<T>) -> String {
    if let Some(msg) = &app.status_message {
        return format!(" {}", msg);
    }

    let state = match app.engine.state() {
        PickerState::Idle => "IDLE",
        PickerState::Dragging => "DRAG",
        PickerState::Settling => "SETTLE",
    };

    let mode = match app.engine.input_mode() {
        InputMode::DragAndWheel => "",
        InputMode::WheelOnly => " | wheel only",
    };

    match (app.engine.current_index(), app.engine.selected()) {
        (Some(index), Some(item)) => format!(
            " {}{} | {}/{} | {}",
            state,
            mode,
            index + 1,
            app.engine.len(),
            item.label
        ),
        _ => format!(" {}{} | empty", state, mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelpick_core::{Geometry, Item, PresentationConfig, WheelEngine};

    #[test]
    fn test_status_text() {
        let items = vec![Item::new("alpha", 1), Item::new("beta", 2)];
        let mut engine = WheelEngine::new(items, Geometry::new(40.0, 2).unwrap());
        engine.jump_to_index(1);
        let mut app = App::new(engine, PresentationConfig::default());
        assert_eq!(status_text(&app), " IDLE | 2/2 | beta");

        app.status_message = Some("Nothing to pick".to_string());
        assert_eq!(status_text(&app), " Nothing to pick");
    }

    #[test]
    fn test_status_text_empty() {
        let engine: WheelEngine<u8> = WheelEngine::new(Vec::new(), Geometry::new(40.0, 2).unwrap());
        let app = App::new(engine, PresentationConfig::default());
        assert_eq!(status_text(&app), " IDLE | empty");
    }

    #[test]
    fn test_status_text_wheel_only() {
        let items = vec![Item::new("alpha", 1)];
        let engine = WheelEngine::new(items, Geometry::new(40.0, 2).unwrap())
            .with_input_mode(InputMode::WheelOnly);
        let app = App::new(engine, PresentationConfig::default());
        assert_eq!(status_text(&app), " IDLE | wheel only | 1/1 | alpha");
    }
}
