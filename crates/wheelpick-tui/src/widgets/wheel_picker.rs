use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wheelpick_core::{Geometry, PresentationConfig, RowVisual, WheelEngine, WheelLayout};

use crate::app::App;
use crate::theme::{blend, Theme};

const MAX_WIDTH: u16 = 48;

pub struct WheelPickerWidget;

impl WheelPickerWidget {
    /// Bordered box sized to the wheel viewport (one row per item), centered in `area`
    pub fn area(area: Rect, geometry: &Geometry) -> Rect {
        let layout = geometry.layout();
        let rows = (layout.viewport_extent / geometry.item_extent()).round() as u16;
        let height = rows.saturating_add(2).min(area.height);
        let width = MAX_WIDTH.min(area.width);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    pub fn render<T: Clone>(frame: &mut Frame, area: Rect, app: &App<T>) {
        let theme = &app.theme;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));
        if let Some(title) = &app.title {
            block = block.title(format!(" {} ", title));
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = wheel_lines(&app.engine, &app.presentation, theme, inner.width, inner.height);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// One line per terminal row of the wheel viewport
fn wheel_lines<T: Clone>(
    engine: &WheelEngine<T>,
    style: &PresentationConfig,
    theme: &Theme,
    width: u16,
    height: u16,
) -> Vec<Line<'static>> {
    let width = width as usize;
    let band_row = (height.saturating_sub(1) / 2) as usize;
    let geometry = engine.geometry();
    let layout = geometry.layout();
    let backdrop = |y: usize| row_background(y, band_row, geometry, &layout, theme);

    let mut lines: Vec<Line<'static>> = (0..height as usize)
        .map(|y| Line::from(Span::styled(" ".repeat(width), Style::default().bg(backdrop(y)))))
        .collect();

    if engine.is_empty() {
        lines[band_row] = row_line(
            "(no items)",
            width,
            width,
            Style::default().fg(theme.grey2).bg(theme.band),
        );
        return lines;
    }

    let half = geometry.visible_half_count() as f64;
    let shift = band_row as f64 - half;

    for (row, visual) in engine.row_visuals(style) {
        let y = (layout.row_top(engine.offset(), row) / geometry.item_extent() + shift).round();
        if y < 0.0 || y >= height as f64 {
            continue;
        }
        let y = y as usize;
        let label = &engine.items()[row].label;
        lines[y] = row_line(
            label,
            width,
            tilted_columns(width, visual.tilt_deg),
            row_style(&visual, style, theme, backdrop(y)),
        );
    }

    if let Some(line) = lines.get_mut(band_row) {
        mark_band(line, theme);
    }

    lines
}

/// Selection band in the middle; above and below it the masks darken
/// towards the viewport edges over `mask_extent`
fn row_background(
    y: usize,
    band_row: usize,
    geometry: &Geometry,
    layout: &WheelLayout,
    theme: &Theme,
) -> Color {
    if y == band_row {
        return theme.band;
    }
    let mask_rows = (layout.mask_extent / geometry.item_extent()).round();
    let depth = y.abs_diff(band_row) as f64;
    let strength = if mask_rows > 0.0 { (depth / mask_rows).min(1.0) } else { 1.0 };
    blend(theme.mask, theme.bg0, strength)
}

/// Columns a label may use once its row is tilted away from the viewer
fn tilted_columns(width: usize, tilt_deg: f64) -> usize {
    let foreshortened = (width as f64 * tilt_deg.to_radians().cos().abs()).floor();
    if foreshortened.is_finite() {
        (foreshortened as usize).min(width)
    } else {
        width
    }
}

/// Opacity becomes a color blend towards the background; scale becomes weight
fn row_style(visual: &RowVisual, style: &PresentationConfig, theme: &Theme, bg: Color) -> Style {
    let fg = if visual.highlighted { theme.accent } else { theme.fg0 };
    let mut row_style = Style::default()
        .fg(blend(fg, theme.bg0, visual.opacity))
        .bg(bg);

    let mid_scale = (style.max_scale + style.min_scale) / 2.0;
    if visual.highlighted || visual.scale >= 1.0 {
        row_style = row_style.add_modifier(Modifier::BOLD);
    } else if visual.scale < mid_scale {
        row_style = row_style.add_modifier(Modifier::DIM);
    }
    row_style
}

fn row_line<'a>(label: &str, width: usize, columns: usize, style: Style) -> Line<'a> {
    let label = fit_label(label, columns.min(width));
    let used = label.width();
    let left = (width - used) / 2;
    let right = width - used - left;
    Line::from(Span::styled(
        format!("{}{}{}", " ".repeat(left), label, " ".repeat(right)),
        style,
    ))
}

fn mark_band(line: &mut Line<'static>, theme: &Theme) {
    let Some(span) = line.spans.first() else {
        return;
    };
    let content = span.content.to_string();
    let body_style = span.style;
    let chars: Vec<char> = content.chars().collect();
    if chars.len() < 2 || chars[0] != ' ' || chars[chars.len() - 1] != ' ' {
        return;
    }
    let last = chars.len() - 1;
    let marker = Style::default().fg(theme.warning).bg(theme.band);
    let body: String = chars[1..last].iter().collect();
    line.spans = vec![
        Span::styled("›", marker),
        Span::styled(body, body_style),
        Span::styled("‹", marker),
    ];
}

/// Truncate `label` to at most `width` columns, ending in an ellipsis when cut
pub fn fit_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
