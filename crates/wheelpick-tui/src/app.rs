use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;
use wheelpick_core::{
    DragAdapter, Item, PresentationConfig, TickOutcome, WheelAdapter, WheelEngine,
};

use crate::input::Action;
use crate::theme::Theme;

/// How the picker session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still picking
    Pending,
    /// Confirm requested; waiting for the wheel to come to rest
    Confirming,
    Confirmed,
    Cancelled,
}

/// Picker application state
pub struct App<T> {
    pub engine: WheelEngine<T>,
    pub presentation: PresentationConfig,
    pub theme: Theme,
    pub title: Option<String>,
    pub status_message: Option<String>,
    /// First key of a pending two-key sequence (`gg`)
    pub pending_key: Option<char>,
    /// Where the wheel was last drawn; mouse input outside it is ignored
    pub picker_area: Option<Rect>,
    drag: DragAdapter,
    wheel: WheelAdapter,
    outcome: Outcome,
}

impl<T: Clone> App<T> {
    /// Wrap an engine. One terminal row of pointer travel moves one item.
    pub fn new(engine: WheelEngine<T>, presentation: PresentationConfig) -> Self {
        let drag = DragAdapter::from_config(engine.scroll_config(), engine.geometry().item_extent());
        let wheel = WheelAdapter::for_geometry(engine.geometry(), engine.scroll_config());
        Self {
            engine,
            presentation,
            theme: Theme::default(),
            title: None,
            status_message: None,
            pending_key: None,
            picker_area: None,
            drag,
            wheel,
            outcome: Outcome::Pending,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn should_quit(&self) -> bool {
        matches!(self.outcome, Outcome::Confirmed | Outcome::Cancelled)
    }

    /// Redraw at animation rate while something is moving
    pub fn needs_fast_update(&self) -> bool {
        self.engine.needs_update() || self.drag.is_active()
    }

    /// Confirmed index and item, once the session ended with a confirm
    pub fn selection(&self) -> Option<(usize, &Item<T>)> {
        if self.outcome != Outcome::Confirmed {
            return None;
        }
        let index = self.engine.current_index()?;
        self.engine.selected().map(|item| (index, item))
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.pending_key = None;
        }
        if self.outcome != Outcome::Pending && action != Action::Cancel {
            return;
        }

        let half = self.engine.geometry().visible_half_count().max(1);
        let page = self.engine.geometry().visible_count();
        let all = self.engine.len();

        match action {
            Action::MoveUp => self.scroll(-1, now),
            Action::MoveDown => self.scroll(1, now),
            Action::ScrollHalfPageUp => self.scroll(-notches(half), now),
            Action::ScrollHalfPageDown => self.scroll(notches(half), now),
            Action::ScrollPageUp => self.scroll(-notches(page), now),
            Action::ScrollPageDown => self.scroll(notches(page), now),
            Action::JumpToTop => self.scroll(-notches(all), now),
            Action::JumpToBottom => self.scroll(notches(all), now),
            Action::PendingG => self.pending_key = Some('g'),
            Action::Confirm => self.confirm(),
            Action::Cancel => {
                debug!("Picker cancelled");
                self.outcome = Outcome::Cancelled;
            }
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        // A confirm issued mid-drag still needs the release to let the wheel settle
        let accepting = match self.outcome {
            Outcome::Pending => true,
            Outcome::Confirming => false,
            Outcome::Confirmed | Outcome::Cancelled => return,
        };
        let inside = accepting
            && self
                .picker_area
                .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        let row = mouse.row as f64;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                if !self.drag.press(&mut self.engine, row, now) {
                    self.status_message = Some("Dragging is disabled".to_string());
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag.motion(&mut self.engine, row, now);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.release(&mut self.engine, row, now);
            }
            MouseEventKind::ScrollDown if inside => self.scroll(1, now),
            MouseEventKind::ScrollUp if inside => self.scroll(-1, now),
            _ => {}
        }
    }

    /// Advance the wheel; finishes a pending confirm once it comes to rest
    pub fn on_tick(&mut self, now: Instant) {
        if let TickOutcome::Settled { index, emitted } = self.engine.tick(now) {
            debug!(index, emitted, "Wheel settled");
        }

        if self.outcome == Outcome::Confirming && !self.needs_fast_update() {
            self.outcome = Outcome::Confirmed;
        }
    }

    fn scroll(&mut self, notches: i32, now: Instant) {
        self.status_message = None;
        self.wheel.scroll_notches(&mut self.engine, notches, now);
    }

    fn confirm(&mut self) {
        if self.engine.is_empty() {
            self.status_message = Some("Nothing to pick".to_string());
            return;
        }
        self.outcome = Outcome::Confirming;
    }
}

fn notches(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
