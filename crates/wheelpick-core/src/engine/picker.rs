use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::snap::{elastic_offset, plan_snap};
use super::state::{PickerState, ScrollState, SettleToken, SnapPlan, TickOutcome};
use crate::config::{AppConfig, InputMode};
use crate::geometry::Geometry;
use crate::item::Item;
use crate::presentation::{visible_row_visuals, RowVisual};
use crate::scroll::timing::{is_complete, lerp, progress};
use crate::scroll::{EasingType, ScrollConfig};
use crate::selection::SelectionEvent;
use crate::PresentationConfig;

/// In-flight settle animation
#[derive(Debug, Clone, Copy)]
struct Settle {
    token: SettleToken,
    plan: SnapPlan,
    from: f64,
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Still,
    /// Wheel deltas arrived; settle once `deadline` passes without more
    WheelPending { deadline: Instant },
    Settling(Settle),
}

/// Scroll/gesture engine for one picker instance
///
/// All mutation goes through `&mut self`, so one owner serializes input,
/// ticks and emission. Rendering only needs `offset()` (or `row_visuals()`).
///
/// Time-dependent calls take `now` explicitly; pass `Instant::now()` from the
/// event loop.
#[derive(Debug)]
pub struct WheelEngine<T> {
    items: Vec<Item<T>>,
    geometry: Geometry,
    config: ScrollConfig,
    input_mode: InputMode,
    state: ScrollState,
    motion: Motion,
    /// Bumped for every settle so stale ticks can be told apart
    generation: u64,
    event_tx: Option<mpsc::UnboundedSender<SelectionEvent<T>>>,
}

impl<T: Clone> WheelEngine<T> {
    /// Create an engine resting on the first item
    pub fn new(items: Vec<Item<T>>, geometry: Geometry) -> Self {
        if items.is_empty() {
            debug!("Picker created without items; input will be ignored");
        }
        Self {
            items,
            geometry,
            config: ScrollConfig::default(),
            input_mode: InputMode::default(),
            state: ScrollState {
                offset: 0.0,
                current_index: 0,
                dragging: false,
                drag_anchor_offset: 0.0,
            },
            motion: Motion::Still,
            generation: 0,
            event_tx: None,
        }
    }

    /// Validate `config` and build an engine positioned on its initial index
    pub fn from_config(items: Vec<Item<T>>, config: &AppConfig) -> crate::Result<Self> {
        config.validate()?;
        let geometry = config.picker.geometry()?;
        Ok(Self::new(items, geometry)
            .with_scroll_config(config.scroll.clone())
            .with_input_mode(config.picker.input_mode)
            .with_initial_index(config.picker.initial_index))
    }

    pub fn with_scroll_config(mut self, config: ScrollConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    /// Place the picker on `index` (clamped) without emitting
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.jump_to_index(index);
        self
    }

    /// Set the channel selection events are delivered on
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<SelectionEvent<T>>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn scroll_config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.state
    }

    /// Last emitted index, `None` when there are no items
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.state.current_index)
    }

    pub fn selected(&self) -> Option<&Item<T>> {
        self.items.get(self.state.current_index)
    }

    pub fn state(&self) -> PickerState {
        if self.state.dragging {
            return PickerState::Dragging;
        }
        match self.motion {
            Motion::Still => PickerState::Idle,
            Motion::WheelPending { .. } | Motion::Settling(_) => PickerState::Settling,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// True while a settle or wheel quiet period is pending.
    /// Use this to decide whether the frame loop needs the animation rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        !matches!(self.motion, Motion::Still)
    }

    /// Token of the settle animation in flight
    pub fn settle_token(&self) -> Option<SettleToken> {
        match self.motion {
            Motion::Settling(settle) => Some(settle.token),
            _ => None,
        }
    }

    /// Snap target of the settle animation in flight
    pub fn settle_target(&self) -> Option<SnapPlan> {
        match self.motion {
            Motion::Settling(settle) => Some(settle.plan),
            _ => None,
        }
    }

    /// Offset lies past the first or last item (elastic drag)
    pub fn is_overscrolled(&self) -> bool {
        self.state.offset > self.geometry.max_offset()
            || self.state.offset < self.geometry.min_offset(self.items.len())
    }

    /// Visuals for the rows currently intersecting the viewport
    pub fn row_visuals(&self, style: &PresentationConfig) -> Vec<(usize, RowVisual)> {
        visible_row_visuals(self.state.offset, self.items.len(), &self.geometry, style)
    }

    /// Start following a drag from the current offset.
    ///
    /// Interrupts a running settle. Refused (returns false) for empty pickers
    /// and in wheel-only mode.
    pub fn begin_drag(&mut self) -> bool {
        if self.items.is_empty() {
            trace!("Drag ignored: picker has no items");
            return false;
        }
        if self.input_mode == InputMode::WheelOnly {
            debug!("Drag refused: picker accepts wheel input only");
            return false;
        }

        match self.motion {
            Motion::Settling(settle) => debug!(
                token = ?settle.token,
                offset = self.state.offset,
                "Drag interrupts settle"
            ),
            Motion::WheelPending { .. } => debug!("Drag interrupts pending wheel settle"),
            Motion::Still => {}
        }

        self.motion = Motion::Still;
        self.state.dragging = true;
        self.state.drag_anchor_offset = self.state.offset;
        debug!(anchor = self.state.offset, "Drag started");
        true
    }

    /// Move to `anchor + translation`, damping any part past the ends
    pub fn update_drag(&mut self, translation: f64) {
        if !self.state.dragging {
            trace!(translation, "Drag update outside a drag ignored");
            return;
        }
        if !translation.is_finite() {
            trace!("Non-finite drag translation ignored");
            return;
        }

        let candidate = self.state.drag_anchor_offset + translation;
        self.state.offset = elastic_offset(
            candidate,
            self.geometry.min_offset(self.items.len()),
            self.geometry.max_offset(),
            self.config.overscroll_damping,
        );
        trace!(translation, offset = self.state.offset, "Drag update");
    }

    /// Release the drag and start settling.
    ///
    /// `velocity` is in units per second, positive towards higher indices.
    /// Returns `None` when no drag was active. The returned token identifies
    /// the settle for `advance`.
    pub fn end_drag(&mut self, velocity: f64, now: Instant) -> Option<SettleToken> {
        if !self.state.dragging {
            trace!(velocity, "Drag end outside a drag ignored");
            return None;
        }
        self.state.dragging = false;

        let plan = plan_snap(
            self.state.offset,
            velocity,
            self.items.len(),
            &self.geometry,
            self.config.fling_velocity_threshold,
        )?;
        debug!(
            velocity,
            offset = self.state.offset,
            target_index = plan.target_index,
            "Drag released"
        );
        Some(self.start_settle(plan, now))
    }

    /// Apply a discrete wheel delta (positive scrolls towards higher indices).
    ///
    /// The offset is hard-clamped; the settle starts once no further delta
    /// arrives for the debounce window. Ignored while dragging.
    pub fn handle_wheel_delta(&mut self, delta: f64, now: Instant) -> bool {
        if self.items.is_empty() {
            trace!("Wheel ignored: picker has no items");
            return false;
        }
        if self.state.dragging {
            trace!(delta, "Wheel ignored during drag");
            return false;
        }
        if !delta.is_finite() {
            trace!("Non-finite wheel delta ignored");
            return false;
        }

        if let Motion::Settling(settle) = self.motion {
            debug!(token = ?settle.token, "Wheel input interrupts settle");
        }

        let raw = self.state.offset - delta * self.config.wheel_sensitivity;
        self.state.offset = self.geometry.clamp_offset(raw, self.items.len());
        self.motion = Motion::WheelPending {
            deadline: now + self.config.wheel_debounce(),
        };
        trace!(delta, offset = self.state.offset, "Wheel delta");
        true
    }

    /// Advance whatever is in flight to `now`
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        match self.motion {
            Motion::Still => TickOutcome::Idle,
            Motion::WheelPending { deadline } => {
                if now < deadline {
                    return TickOutcome::Waiting;
                }
                let Some(plan) = plan_snap(
                    self.state.offset,
                    0.0,
                    self.items.len(),
                    &self.geometry,
                    self.config.fling_velocity_threshold,
                ) else {
                    self.motion = Motion::Still;
                    return TickOutcome::Idle;
                };
                debug!(target_index = plan.target_index, "Wheel input settled");
                let token = self.start_settle(plan, now);
                self.advance(token, now)
            }
            Motion::Settling(settle) => self.advance_settle(settle, now),
        }
    }

    /// Advance the settle identified by `token`; a superseded token is a no-op
    pub fn advance(&mut self, token: SettleToken, now: Instant) -> TickOutcome {
        match self.motion {
            Motion::Settling(settle) if settle.token == token => self.advance_settle(settle, now),
            _ => {
                trace!(?token, "Stale settle tick ignored");
                TickOutcome::Stale
            }
        }
    }

    /// Place the picker on `index` (clamped) immediately, without emitting.
    ///
    /// Cancels any drag, pending wheel settle or settle animation. No-op when
    /// there are no items.
    pub fn jump_to_index(&mut self, index: usize) {
        let Some(index) = self.geometry.clamp_index(index as f64, self.items.len()) else {
            trace!(index, "Jump ignored: picker has no items");
            return;
        };

        let offset = self.geometry.offset_for_index(index);
        self.motion = Motion::Still;
        self.state = ScrollState {
            offset,
            current_index: index,
            dragging: false,
            drag_anchor_offset: offset,
        };
        debug!(index, "Jumped to index");
    }

    fn start_settle(&mut self, plan: SnapPlan, now: Instant) -> SettleToken {
        self.generation += 1;
        let token = SettleToken(self.generation);

        let distance = (plan.target_offset - self.state.offset).abs();
        let duration = if self.config.is_smooth() && distance > f64::EPSILON {
            self.config.settle_duration()
        } else {
            Duration::ZERO
        };

        self.motion = Motion::Settling(Settle {
            token,
            plan,
            from: self.state.offset,
            start: now,
            duration,
            easing: self.config.easing,
        });
        debug!(
            ?token,
            from = self.state.offset,
            target_offset = plan.target_offset,
            duration_ms = duration.as_millis(),
            "Settle started"
        );
        token
    }

    fn advance_settle(&mut self, settle: Settle, now: Instant) -> TickOutcome {
        if is_complete(settle.start, now, settle.duration) {
            self.state.offset = settle.plan.target_offset;
            self.motion = Motion::Still;
            let emitted = self.emit(settle.plan.target_offset);
            return TickOutcome::Settled {
                index: settle.plan.target_index,
                emitted,
            };
        }

        let t = settle.easing.apply(progress(settle.start, now, settle.duration));
        self.state.offset = lerp(settle.from, settle.plan.target_offset, t);
        TickOutcome::Animating {
            offset: self.state.offset,
        }
    }

    /// Report a settled index change exactly once
    fn emit(&mut self, target_offset: f64) -> bool {
        let Some(index) = self.geometry.nearest_index(target_offset, self.items.len()) else {
            return false;
        };
        if index == self.state.current_index {
            trace!(index, "Settled on current index, nothing to emit");
            return false;
        }

        self.state.current_index = index;
        debug!(index, label = %self.items[index].label, "Selection changed");

        if let Some(ref tx) = self.event_tx {
            let event = SelectionEvent::new(index, self.items[index].clone());
            if tx.send(event).is_err() {
                warn!("Failed to send selection event: receiver dropped");
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(len: usize) -> WheelEngine<usize> {
        let items = (0..len).map(|i| Item::new(format!("item {}", i), i)).collect();
        WheelEngine::new(items, Geometry::new(40.0, 2).unwrap())
    }

    #[test]
    fn test_state_transitions() {
        let mut engine = engine(10);
        let now = Instant::now();
        assert_eq!(engine.state(), PickerState::Idle);

        assert!(engine.begin_drag());
        assert_eq!(engine.state(), PickerState::Dragging);

        engine.update_drag(-50.0);
        let token = engine.end_drag(0.0, now).unwrap();
        assert_eq!(engine.state(), PickerState::Settling);
        assert_eq!(engine.settle_token(), Some(token));

        let outcome = engine.tick(now + Duration::from_millis(300));
        assert_eq!(outcome, TickOutcome::Settled { index: 1, emitted: true });
        assert_eq!(engine.state(), PickerState::Idle);
        assert!(!engine.needs_update());
    }

    #[test]
    fn test_drag_is_anchor_relative() {
        let mut engine = engine(10);
        engine.jump_to_index(3);
        engine.begin_drag();
        engine.update_drag(-10.0);
        engine.update_drag(-30.0);
        engine.update_drag(-30.0);
        assert_eq!(engine.offset(), -150.0);
        assert_eq!(engine.scroll_state().drag_anchor_offset, -120.0);
    }

    #[test]
    fn test_elastic_overscroll_at_top() {
        let mut engine = engine(10);
        engine.begin_drag();
        engine.update_drag(100.0);
        assert!((engine.offset() - 20.0).abs() < 1e-9);
        assert!(engine.is_overscrolled());
    }

    #[test]
    fn test_animation_moves_towards_target() {
        let mut engine = engine(10);
        let now = Instant::now();
        engine.begin_drag();
        engine.update_drag(-70.0);
        engine.end_drag(0.0, now);

        match engine.tick(now + Duration::from_millis(150)) {
            TickOutcome::Animating { offset } => {
                // Quad ease-out is 75% of the way at half time
                assert!((offset - (-77.5)).abs() < 1e-9, "offset {}", offset);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_new_drag_cancels_settle_and_stale_tick_is_noop() {
        let mut engine = engine(10);
        let now = Instant::now();
        engine.begin_drag();
        engine.update_drag(-70.0);
        let token = engine.end_drag(0.0, now).unwrap();
        engine.tick(now + Duration::from_millis(100));
        let mid = engine.offset();

        assert!(engine.begin_drag());
        assert_eq!(engine.scroll_state().drag_anchor_offset, mid);
        assert_eq!(engine.advance(token, now + Duration::from_millis(400)), TickOutcome::Stale);
        assert_eq!(engine.offset(), mid);
        assert_eq!(engine.state(), PickerState::Dragging);
    }

    #[test]
    fn test_wheel_only_refuses_drag() {
        let mut engine = engine(10).with_input_mode(InputMode::WheelOnly);
        assert!(!engine.begin_drag());
        assert_eq!(engine.state(), PickerState::Idle);
        assert!(engine.handle_wheel_delta(10.0, Instant::now()));
    }

    #[test]
    fn test_wheel_is_hard_clamped() {
        let mut engine = engine(10);
        let now = Instant::now();
        engine.handle_wheel_delta(-500.0, now);
        assert_eq!(engine.offset(), 0.0);
        engine.handle_wheel_delta(10_000.0, now);
        assert_eq!(engine.offset(), -360.0);
    }

    #[test]
    fn test_wheel_debounce() {
        let mut engine = engine(10);
        let now = Instant::now();
        // 25 * 1.2 = 30 units per delta
        engine.handle_wheel_delta(25.0, now);
        engine.handle_wheel_delta(25.0, now + Duration::from_millis(60));
        assert_eq!(engine.offset(), -60.0);
        assert_eq!(engine.tick(now + Duration::from_millis(120)), TickOutcome::Waiting);
        assert_eq!(engine.state(), PickerState::Settling);

        let outcome = engine.tick(now + Duration::from_millis(170));
        assert_eq!(outcome, TickOutcome::Animating { offset: -60.0 });
        let outcome = engine.tick(now + Duration::from_millis(500));
        assert_eq!(outcome, TickOutcome::Settled { index: 2, emitted: true });
        assert_eq!(engine.offset(), -80.0);
    }

    #[test]
    fn test_wheel_ignored_while_dragging() {
        let mut engine = engine(10);
        engine.begin_drag();
        assert!(!engine.handle_wheel_delta(40.0, Instant::now()));
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn test_instant_settle_when_smoothing_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut engine = engine(10).with_scroll_config(config);
        let now = Instant::now();
        engine.begin_drag();
        engine.update_drag(-130.0);
        engine.end_drag(0.0, now);
        assert_eq!(engine.tick(now), TickOutcome::Settled { index: 3, emitted: true });
        assert_eq!(engine.offset(), -120.0);
    }

    #[test]
    fn test_jump_clamps_and_cancels() {
        let mut engine = engine(5);
        engine.handle_wheel_delta(40.0, Instant::now());
        engine.jump_to_index(99);
        assert_eq!(engine.current_index(), Some(4));
        assert_eq!(engine.offset(), -160.0);
        assert!(!engine.needs_update());
    }

    #[test]
    fn test_from_config_rejects_bad_geometry() {
        let mut config = AppConfig::default();
        config.picker.item_extent = 0.0;
        let result = WheelEngine::from_config(vec![Item::new("a", 1)], &config);
        assert!(matches!(result, Err(crate::Error::InvalidGeometry { .. })));
    }

    #[test]
    fn test_from_config_clamps_initial_index() {
        let mut config = AppConfig::default();
        config.picker.initial_index = 12;
        let items = (0..4).map(|i| Item::new(i.to_string(), i)).collect();
        let engine = WheelEngine::from_config(items, &config).unwrap();
        assert_eq!(engine.current_index(), Some(3));
        assert_eq!(engine.offset(), -120.0);
    }
}
