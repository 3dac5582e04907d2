use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::engine::{SettleToken, WheelEngine};
use crate::scroll::ScrollConfig;

/// Release velocity estimate from recent pointer samples
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    window: Duration,
    samples: VecDeque<(Instant, f64)>,
}

impl VelocityTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Record `position` at `at`. Samples older than the newest one are dropped.
    pub fn push(&mut self, at: Instant, position: f64) {
        if let Some(&(last, _)) = self.samples.back() {
            if at < last {
                trace!("Out-of-order pointer sample dropped");
                return;
            }
        }
        self.samples.push_back((at, position));

        while let Some(&(first, _)) = self.samples.front() {
            if at.saturating_duration_since(first) > self.window && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Position units per second over the sampled window; 0 without movement in time
    pub fn velocity(&self) -> f64 {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let dt = t1.saturating_duration_since(t0).as_secs_f64();
        if dt <= 0.0 {
            return 0.0;
        }
        (p1 - p0) / dt
    }
}

/// Feeds pointer drags into a `WheelEngine`
///
/// Positions are in screen units along the scroll axis, growing downwards.
/// `scale` converts screen units to engine units (for a terminal, one row is
/// one item extent).
#[derive(Debug, Clone)]
pub struct DragAdapter {
    scale: f64,
    origin: Option<f64>,
    tracker: VelocityTracker,
}

impl DragAdapter {
    pub fn new(scale: f64, window: Duration) -> Self {
        Self {
            scale,
            origin: None,
            tracker: VelocityTracker::new(window),
        }
    }

    pub fn from_config(config: &ScrollConfig, scale: f64) -> Self {
        Self::new(scale, config.velocity_window())
    }

    /// A drag is being followed
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Pointer went down at `position`
    pub fn press<T: Clone>(&mut self, engine: &mut WheelEngine<T>, position: f64, now: Instant) -> bool {
        if !engine.begin_drag() {
            self.origin = None;
            return false;
        }
        self.origin = Some(position);
        self.tracker.reset();
        self.tracker.push(now, position);
        true
    }

    /// Pointer moved to `position`
    pub fn motion<T: Clone>(&mut self, engine: &mut WheelEngine<T>, position: f64, now: Instant) {
        let Some(origin) = self.origin else {
            return;
        };
        self.tracker.push(now, position);
        engine.update_drag((position - origin) * self.scale);
    }

    /// Pointer released at `position`
    pub fn release<T: Clone>(
        &mut self,
        engine: &mut WheelEngine<T>,
        position: f64,
        now: Instant,
    ) -> Option<SettleToken> {
        let origin = self.origin.take()?;
        self.tracker.push(now, position);
        engine.update_drag((position - origin) * self.scale);

        // Pointer moving down drags content down, towards lower indices
        let velocity = -self.tracker.velocity() * self.scale;
        trace!(velocity, "Pointer released");
        engine.end_drag(velocity, now)
    }
}
