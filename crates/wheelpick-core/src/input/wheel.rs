use std::time::Instant;

use crate::engine::WheelEngine;
use crate::geometry::Geometry;
use crate::scroll::ScrollConfig;

/// Feeds wheel input into a `WheelEngine`
#[derive(Debug, Clone, Copy)]
pub struct WheelAdapter {
    /// Delta produced by one wheel notch, before sensitivity
    notch_delta: f64,
}

impl WheelAdapter {
    pub fn new(notch_delta: f64) -> Self {
        Self { notch_delta }
    }

    /// One notch moves the picker by exactly one item
    pub fn for_geometry(geometry: &Geometry, config: &ScrollConfig) -> Self {
        Self::new(geometry.item_extent() / config.wheel_sensitivity)
    }

    /// Scroll by whole notches; positive moves towards higher indices
    pub fn scroll_notches<T: Clone>(&self, engine: &mut WheelEngine<T>, notches: i32, now: Instant) -> bool {
        engine.handle_wheel_delta(notches as f64 * self.notch_delta, now)
    }

    /// Forward a raw pixel delta (e.g. a trackpad `deltaY`)
    pub fn scroll_pixels<T: Clone>(&self, engine: &mut WheelEngine<T>, delta: f64, now: Instant) -> bool {
        engine.handle_wheel_delta(delta, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, TickOutcome};
    use std::time::Duration;

    #[test]
    fn test_notch_moves_one_item() {
        let geometry = Geometry::new(40.0, 2).unwrap();
        let config = ScrollConfig::default();
        let items = (0..10).map(|i| Item::new(i.to_string(), i)).collect();
        let mut engine = WheelEngine::new(items, geometry).with_scroll_config(config.clone());
        let wheel = WheelAdapter::for_geometry(&geometry, &config);
        let t = Instant::now();

        assert!(wheel.scroll_notches(&mut engine, 3, t));
        assert!((engine.offset() + 120.0).abs() < 1e-9);

        let first = engine.tick(t + Duration::from_millis(100));
        let second = engine.tick(t + Duration::from_millis(500));
        assert!([first, second].contains(&TickOutcome::Settled { index: 3, emitted: true }));
        assert_eq!(engine.offset(), -120.0);
    }

    #[test]
    fn test_pixels_pass_through() {
        let geometry = Geometry::new(40.0, 2).unwrap();
        let items = (0..10).map(|i| Item::new(i.to_string(), i)).collect();
        let mut engine: WheelEngine<i32> = WheelEngine::new(items, geometry);
        let wheel = WheelAdapter::new(1.0);
        wheel.scroll_pixels(&mut engine, 10.0, Instant::now());
        assert!((engine.offset() + 12.0).abs() < 1e-9);
    }
}
