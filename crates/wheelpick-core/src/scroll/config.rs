//! L4 Atomic Layer: Duration helpers for scroll configuration

use std::time::Duration;

pub use crate::config::ScrollConfig;

impl ScrollConfig {
    /// Get settle duration as Duration
    #[inline]
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Get the wheel quiet period as Duration
    #[inline]
    pub fn wheel_debounce(&self) -> Duration {
        Duration::from_millis(self.wheel_debounce_ms)
    }

    /// Get the drag velocity sampling window as Duration
    #[inline]
    pub fn velocity_window(&self) -> Duration {
        Duration::from_millis(self.velocity_window_ms)
    }

    /// Get tick duration for animation FPS
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    /// Check if settle animations are effectively enabled
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.settle_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        let config = ScrollConfig {
            settle_duration_ms: 200,
            wheel_debounce_ms: 150,
            ..Default::default()
        };
        assert_eq!(config.settle_duration(), Duration::from_millis(200));
        assert_eq!(config.wheel_debounce(), Duration::from_millis(150));
        assert_eq!(config.velocity_window(), Duration::from_millis(100));
    }

    #[test]
    fn test_tick_duration() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
        config.animation_fps = 120;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(8));
        config.animation_fps = 0;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.settle_duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
