//! L4 Atomic Layer: Time calculation utilities for settle animations
//!
//! Every function takes the current instant explicitly so callers decide
//! which clock drives a frame.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - Time of the current frame
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(-120.0, -160.0, 1.0) + 160.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_clamped() {
        let start = Instant::now();
        let duration = Duration::from_millis(300);
        let mid = progress(start, start + Duration::from_millis(150), duration);
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(progress(start, start + Duration::from_secs(5), duration), 1.0);
    }

    #[test]
    fn test_clock_going_backwards_is_zero_progress() {
        let start = Instant::now() + Duration::from_millis(50);
        let now = start - Duration::from_millis(20);
        assert_eq!(progress(start, now, Duration::from_millis(300)), 0.0);
        assert!(!is_complete(start, now, Duration::from_millis(300)));
    }
}
