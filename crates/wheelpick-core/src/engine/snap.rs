//! Pure snap and overscroll arithmetic

use super::state::SnapPlan;
use crate::geometry::Geometry;

/// Damp the part of `candidate` that lies outside `[min, max]`
pub fn elastic_offset(candidate: f64, min: f64, max: f64, damping: f64) -> f64 {
    if candidate > max {
        max + (candidate - max) * damping
    } else if candidate < min {
        min - (min - candidate) * damping
    } else {
        candidate
    }
}

/// Pick the item a release at `offset` with `velocity` lands on.
///
/// `velocity` is in units per second, positive towards higher indices. Above
/// `fling_threshold` (strictly) the target is one item past the nearest one in
/// the direction of travel. Returns `None` when there are no items.
pub fn plan_snap(
    offset: f64,
    velocity: f64,
    len: usize,
    geometry: &Geometry,
    fling_threshold: f64,
) -> Option<SnapPlan> {
    let mut position = geometry.index_position(offset).round();
    if !position.is_finite() {
        position = 0.0;
    }
    if velocity.abs() > fling_threshold {
        position += velocity.signum();
    }

    let target_index = geometry.clamp_index(position, len)?;
    Some(SnapPlan {
        target_offset: geometry.offset_for_index(target_index),
        target_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(40.0, 2).unwrap()
    }

    #[test]
    fn test_elastic_inside_bounds_untouched() {
        assert_eq!(elastic_offset(-100.0, -360.0, 0.0, 0.2), -100.0);
    }

    #[test]
    fn test_elastic_past_top() {
        assert!((elastic_offset(50.0, -360.0, 0.0, 0.2) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_past_bottom() {
        assert!((elastic_offset(-460.0, -360.0, 0.0, 0.2) + 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_below_threshold() {
        let plan = plan_snap(-95.0, 50.0, 10, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 2);
        assert_eq!(plan.target_offset, -80.0);
    }

    #[test]
    fn test_fling_advances_one() {
        let plan = plan_snap(-120.0, 1200.0, 10, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 4);
        let plan = plan_snap(-120.0, -1200.0, 10, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let plan = plan_snap(-120.0, 1000.0, 10, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 3);
    }

    #[test]
    fn test_fling_clamped_at_ends() {
        let plan = plan_snap(-360.0, 5000.0, 10, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 9);
        let plan = plan_snap(12.0, -5000.0, 10, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 0);
    }

    #[test]
    fn test_empty_and_nan() {
        assert!(plan_snap(0.0, 0.0, 0, &geometry(), 1000.0).is_none());
        let plan = plan_snap(f64::NAN, f64::NAN, 5, &geometry(), 1000.0).unwrap();
        assert_eq!(plan.target_index, 0);
    }
}
