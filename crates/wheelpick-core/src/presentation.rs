//! Row presentation model
//!
//! Pure mapping from the instantaneous scroll offset to per-row visuals.
//! Nothing here keeps state between frames; call it for every rendered row
//! on every frame.

use crate::config::PresentationConfig;
use crate::geometry::Geometry;

/// Visual parameters for one row at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowVisual {
    /// Opacity in `[min_opacity, max_opacity]`
    pub opacity: f64,
    /// Scale in `[min_scale, max_scale]`
    pub scale: f64,
    /// Rotation around the horizontal axis; rows below center tilt negative
    pub tilt_deg: f64,
    /// Row is the one nearest the center line
    pub highlighted: bool,
}

/// Linear interpolation of `x` from `input` to `output`, clamped to the endpoints.
///
/// A degenerate input range (`lo >= hi`) maps `x <= lo` to the first output
/// and everything else to the second.
pub fn interpolate(x: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;

    if in_hi <= in_lo {
        return if x <= in_lo { out_lo } else { out_hi };
    }

    let t = ((x - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Signed distance of `row` from the center line, in items.
/// Positive below center, negative above.
#[inline]
pub fn signed_row_distance(offset: f64, row: usize, geometry: &Geometry) -> f64 {
    (offset + row as f64 * geometry.item_extent()) / geometry.item_extent()
}

/// Distance of `row` from the center line, in items (always >= 0)
#[inline]
pub fn row_distance(offset: f64, row: usize, geometry: &Geometry) -> f64 {
    signed_row_distance(offset, row, geometry).abs()
}

pub fn row_visual(
    offset: f64,
    row: usize,
    geometry: &Geometry,
    style: &PresentationConfig,
) -> RowVisual {
    let signed = signed_row_distance(offset, row, geometry);
    let distance = signed.abs();
    let half = geometry.visible_half_count() as f64;

    let opacity = interpolate(
        distance,
        (0.0, half),
        (style.max_opacity, style.min_opacity),
    );
    let scale = interpolate(distance, (0.0, half), (style.max_scale, style.min_scale));

    // Tilt reaches its maximum at the outer edge of the last visible row
    let reach = (signed / (half + 0.5)).clamp(-1.0, 1.0);
    let tilt_deg = -style.max_tilt_deg * reach;

    RowVisual {
        opacity,
        scale,
        tilt_deg,
        highlighted: distance < 0.5,
    }
}

/// Visuals for every row intersecting the viewport, in row order
pub fn visible_row_visuals(
    offset: f64,
    len: usize,
    geometry: &Geometry,
    style: &PresentationConfig,
) -> Vec<(usize, RowVisual)> {
    geometry
        .visible_rows(offset, len)
        .map(|row| (row, row_visual(offset, row, geometry, style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(40.0, 2).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center_row() {
        let visual = row_visual(-120.0, 3, &geometry(), &PresentationConfig::default());
        assert!(close(visual.opacity, 1.0));
        assert!(close(visual.scale, 1.1));
        assert!(close(visual.tilt_deg, 0.0));
        assert!(visual.highlighted);
    }

    #[test]
    fn test_edge_and_beyond_clamped() {
        let style = PresentationConfig::default();
        for row in [5, 6, 9] {
            let visual = row_visual(-120.0, row, &geometry(), &style);
            assert!(close(visual.opacity, 0.5), "row {}", row);
            assert!(close(visual.scale, 0.7), "row {}", row);
            assert!(!visual.highlighted);
        }
        let above = row_visual(-120.0, 0, &geometry(), &style);
        assert!(close(above.opacity, 0.5));
        assert!(close(above.scale, 0.7));
    }

    #[test]
    fn test_halfway_row() {
        // One item away with two visible on each side: halfway through the ramp
        let visual = row_visual(-120.0, 4, &geometry(), &PresentationConfig::default());
        assert!(close(visual.opacity, 0.75));
        assert!(close(visual.scale, 0.9));
    }

    #[test]
    fn test_fractional_offset() {
        let g = geometry();
        let style = PresentationConfig::default();
        // Offset -95 sits 0.375 items below row 2 and 0.625 above row 3
        let row2 = row_visual(-95.0, 2, &g, &style);
        let row3 = row_visual(-95.0, 3, &g, &style);
        assert!(row2.highlighted);
        assert!(!row3.highlighted);
        assert!(row2.opacity > row3.opacity);
        assert!(close(row_distance(-95.0, 3, &g), 0.625));
    }

    #[test]
    fn test_tilt_direction() {
        let g = geometry();
        let style = PresentationConfig::default();
        let below = row_visual(-120.0, 4, &g, &style);
        let above = row_visual(-120.0, 2, &g, &style);
        assert!(below.tilt_deg < 0.0);
        assert!(above.tilt_deg > 0.0);
        assert!(close(below.tilt_deg, -above.tilt_deg));
        assert!(close(row_visual(-120.0, 9, &g, &style).tilt_deg, -25.0));
    }

    #[test]
    fn test_zero_half_count() {
        let g = Geometry::new(40.0, 0).unwrap();
        let style = PresentationConfig::default();
        let center = row_visual(0.0, 0, &g, &style);
        let next = row_visual(0.0, 1, &g, &style);
        assert!(close(center.opacity, 1.0));
        assert!(close(next.opacity, 0.5));
        assert!(close(next.scale, 0.7));
    }

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(-1.0, (0.0, 2.0), (1.0, 0.5)), 1.0);
        assert_eq!(interpolate(5.0, (0.0, 2.0), (1.0, 0.5)), 0.5);
        assert!(close(interpolate(1.0, (0.0, 2.0), (1.1, 0.7)), 0.9));
    }

    #[test]
    fn test_visible_row_visuals() {
        let g = geometry();
        let visuals = visible_row_visuals(-120.0, 10, &g, &PresentationConfig::default());
        let rows: Vec<usize> = visuals.iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(visuals.iter().filter(|(_, v)| v.highlighted).count(), 1);
    }
}
