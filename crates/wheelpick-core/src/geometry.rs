//! Item geometry: offset <-> index arithmetic and wheel layout.
//!
//! Offsets are signed so that a picker settled on `index` sits at
//! `offset = -index * item_extent`. The first item is therefore the upper
//! bound (`0`) and the last item the lower bound.

use std::ops::Range;

use crate::{Error, Result};

/// Validated row extent and visible window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    item_extent: f64,
    visible_half_count: usize,
}

impl Geometry {
    /// Validate and build a geometry.
    ///
    /// `item_extent` must be finite and strictly positive and
    /// `visible_half_count` must not be negative.
    pub fn new(item_extent: f64, visible_half_count: i64) -> Result<Self> {
        if !item_extent.is_finite() || item_extent <= 0.0 || visible_half_count < 0 {
            return Err(Error::InvalidGeometry {
                item_extent,
                visible_half_count,
            });
        }

        Ok(Self {
            item_extent,
            visible_half_count: visible_half_count as usize,
        })
    }

    #[inline]
    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    #[inline]
    pub fn visible_half_count(&self) -> usize {
        self.visible_half_count
    }

    /// Total rows in the visible window, centered row included
    #[inline]
    pub fn visible_count(&self) -> usize {
        2 * self.visible_half_count + 1
    }

    /// Settled offset for `index`
    #[inline]
    pub fn offset_for_index(&self, index: usize) -> f64 {
        -(index as f64) * self.item_extent
    }

    /// Signed fractional index under the center line
    #[inline]
    pub fn index_position(&self, offset: f64) -> f64 {
        -offset / self.item_extent
    }

    /// Nearest index to `offset`, clamped to `len` items.
    ///
    /// Returns `None` when there are no items.
    pub fn nearest_index(&self, offset: f64, len: usize) -> Option<usize> {
        self.clamp_index(self.index_position(offset).round(), len)
    }

    /// Clamp a fractional index into `[0, len - 1]`; non-finite input maps to 0
    pub fn clamp_index(&self, index: f64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = if index.is_finite() { index } else { 0.0 };
        Some(index.clamp(0.0, (len - 1) as f64) as usize)
    }

    /// Upper scroll bound (first item)
    #[inline]
    pub fn max_offset(&self) -> f64 {
        0.0
    }

    /// Lower scroll bound (last item); `0` when there are no items
    #[inline]
    pub fn min_offset(&self, len: usize) -> f64 {
        self.offset_for_index(len.saturating_sub(1))
    }

    /// Hard-clamp an offset into the scrollable range
    pub fn clamp_offset(&self, offset: f64, len: usize) -> f64 {
        if !offset.is_finite() {
            return self.max_offset();
        }
        offset.clamp(self.min_offset(len), self.max_offset())
    }

    /// Rows intersecting the viewport at `offset`.
    ///
    /// Covers the `2 * half + 1` window plus one partially visible row on each
    /// side, clamped to `len`.
    pub fn visible_rows(&self, offset: f64, len: usize) -> Range<usize> {
        let center = self.index_position(offset);
        if len == 0 || !center.is_finite() {
            return 0..0;
        }
        let half = self.visible_half_count as f64;
        let last = (len - 1) as f64;

        let start = (center - half - 1.0).floor().clamp(0.0, last) as usize;
        let end = ((center + half + 1.0).ceil() + 1.0).clamp(0.0, len as f64) as usize;

        start..end.max(start)
    }

    pub fn layout(&self) -> WheelLayout {
        WheelLayout::new(self)
    }
}

/// Static layout of the wheel viewport, in scroll units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    /// Height of the whole viewport
    pub viewport_extent: f64,
    /// Distance from the viewport top to the selection band
    pub band_top: f64,
    /// Height of the selection band (one row)
    pub band_extent: f64,
    /// Height of the top and bottom fade masks
    pub mask_extent: f64,
}

impl WheelLayout {
    fn new(geometry: &Geometry) -> Self {
        let extent = geometry.item_extent;
        let half = geometry.visible_half_count as f64;
        Self {
            viewport_extent: extent * geometry.visible_count() as f64,
            band_top: extent * half,
            band_extent: extent,
            mask_extent: extent * half,
        }
    }

    /// Top edge of `row` relative to the viewport top
    #[inline]
    pub fn row_top(&self, offset: f64, row: usize) -> f64 {
        self.band_top + offset + row as f64 * self.band_extent
    }
}
