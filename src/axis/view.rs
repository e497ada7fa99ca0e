//! The view-range controller: a mutable window over a fixed overall range.
//!
//! All window arithmetic runs in `f64` regardless of the axis value type;
//! discrete axes convert at the API boundary.

use crate::error::AxisError;

/// A zoomable, pannable sub-range of a fixed overall range.
///
/// Invariants, upheld by every mutation:
/// - the current view lies inside the overall range,
/// - `min_extent <= view width <= max_extent`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ViewWindow {
    range: (f64, f64),
    current: (f64, f64),
    min_extent: f64,
    max_extent: f64,
}

impl ViewWindow {
    /// The initial view spans the whole range.
    pub(crate) fn new(
        range: (f64, f64),
        min_extent: f64,
        max_extent: f64,
    ) -> Result<Self, AxisError> {
        let width = range.1 - range.0;
        if !(width > 0.0) || !width.is_finite() {
            return Err(AxisError::EmptyRange {
                start: range.0,
                end: range.1,
            });
        }
        if !(min_extent > 0.0) || min_extent > max_extent || max_extent > width {
            return Err(AxisError::InvalidViewExtent {
                min: min_extent,
                max: max_extent,
                width,
            });
        }
        let mut window = Self {
            range,
            current: range,
            min_extent,
            max_extent,
        };
        // A max extent narrower than the range means the initial view is a
        // centered slice of it rather than the whole range.
        window.set_view(range.0, range.1);
        Ok(window)
    }

    pub(crate) fn range(&self) -> (f64, f64) {
        self.range
    }

    pub(crate) fn current(&self) -> (f64, f64) {
        self.current
    }

    /// Scales the view about `pivot` (normalized within the current view).
    /// Returns whether the view changed.
    pub(crate) fn zoom(&mut self, factor: f64, pivot: f64) -> Result<bool, AxisError> {
        if !(factor > 0.0) || !factor.is_finite() {
            return Err(AxisError::InvalidZoomFactor(factor));
        }
        if !(0.0..=1.0).contains(&pivot) {
            return Err(AxisError::PivotOutOfBounds(pivot));
        }
        if factor == 1.0 {
            return Ok(false);
        }

        let (start, end) = self.current;
        let pivot_value = start + pivot * (end - start);
        let new_start = pivot_value - (pivot_value - start) / factor;
        let new_end = pivot_value + (end - pivot_value) / factor;
        Ok(self.set_view(new_start, new_end))
    }

    /// Shifts the view by `amount` times its width, clamped to the overall
    /// range. Returns whether the view moved.
    pub(crate) fn pan(&mut self, amount: f64) -> bool {
        let (start, end) = self.current;
        let shift = amount * (end - start);
        if !shift.is_finite() {
            return false;
        }
        // The raw shift is clamped so neither side leaves the range.
        let shift = shift.clamp(self.range.0 - start, self.range.1 - end);
        if shift == 0.0 {
            return false;
        }
        self.current = (start + shift, end + shift);
        true
    }

    /// Clamp-and-resize shared by zoom and programmatic view changes.
    /// Returns whether the view changed.
    pub(crate) fn set_view(&mut self, start: f64, end: f64) -> bool {
        let (lo, hi) = self.range;
        let mut start = start.clamp(lo, hi);
        let mut end = end.clamp(lo, hi);
        let width = end - start;

        if width < self.min_extent {
            // Expand symmetrically about the midpoint; when that would
            // overflow the range, anchor the view at that boundary.
            let mid = (start + end) / 2.0;
            start = mid - self.min_extent / 2.0;
            end = mid + self.min_extent / 2.0;
            if start < lo {
                start = lo;
                end = lo + self.min_extent;
            } else if end > hi {
                end = hi;
                start = hi - self.min_extent;
            }
        } else if width > self.max_extent {
            // Shrink symmetrically; the result cannot leave the range since
            // both endpoints were already inside it.
            let mid = (start + end) / 2.0;
            start = mid - self.max_extent / 2.0;
            end = mid + self.max_extent / 2.0;
        }

        if (start, end) == self.current {
            return false;
        }
        self.current = (start, end);
        true
    }
}
