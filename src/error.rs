use thiserror::Error;

/// Errors raised by axis construction and mutation.
///
/// Construction-time variants mean the axis was never created; runtime
/// variants leave the axis state untouched. Degenerate layout inputs
/// (a zero-length axis, an integer spacing that rounds to zero) are not
/// errors and are handled by falling back to safe defaults instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    /// The overall or requested range does not satisfy `start < end`.
    #[error("axis range must satisfy start < end, got {start}..{end}")]
    EmptyRange { start: f64, end: f64 },

    /// View extent bounds violate `0 < min <= max <= range width`.
    #[error("view extents must satisfy 0 < min ({min}) <= max ({max}) <= range width ({width})")]
    InvalidViewExtent { min: f64, max: f64, width: f64 },

    /// The minimum major tick increment is non-positive or wider than the range.
    #[error("minimum major tick increment must lie in (0, {width}], got {increment}")]
    InvalidTickIncrement { increment: f64, width: f64 },

    /// The minimum major tick spacing (in pixels) is non-positive.
    #[error("minimum major tick spacing must be positive, got {0}")]
    InvalidTickSpacing(f64),

    /// `zoom` was called with a non-positive or non-finite factor.
    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoomFactor(f64),

    /// `zoom` was called with a pivot outside the current view.
    #[error("zoom pivot must lie in [0, 1], got {0}")]
    PivotOutOfBounds(f64),

    /// A value passed to a categorical axis is not one of its categories.
    #[error("value is not one of this axis' categories")]
    UnknownCategory,

    /// A categorical axis was constructed with an empty category list.
    #[error("category axis needs at least one category")]
    NoCategories,

    /// A custom category margin fraction is negative or non-finite.
    #[error("category margin must be a non-negative finite fraction, got {0}")]
    InvalidMargin(f64),

    /// A logarithmic axis was asked for the offset of a non-positive value.
    #[error("logarithmic axes only accept positive values, got {0}")]
    NonPositiveValue(f64),
}
