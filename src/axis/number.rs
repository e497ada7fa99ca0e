use std::fmt;

use num_traits::cast;

/// Numeric types usable as the domain of a [`LinearAxis`](super::linear::LinearAxis).
///
/// The view-window and tick algorithms run once, in `f64`, behind these
/// conversions; implementing types only say how to get in and out of `f64`
/// and whether the domain is discrete. Discrete types round on the way out,
/// so tick values and view endpoints always land on whole values.
pub trait AxisNumber: Copy + PartialOrd + fmt::Debug + 'static {
    /// Whether the type only admits whole values.
    const DISCRETE: bool;

    fn to_f64(self) -> f64;

    /// Conversion back from the internal representation. Rounds for
    /// discrete types and saturates at the type's bounds.
    fn from_f64(value: f64) -> Self;
}

impl AxisNumber for f64 {
    const DISCRETE: bool = false;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl AxisNumber for f32 {
    const DISCRETE: bool = false;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl AxisNumber for i32 {
    const DISCRETE: bool = true;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        let rounded = value.round();
        cast(rounded).unwrap_or(if rounded < 0.0 { i32::MIN } else { i32::MAX })
    }
}

impl AxisNumber for i64 {
    const DISCRETE: bool = true;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        let rounded = value.round();
        cast(rounded).unwrap_or(if rounded < 0.0 { i64::MIN } else { i64::MAX })
    }
}
