//! Axis models: mapping domain values to normalized screen offsets and
//! generating tick marks.
//!
//! Every axis variant implements [`AxisModel`]: a conversion from domain
//! values to normalized `[0, 1]` offsets, the inverse mapping, and on-demand
//! tick generation sized by the axis length in pixels. Continuous numeric
//! axes additionally implement [`ZoomableAxis`], which maintains a view
//! window (the visible sub-range) inside the fixed overall range.
//!
//! Available variants:
//! - [`linear::LinearAxis`] - linear axis over `f32`/`f64`/`i32`/`i64`
//! - [`log::LogAxis`] - base-10 logarithmic axis over decade exponents
//! - [`category::CategoryAxis`] - discrete axis over an ordered category list

pub mod category;
pub mod linear;
pub mod log;

mod number;
mod observe;
mod ticks;
mod view;

pub use number::AxisNumber;
pub use observe::ListenerId;

use crate::error::AxisError;

/// Snapshot of tick positions for the current view.
///
/// Recomputed on demand by [`AxisModel::tick_values`]; never cached by the
/// axis itself. Major ticks are the labeled gridline positions, minor ticks
/// the unlabeled subdivisions between them.
#[derive(Debug, Clone, PartialEq)]
pub struct TickValues<T> {
    /// Labeled gridline positions, in iteration order.
    pub major: Vec<T>,
    /// Unlabeled subdivision positions, in iteration order.
    pub minor: Vec<T>,
}

impl<T> TickValues<T> {
    /// A snapshot with no ticks at all.
    pub fn empty() -> Self {
        Self {
            major: Vec::new(),
            minor: Vec::new(),
        }
    }

    /// True when neither major nor minor ticks are present.
    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty()
    }
}

/// Common contract for all axis variants.
///
/// # Offset semantics
///
/// [`offset_of`](Self::offset_of) maps a domain value to a normalized offset
/// relative to the *current view*: `0.0` at the view start, `1.0` at the view
/// end. The result is deliberately unclamped so values outside the view map
/// beyond `[0, 1]` and the rendering layer can decide how to handle them.
/// It fails only for values the axis cannot place at all (an unknown
/// category, a non-positive value on a logarithmic axis).
///
/// [`value_at`](Self::value_at) is the lenient inverse: the offset is clamped
/// into `[0, 1]` before mapping, so positions slightly outside the plot area
/// (common during drag gestures) still resolve to a boundary value. Discrete
/// axes additionally round to the nearest valid value.
///
/// # Examples
///
/// ```
/// use skala::{AxisModel, LinearAxis};
///
/// let axis = LinearAxis::<f64>::new(0.0, 100.0)?;
///
/// assert_eq!(axis.offset_of(&0.0)?, 0.0);
/// assert_eq!(axis.offset_of(&50.0)?, 0.5);
/// assert_eq!(axis.offset_of(&100.0)?, 1.0);
///
/// // Out-of-view values are not clamped...
/// assert_eq!(axis.offset_of(&150.0)?, 1.5);
/// // ...but out-of-range offsets are.
/// assert_eq!(axis.value_at(1.5), 100.0);
/// # Ok::<(), skala::AxisError>(())
/// ```
pub trait AxisModel {
    /// The domain value type placed along this axis.
    type Value: Clone;

    /// Normalized offset of `value` relative to the current view. Unclamped.
    fn offset_of(&self, value: &Self::Value) -> Result<f64, AxisError>;

    /// Domain value at a normalized offset. Clamps `offset` into `[0, 1]`.
    fn value_at(&self, offset: f64) -> Self::Value;

    /// Tick positions for the current view, given the axis length in pixels.
    ///
    /// A zero or negative `axis_length` is a legitimate transient layout
    /// state (e.g. a measurement pass with zero constraints) and degrades to
    /// the sparsest tick grid rather than failing.
    fn tick_values(&self, axis_length: f64) -> TickValues<Self::Value>;
}

/// Axis variants with a zoomable, pannable view window.
///
/// The view window is a mutable sub-range of the fixed overall range set at
/// construction. Every mutation keeps the view inside the overall range and
/// its width between the configured minimum and maximum view extents.
///
/// # Examples
///
/// ```
/// use skala::{LinearAxis, ZoomableAxis};
///
/// let mut axis = LinearAxis::<f64>::new(0.0, 100.0)?;
///
/// // Zoom in 2x about the view center.
/// axis.zoom(2.0, 0.5)?;
/// assert_eq!(axis.view_range(), (25.0, 75.0));
///
/// // Pan right by half the view width; the shift is clamped to the range.
/// assert!(axis.pan(0.5));
/// assert_eq!(axis.view_range(), (50.0, 100.0));
///
/// // Already at the right edge: nothing to consume.
/// assert!(!axis.pan(0.25));
/// # Ok::<(), skala::AxisError>(())
/// ```
pub trait ZoomableAxis: AxisModel {
    /// The currently visible sub-range of the overall range.
    fn view_range(&self) -> (Self::Value, Self::Value);

    /// Scales the view about `pivot`, a normalized position in the current
    /// view. `factor > 1` zooms in, `factor < 1` zooms out, `factor == 1`
    /// is a no-op. Fails for a non-positive or non-finite factor, or a pivot
    /// outside `[0, 1]`, leaving the view unchanged. A no-op when zooming is
    /// disabled for this axis.
    fn zoom(&mut self, factor: f64, pivot: f64) -> Result<(), AxisError>;

    /// Shifts the view by `amount` times the current view width, clamped so
    /// the view stays inside the overall range. Returns whether the view
    /// actually moved; callers use this to decide whether to consume the
    /// gesture or let it propagate. Reports no change when panning is
    /// disabled.
    fn pan(&mut self, amount: f64) -> bool;

    /// Adopts `start..end` as the new view, clamped into the overall range
    /// and resized (symmetrically about its midpoint, anchored at a range
    /// boundary when necessary) to respect the view extent bounds. Fails if
    /// `end <= start`.
    fn set_view_range(
        &mut self,
        start: Self::Value,
        end: Self::Value,
    ) -> Result<(), AxisError>;
}
