//! Axis models for interactive charts.
//!
//! `skala` provides the coordinate backbone of an XY chart: models that map
//! domain values to normalized `[0, 1]` screen offsets, generate "nice" tick
//! marks for axis labels, and maintain a zoomable, pannable view window
//! inside a fixed overall range. It contains no rendering; the host layout
//! layer queries offsets and ticks and draws however it likes.
//!
//! # Core Concepts
//!
//! ## Axis models
//!
//! Every axis variant implements [`AxisModel`]: value-to-offset mapping, the
//! lenient inverse, and on-demand tick generation sized by the axis length
//! in pixels.
//!
//! - [`LinearAxis`] - linear axis over `f32`/`f64`/`i32`/`i64` domains
//! - [`LogAxis`] - base-10 logarithmic axis over decade exponents
//! - [`CategoryAxis`] - discrete axis over an ordered category list
//!
//! ## View windows
//!
//! Continuous axes also implement [`ZoomableAxis`]: a mutable view window
//! (the visible sub-range) that zoom, pan and `set_view_range` move around
//! inside the fixed overall range, clamped to configurable extent bounds.
//! Offsets are always relative to the current view.
//!
//! ## Transforms
//!
//! [`Transform`] connects a pair of axes to a [`ScreenRect`], converting
//! between [`PlotPoint`] data values and [`ScreenPoint`] pixels, including
//! the y-axis flip between chart space and screen space.
//!
//! # Examples
//!
//! ## Offsets and ticks
//!
//! ```rust
//! use skala::{AxisModel, LinearAxis};
//!
//! let axis = LinearAxis::<f64>::new(0.0, 100.0)?;
//!
//! assert_eq!(axis.offset_of(&50.0)?, 0.5);
//! assert_eq!(axis.value_at(0.5), 50.0);
//!
//! // Ticks are sized by the axis length in pixels: a 500 px axis with the
//! // default 50 px budget fits major ticks every 10 units.
//! let ticks = axis.tick_values(500.0);
//! assert_eq!(ticks.major.len(), 11);
//! # Ok::<(), skala::AxisError>(())
//! ```
//!
//! ## Zoom and pan
//!
//! ```rust
//! use skala::{LinearAxis, ZoomableAxis};
//!
//! let mut axis = LinearAxis::<f64>::new(0.0, 100.0)?;
//!
//! axis.zoom(2.0, 0.5)?;
//! assert_eq!(axis.view_range(), (25.0, 75.0));
//!
//! // Pan reports whether the view moved, so gesture handlers know whether
//! // to consume the event.
//! assert!(axis.pan(0.5));
//! assert!(!axis.pan(1.0)); // already at the right edge
//! # Ok::<(), skala::AxisError>(())
//! ```
//!
//! ## Categorical axes
//!
//! ```rust
//! use skala::{AxisModel, CategoryAxis, CategoryMargin};
//!
//! let axis = CategoryAxis::with_margin(vec!["A", "B", "C"], CategoryMargin::Full)?;
//! assert_eq!(axis.offset_of(&"B")?, 0.5);
//! # Ok::<(), skala::AxisError>(())
//! ```

pub mod axis;
pub mod error;
pub mod transform;

pub use axis::category::{CategoryAxis, CategoryMargin};
pub use axis::linear::{AxisConfig, LinearAxis};
pub use axis::log::LogAxis;
pub use axis::{AxisModel, AxisNumber, ListenerId, TickValues, ZoomableAxis};
pub use error::AxisError;
pub use transform::{PlotPoint, ScreenPoint, ScreenRect, Transform};
