//! Conversion between chart space and screen space.
//!
//! Axis models work in normalized `[0, 1]` offsets; the layout layer works
//! in pixels. [`Transform`] bridges the two for a pair of axes, handling the
//! y-axis flip between chart coordinates (y grows upward) and screen
//! coordinates (y grows downward).
//!
//! # Examples
//!
//! ```
//! use skala::{LinearAxis, PlotPoint, ScreenPoint, ScreenRect, Transform};
//!
//! let x_axis = LinearAxis::<f64>::new(0.0, 100.0)?;
//! let y_axis = LinearAxis::<f64>::new(0.0, 50.0)?;
//! let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };
//!
//! let transform = Transform::new(screen, &x_axis, &y_axis);
//!
//! // The center of the data maps to the center of the screen.
//! let center = transform.chart_to_screen(&PlotPoint::new(50.0, 25.0))?;
//! assert_eq!(center, ScreenPoint::new(400.0, 300.0));
//!
//! // And back again.
//! let point = transform.screen_to_chart(&ScreenPoint::new(400.0, 300.0));
//! assert_eq!(point, PlotPoint::new(50.0, 25.0));
//! # Ok::<(), skala::AxisError>(())
//! ```

use crate::axis::AxisModel;
use crate::error::AxisError;

/// A rectangle in screen/pixel coordinates, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A point in screen/pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in chart space. The x and y value types are independent, so a
/// categorical x-axis can pair with a numeric y-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint<X, Y = X> {
    pub x: X,
    pub y: Y,
}

impl<X, Y> PlotPoint<X, Y> {
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

/// Converts chart points to pixels and back through a pair of axis models.
///
/// Chart y grows upward while screen y grows downward; the flip happens
/// here. Offsets outside `[0, 1]` (points outside the current view) map to
/// pixels outside the rectangle, mirroring the axes' unclamped offsets.
pub struct Transform<'a, X: AxisModel, Y: AxisModel> {
    screen: ScreenRect,
    x_axis: &'a X,
    y_axis: &'a Y,
}

impl<'a, X: AxisModel, Y: AxisModel> Transform<'a, X, Y> {
    pub fn new(screen: ScreenRect, x_axis: &'a X, y_axis: &'a Y) -> Self {
        Self {
            screen,
            x_axis,
            y_axis,
        }
    }

    /// Maps a chart point to pixel coordinates. Fails when either axis
    /// cannot place the value (unknown category, non-positive log value).
    pub fn chart_to_screen(
        &self,
        point: &PlotPoint<X::Value, Y::Value>,
    ) -> Result<ScreenPoint, AxisError> {
        let x_offset = self.x_axis.offset_of(&point.x)? as f32;
        let y_offset = self.y_axis.offset_of(&point.y)? as f32;
        Ok(ScreenPoint::new(
            self.screen.x + x_offset * self.screen.width,
            self.screen.y + (1.0 - y_offset) * self.screen.height,
        ))
    }

    /// Maps a pixel position back to chart values. Total: positions outside
    /// the rectangle resolve to boundary values via the axes' lenient
    /// inverse.
    pub fn screen_to_chart(&self, point: &ScreenPoint) -> PlotPoint<X::Value, Y::Value> {
        let x_offset = f64::from((point.x - self.screen.x) / self.screen.width);
        let y_offset = 1.0 - f64::from((point.y - self.screen.y) / self.screen.height);
        PlotPoint::new(self.x_axis.value_at(x_offset), self.y_axis.value_at(y_offset))
    }
}
