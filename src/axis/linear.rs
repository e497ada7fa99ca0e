use super::observe::{ListenerId, Listeners};
use super::ticks::{self, TickParams};
use super::view::ViewWindow;
use super::{AxisModel, AxisNumber, TickValues, ZoomableAxis};
use crate::error::AxisError;

/// Fraction of the range width used for the minimum view extent when the
/// config leaves it unset.
const MIN_VIEW_EXTENT_DEFAULT: f64 = 0.2;

/// Fraction of the range width used for the minimum major tick increment
/// when the config leaves it unset.
const MIN_MAJOR_INCREMENT_DEFAULT: f64 = 0.1;

/// Construction options for [`LinearAxis`].
///
/// `None` bounds are derived from the range width at construction: the
/// minimum view extent defaults to 20% of the width, the maximum to the
/// full width, and the minimum major tick increment to 10% of the width.
///
/// # Examples
///
/// ```
/// use skala::{AxisConfig, AxisModel, LinearAxis};
///
/// let axis = LinearAxis::with_config(
///     0.0,
///     100.0,
///     AxisConfig {
///         inverted: true,
///         minor_tick_count: 1,
///         ..AxisConfig::default()
///     },
/// )?;
///
/// // Inverted axes place smaller values at offset 1.
/// assert_eq!(axis.offset_of(&0.0)?, 1.0);
/// assert_eq!(axis.offset_of(&100.0)?, 0.0);
/// # Ok::<(), skala::AxisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Smallest allowed view width, in domain units.
    pub min_view_extent: Option<f64>,
    /// Largest allowed view width, in domain units.
    pub max_view_extent: Option<f64>,
    /// Floor on the spacing between generated major ticks, in domain units.
    pub minimum_major_tick_increment: Option<f64>,
    /// Minimum on-screen spacing between major ticks, in pixels.
    pub minimum_major_tick_spacing: f64,
    /// Minor ticks generated per major interval.
    pub minor_tick_count: usize,
    /// Whether `zoom` calls have any effect.
    pub allow_zooming: bool,
    /// Whether `pan` calls have any effect.
    pub allow_panning: bool,
    /// Whether smaller values sit at the far end of the axis.
    pub inverted: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            min_view_extent: None,
            max_view_extent: None,
            minimum_major_tick_increment: None,
            minimum_major_tick_spacing: 50.0,
            minor_tick_count: 4,
            allow_zooming: true,
            allow_panning: true,
            inverted: false,
        }
    }
}

/// Linear axis model over a numeric domain.
///
/// Maps domain values to normalized `[0, 1]` offsets relative to the current
/// view window, generates "nice" tick marks sized by the axis pixel length,
/// and supports zooming and panning within the fixed overall range set at
/// construction. One generic implementation covers `f32`, `f64`, `i32` and
/// `i64` domains; discrete domains round tick values and view endpoints to
/// whole values.
///
/// # Examples
///
/// ## Offsets
///
/// ```
/// use skala::{AxisModel, LinearAxis};
///
/// let axis = LinearAxis::<f64>::new(0.0, 100.0)?;
///
/// assert_eq!(axis.offset_of(&25.0)?, 0.25);
/// assert_eq!(axis.value_at(0.25), 25.0);
/// # Ok::<(), skala::AxisError>(())
/// ```
///
/// ## Zoom and pan
///
/// ```
/// use skala::{AxisModel, LinearAxis, ZoomableAxis};
///
/// let mut axis = LinearAxis::<f64>::new(0.0, 100.0)?;
///
/// axis.zoom(2.0, 0.5)?;
/// assert_eq!(axis.view_range(), (25.0, 75.0));
///
/// // Offsets are relative to the view, not the overall range.
/// assert_eq!(axis.offset_of(&50.0)?, 0.5);
/// assert_eq!(axis.offset_of(&0.0)?, -0.5);
/// # Ok::<(), skala::AxisError>(())
/// ```
///
/// ## Ticks
///
/// ```
/// use skala::{AxisModel, LinearAxis};
///
/// let axis = LinearAxis::<f64>::new(0.0, 100.0)?;
/// let ticks = axis.tick_values(500.0);
///
/// assert_eq!(ticks.major.len(), 11);
/// assert_eq!(ticks.major[0], 0.0);
/// assert_eq!(ticks.major[10], 100.0);
/// // Four minors per major interval by default.
/// assert_eq!(ticks.minor.len(), 40);
/// # Ok::<(), skala::AxisError>(())
/// ```
///
/// ## View-change notification
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use skala::{LinearAxis, ZoomableAxis};
///
/// let mut axis = LinearAxis::<f64>::new(0.0, 100.0)?;
/// let moved = Rc::new(Cell::new(0u32));
/// let sink = Rc::clone(&moved);
/// axis.on_view_change(move |_, _| sink.set(sink.get() + 1));
///
/// axis.zoom(2.0, 0.5)?;
/// axis.zoom(1.0, 0.5)?; // no-op, not notified
/// assert_eq!(moved.get(), 1);
/// # Ok::<(), skala::AxisError>(())
/// ```
pub struct LinearAxis<T: AxisNumber> {
    window: ViewWindow,
    min_spacing_px: f64,
    min_increment: f64,
    minor_count: usize,
    allow_zooming: bool,
    allow_panning: bool,
    inverted: bool,
    listeners: Listeners<T>,
}

impl<T: AxisNumber> LinearAxis<T> {
    /// Creates an axis over `start..end` with the default configuration.
    pub fn new(start: T, end: T) -> Result<Self, AxisError> {
        Self::with_config(start, end, AxisConfig::default())
    }

    /// Creates an axis over `start..end`, validating the whole configuration
    /// up front. No axis is created on failure.
    pub fn with_config(start: T, end: T, config: AxisConfig) -> Result<Self, AxisError> {
        let range = (start.to_f64(), end.to_f64());
        let width = range.1 - range.0;
        if !(width > 0.0) || !width.is_finite() {
            return Err(AxisError::EmptyRange {
                start: range.0,
                end: range.1,
            });
        }

        let min_extent = config
            .min_view_extent
            .unwrap_or(width * MIN_VIEW_EXTENT_DEFAULT);
        let max_extent = config.max_view_extent.unwrap_or(width);
        let min_increment = config
            .minimum_major_tick_increment
            .unwrap_or(width * MIN_MAJOR_INCREMENT_DEFAULT);

        if !(min_increment > 0.0) || min_increment > width {
            return Err(AxisError::InvalidTickIncrement {
                increment: min_increment,
                width,
            });
        }
        if !(config.minimum_major_tick_spacing > 0.0) {
            return Err(AxisError::InvalidTickSpacing(
                config.minimum_major_tick_spacing,
            ));
        }

        Ok(Self {
            window: ViewWindow::new(range, min_extent, max_extent)?,
            min_spacing_px: config.minimum_major_tick_spacing,
            min_increment,
            minor_count: config.minor_tick_count,
            allow_zooming: config.allow_zooming,
            allow_panning: config.allow_panning,
            inverted: config.inverted,
            listeners: Listeners::new(),
        })
    }

    /// The fixed overall range set at construction.
    pub fn range(&self) -> (T, T) {
        let (start, end) = self.window.range();
        (T::from_f64(start), T::from_f64(end))
    }

    /// Whether smaller values sit at the far end of the axis.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Normalized offset of `value` relative to the current view. Unclamped;
    /// infallible for any numeric value (the trait method delegates here).
    pub fn offset(&self, value: T) -> f64 {
        let (start, end) = self.window.current();
        let value = value.to_f64();
        if self.inverted {
            (end - value) / (end - start)
        } else {
            (value - start) / (end - start)
        }
    }

    /// Registers a listener invoked with the new view bounds after every
    /// effective view change. Returns a handle for removal.
    pub fn on_view_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(T, T) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener; returns whether it was registered.
    pub fn remove_view_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn notify(&mut self) {
        let (start, end) = self.window.current();
        self.listeners.notify(T::from_f64(start), T::from_f64(end));
    }

    fn clamp_to_range(&self, value: T) -> T {
        let (start, end) = self.range();
        if value < start {
            start
        } else if value > end {
            end
        } else {
            value
        }
    }
}

impl<T: AxisNumber> AxisModel for LinearAxis<T> {
    type Value = T;

    fn offset_of(&self, value: &T) -> Result<f64, AxisError> {
        Ok(self.offset(*value))
    }

    fn value_at(&self, offset: f64) -> T {
        let offset = offset.clamp(0.0, 1.0);
        let (start, end) = self.window.current();
        let value = if self.inverted {
            end - offset * (end - start)
        } else {
            start + offset * (end - start)
        };
        let value = T::from_f64(value);
        if T::DISCRETE {
            // Rounding a fractional view endpoint can step just past the
            // overall range.
            self.clamp_to_range(value)
        } else {
            value
        }
    }

    fn tick_values(&self, axis_length: f64) -> TickValues<T> {
        let view = self.window.current();
        let params = TickParams {
            min_spacing_fraction: ticks::spacing_fraction(self.min_spacing_px, axis_length),
            min_increment: self.min_increment,
            minor_count: self.minor_count,
            discrete: T::DISCRETE,
        };

        let spacing = ticks::major_spacing(view, &params);
        let mut major = ticks::major_grid(view, spacing);
        let mut minor = ticks::minor_grid(view, &major, spacing, &params);

        // Inversion only affects iteration order; the offsets already
        // mirror the visual direction.
        if self.inverted {
            major.reverse();
            minor.reverse();
        }

        TickValues {
            major: major.into_iter().map(T::from_f64).collect(),
            minor: minor.into_iter().map(T::from_f64).collect(),
        }
    }
}

impl<T: AxisNumber> ZoomableAxis for LinearAxis<T> {
    fn view_range(&self) -> (T, T) {
        let (start, end) = self.window.current();
        (T::from_f64(start), T::from_f64(end))
    }

    fn zoom(&mut self, factor: f64, pivot: f64) -> Result<(), AxisError> {
        if !self.allow_zooming {
            return Ok(());
        }
        if self.window.zoom(factor, pivot)? {
            self.notify();
        }
        Ok(())
    }

    fn pan(&mut self, amount: f64) -> bool {
        if !self.allow_panning {
            return false;
        }
        let changed = self.window.pan(amount);
        if changed {
            self.notify();
        }
        changed
    }

    fn set_view_range(&mut self, start: T, end: T) -> Result<(), AxisError> {
        let (start, end) = (start.to_f64(), end.to_f64());
        if !(end > start) {
            return Err(AxisError::EmptyRange { start, end });
        }
        if self.window.set_view(start, end) {
            self.notify();
        }
        Ok(())
    }
}
