//! Tick spacing selection and major/minor grid generation.
//!
//! Everything here is a pure function over `f64` views; discrete axes set
//! [`TickParams::discrete`] so candidate spacings round to whole values.

/// Nice spacing ratios, tried smallest first. Scaled by the decimal
/// magnitude of the view length they cover one order of magnitude around it.
const SPACING_RATIOS: [f64; 5] = [0.1, 0.2, 0.5, 1.0, 2.0];

/// Relative tolerance for including grid values at the view edges.
const GRID_EPSILON: f64 = 1e-7;

/// Hard cap on generated ticks, guarding degenerate spacing inputs.
const MAX_TICKS: usize = 100_000;

pub(crate) struct TickParams {
    /// Minimum spacing between major ticks as a fraction of the view length.
    pub(crate) min_spacing_fraction: f64,
    /// Floor on the spacing between major ticks, in domain units.
    pub(crate) min_increment: f64,
    /// Minor ticks generated per major interval.
    pub(crate) minor_count: usize,
    /// Whether candidate spacings must round to whole values.
    pub(crate) discrete: bool,
}

/// Minimum major spacing as a fraction of the view, from the pixel budget.
/// A degenerate axis length means only one tick fits.
pub(crate) fn spacing_fraction(min_spacing_px: f64, axis_length_px: f64) -> f64 {
    if axis_length_px <= 0.0 {
        return 1.0;
    }
    (min_spacing_px / axis_length_px).clamp(0.0, 1.0)
}

/// Chooses the smallest "nice" spacing (`{0.1, 0.2, 0.5, 1, 2}` times the
/// decimal magnitude of the view length) satisfying both the spacing
/// fraction and the configured minimum increment. Falls back to the minimum
/// increment when no candidate qualifies.
pub(crate) fn major_spacing(view: (f64, f64), params: &TickParams) -> f64 {
    let length = view.1 - view.0;
    let magnitude = 10f64.powf(length.log10().floor());

    for ratio in SPACING_RATIOS {
        let mut candidate = ratio * magnitude;
        if params.discrete {
            candidate = candidate.round();
            // A spacing that rounds to zero cannot step the grid.
            if candidate == 0.0 {
                continue;
            }
        }
        if candidate / length >= params.min_spacing_fraction
            && candidate >= params.min_increment
        {
            return candidate;
        }
    }

    if params.discrete {
        params.min_increment.round().max(1.0)
    } else {
        params.min_increment
    }
}

/// The multiples of `spacing` inside the view, ascending. The scan origin is
/// the nearest multiple at or below the view start, so a start that is not
/// itself a multiple still yields an aligned grid.
pub(crate) fn major_grid(view: (f64, f64), spacing: f64) -> Vec<f64> {
    if !(spacing > 0.0) || !spacing.is_finite() {
        return Vec::new();
    }
    let eps = spacing * GRID_EPSILON;
    let first = ((view.0 - eps) / spacing).ceil() as i64;
    let last = ((view.1 + eps) / spacing).floor() as i64;

    let count = (last.saturating_sub(first) + 1).clamp(0, MAX_TICKS as i64);
    (first..first + count).map(|index| index as f64 * spacing).collect()
}

/// Minor subdivisions: `minor_count` evenly spaced values strictly between
/// each adjacent pair of majors, extended past the first and last major
/// while they stay inside the view. Ascending.
pub(crate) fn minor_grid(
    view: (f64, f64),
    majors: &[f64],
    spacing: f64,
    params: &TickParams,
) -> Vec<f64> {
    if params.minor_count == 0 || majors.is_empty() {
        return Vec::new();
    }
    let mut step = spacing / (params.minor_count as f64 + 1.0);
    if params.discrete {
        step = step.round();
        if step == 0.0 {
            return Vec::new();
        }
    }
    let eps = spacing * GRID_EPSILON;
    let mut minors = Vec::new();

    // Extend below the first major, while still inside the view.
    let first = majors[0];
    let mut below = Vec::new();
    for index in 1..=MAX_TICKS {
        let value = first - index as f64 * step;
        if value < view.0 - eps {
            break;
        }
        below.push(value);
    }
    below.reverse();
    minors.extend(below);

    // Strictly between each adjacent major pair. With a rounded discrete
    // step the subdivision can reach the upper major, hence the guard.
    for pair in majors.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        for index in 1..=params.minor_count {
            let value = lower + index as f64 * step;
            if value >= upper - eps {
                break;
            }
            minors.push(value);
        }
    }

    // Extend above the last major.
    let last = majors[majors.len() - 1];
    for index in 1..=MAX_TICKS {
        let value = last + index as f64 * step;
        if value > view.1 + eps {
            break;
        }
        minors.push(value);
    }

    minors
}
