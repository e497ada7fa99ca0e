use super::{AxisModel, TickValues};
use crate::error::AxisError;

/// Base-10 logarithmic axis model.
///
/// The range is given as integer decade exponents: `LogAxis::new(-1, 3)`
/// displays values from `0.1` to `1000`. Major ticks sit at every power of
/// ten in range; minor ticks are the `2x..9x` multiples of each decade.
/// Equal offsets represent equal ratios, so `1 -> 10` covers the same
/// normalized distance as `10 -> 100`. The view is fixed (no zoom or pan).
///
/// Only positive values have a finite logarithm; asking for the offset of a
/// zero or negative value is an error.
///
/// # Examples
///
/// ```
/// use skala::{AxisModel, LogAxis};
///
/// let axis = LogAxis::new(-1, 3)?; // 0.1 to 1000
///
/// assert!(axis.offset_of(&0.1)?.abs() < 1e-12);
/// assert_eq!(axis.offset_of(&10.0)?, 0.5);
/// assert_eq!(axis.offset_of(&1000.0)?, 1.0);
///
/// let ticks = axis.tick_values(400.0);
/// assert_eq!(ticks.major, vec![0.1, 1.0, 10.0, 100.0, 1000.0]);
/// # Ok::<(), skala::AxisError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogAxis {
    min_exponent: i32,
    max_exponent: i32,
}

impl LogAxis {
    /// Creates an axis spanning `10^min_exponent` to `10^max_exponent`.
    pub fn new(min_exponent: i32, max_exponent: i32) -> Result<Self, AxisError> {
        if max_exponent <= min_exponent {
            return Err(AxisError::EmptyRange {
                start: f64::from(min_exponent),
                end: f64::from(max_exponent),
            });
        }
        Ok(Self {
            min_exponent,
            max_exponent,
        })
    }

    /// The exponent bounds passed at construction.
    pub fn exponent_range(&self) -> (i32, i32) {
        (self.min_exponent, self.max_exponent)
    }

    /// The displayed value bounds, `(10^min, 10^max)`.
    pub fn domain(&self) -> (f64, f64) {
        (
            10f64.powi(self.min_exponent),
            10f64.powi(self.max_exponent),
        )
    }
}

impl AxisModel for LogAxis {
    type Value = f64;

    fn offset_of(&self, value: &f64) -> Result<f64, AxisError> {
        if !(*value > 0.0) {
            return Err(AxisError::NonPositiveValue(*value));
        }
        let span = f64::from(self.max_exponent - self.min_exponent);
        Ok((value.log10() - f64::from(self.min_exponent)) / span)
    }

    fn value_at(&self, offset: f64) -> f64 {
        let offset = offset.clamp(0.0, 1.0);
        let span = f64::from(self.max_exponent - self.min_exponent);
        10f64.powf(f64::from(self.min_exponent) + offset * span)
    }

    fn tick_values(&self, _axis_length: f64) -> TickValues<f64> {
        let mut major = Vec::with_capacity((self.max_exponent - self.min_exponent + 1) as usize);
        let mut minor = Vec::new();

        for exponent in self.min_exponent..=self.max_exponent {
            let decade = 10f64.powi(exponent);
            major.push(decade);
            if exponent < self.max_exponent {
                for multiplier in 2..=9 {
                    minor.push(decade * f64::from(multiplier));
                }
            }
        }

        TickValues { major, minor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_linear_in_the_exponent() {
        let axis = LogAxis::new(-1, 3).unwrap();

        assert!(axis.offset_of(&0.1).unwrap().abs() < 1e-12);
        assert_eq!(axis.offset_of(&1000.0).unwrap(), 1.0);
        assert!((axis.offset_of(&10.0).unwrap() - 0.5).abs() < 1e-12);
        assert!((axis.offset_of(&100.0).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_offset_rejects_non_positive_values() {
        let axis = LogAxis::new(0, 2).unwrap();

        assert_eq!(axis.offset_of(&0.0), Err(AxisError::NonPositiveValue(0.0)));
        assert_eq!(
            axis.offset_of(&-10.0),
            Err(AxisError::NonPositiveValue(-10.0))
        );
    }

    #[test]
    fn test_value_at_inverts_the_offset() {
        let axis = LogAxis::new(0, 2).unwrap();

        assert!((axis.value_at(0.0) - 1.0).abs() < 1e-12);
        assert!((axis.value_at(0.5) - 10.0).abs() < 1e-12);
        assert!((axis.value_at(1.0) - 100.0).abs() < 1e-12);
        // Lenient policy: out-of-range offsets clamp to the domain bounds.
        assert!((axis.value_at(2.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_minor_ticks_fill_each_decade() {
        let axis = LogAxis::new(-1, 1).unwrap();
        let ticks = axis.tick_values(300.0);

        assert_eq!(ticks.major.len(), 3);
        assert!((ticks.major[0] - 0.1).abs() < 1e-12);
        assert_eq!(ticks.major[1], 1.0);
        assert_eq!(ticks.major[2], 10.0);

        // 2x..9x of 0.1, then 2x..9x of 1.
        assert_eq!(ticks.minor.len(), 16);
        let expected: Vec<f64> = (2..=9)
            .map(|m| f64::from(m) * 0.1)
            .chain((2..=9).map(f64::from))
            .collect();
        for (tick, want) in ticks.minor.iter().zip(expected) {
            assert!((tick - want).abs() < 1e-12, "tick {tick} != {want}");
        }
    }

    #[test]
    fn test_no_minors_past_the_last_decade() {
        let axis = LogAxis::new(0, 1).unwrap();
        let ticks = axis.tick_values(300.0);

        assert_eq!(ticks.major, vec![1.0, 10.0]);
        assert_eq!(ticks.minor.len(), 8);
        assert_eq!(ticks.minor[7], 9.0);
    }

    #[test]
    fn test_construction_rejects_empty_exponent_range() {
        assert!(LogAxis::new(2, 2).is_err());
        assert!(LogAxis::new(3, -1).is_err());
    }
}
