use super::{AxisModel, TickValues};
use crate::error::AxisError;

/// Blank margin reserved around the first and last category.
///
/// Expressed as a fraction of one category-to-category step: [`None`](Self::None)
/// puts the outer categories at the axis extremes, [`Half`](Self::Half) leaves
/// half a step on each side, [`Full`](Self::Full) a whole step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryMargin {
    /// Categories at the extreme edges of the axis.
    None,
    /// Half a category width of margin on each side.
    Half,
    /// A full category width of margin on each side.
    Full,
    /// A custom non-negative fraction of a category width.
    Custom(f64),
}

impl CategoryMargin {
    fn fraction(self) -> f64 {
        match self {
            CategoryMargin::None => 0.0,
            CategoryMargin::Half => 0.5,
            CategoryMargin::Full => 1.0,
            CategoryMargin::Custom(fraction) => fraction,
        }
    }
}

/// Discrete axis model over a fixed, ordered list of categories.
///
/// Categories are placed at evenly spaced offsets with a configurable edge
/// margin; there is no view window, so the axis is neither zoomable nor
/// pannable. Values are compared by equality; asking for the offset of a
/// value that is not in the list is an error.
///
/// # Examples
///
/// ```
/// use skala::{AxisModel, CategoryAxis, CategoryMargin};
///
/// let axis = CategoryAxis::with_margin(
///     vec!["A", "B", "C"],
///     CategoryMargin::Full,
/// )?;
///
/// assert_eq!(axis.offset_of(&"A")?, 0.25);
/// assert_eq!(axis.offset_of(&"B")?, 0.5);
/// assert_eq!(axis.offset_of(&"C")?, 0.75);
/// assert_eq!(axis.value_at(0.6), "B");
///
/// // Every category is a major tick.
/// assert_eq!(axis.tick_values(300.0).major, vec!["A", "B", "C"]);
/// # Ok::<(), skala::AxisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CategoryAxis<C> {
    categories: Vec<C>,
    margin: f64,
}

impl<C: Clone + PartialEq> CategoryAxis<C> {
    /// Creates an axis with half a category width of margin on each side.
    pub fn new(categories: Vec<C>) -> Result<Self, AxisError> {
        Self::with_margin(categories, CategoryMargin::Half)
    }

    /// Creates an axis with an explicit edge margin. Fails on an empty
    /// category list or a negative/non-finite custom margin.
    pub fn with_margin(categories: Vec<C>, margin: CategoryMargin) -> Result<Self, AxisError> {
        if categories.is_empty() {
            return Err(AxisError::NoCategories);
        }
        let fraction = margin.fraction();
        if !(fraction >= 0.0) || !fraction.is_finite() {
            return Err(AxisError::InvalidMargin(fraction));
        }
        Ok(Self {
            categories,
            margin: fraction,
        })
    }

    /// The ordered category list, as passed at construction.
    pub fn categories(&self) -> &[C] {
        &self.categories
    }

    fn offset_at_index(&self, index: usize) -> f64 {
        let count = self.categories.len();
        if count == 1 {
            // A single category sits at the edge without a margin, at the
            // center with one.
            return if self.margin == 0.0 { 0.0 } else { 0.5 };
        }
        (index as f64 + self.margin) / ((count - 1) as f64 + 2.0 * self.margin)
    }
}

impl<C: Clone + PartialEq> AxisModel for CategoryAxis<C> {
    type Value = C;

    fn offset_of(&self, value: &C) -> Result<f64, AxisError> {
        let index = self
            .categories
            .iter()
            .position(|category| category == value)
            .ok_or(AxisError::UnknownCategory)?;
        Ok(self.offset_at_index(index))
    }

    fn value_at(&self, offset: f64) -> C {
        let offset = offset.clamp(0.0, 1.0);
        let count = self.categories.len();
        if count == 1 {
            return self.categories[0].clone();
        }
        let index = (offset * ((count - 1) as f64 + 2.0 * self.margin) - self.margin).round();
        let index = index.clamp(0.0, (count - 1) as f64) as usize;
        self.categories[index].clone()
    }

    fn tick_values(&self, _axis_length: f64) -> TickValues<C> {
        TickValues {
            major: self.categories.clone(),
            minor: Vec::new(),
        }
    }
}
