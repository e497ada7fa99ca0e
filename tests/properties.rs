//! Property tests for the view-window invariants and offset arithmetic.

use proptest::prelude::*;
use skala::{AxisModel, LinearAxis, ZoomableAxis};

const RANGE: (f64, f64) = (0.0, 100.0);
const MIN_EXTENT: f64 = 20.0; // default: 20% of the range width
const TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug)]
enum Op {
    Zoom(f64, f64),
    Pan(f64),
    SetView(f64, f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.2f64..5.0, 0.0f64..=1.0).prop_map(|(factor, pivot)| Op::Zoom(factor, pivot)),
        (-2.0f64..2.0).prop_map(Op::Pan),
        (-50.0f64..150.0, -50.0f64..150.0)
            .prop_map(|(a, b)| Op::SetView(a.min(b), a.max(b) + 1.0)),
    ]
}

fn apply(axis: &mut LinearAxis<f64>, op: &Op) {
    match *op {
        Op::Zoom(factor, pivot) => axis.zoom(factor, pivot).unwrap(),
        Op::Pan(amount) => {
            axis.pan(amount);
        }
        Op::SetView(start, end) => axis.set_view_range(start, end).unwrap(),
    }
}

proptest! {
    /// The view never leaves the overall range and its width always stays
    /// between the extent bounds, no matter the mutation sequence.
    #[test]
    fn view_stays_inside_range_with_bounded_extent(
        ops in prop::collection::vec(op_strategy(), 0..32)
    ) {
        let mut axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();

        for op in &ops {
            apply(&mut axis, op);

            let (start, end) = axis.view_range();
            prop_assert!(start >= RANGE.0 - TOLERANCE);
            prop_assert!(end <= RANGE.1 + TOLERANCE);

            let width = end - start;
            prop_assert!(width >= MIN_EXTENT - TOLERANCE);
            prop_assert!(width <= (RANGE.1 - RANGE.0) + TOLERANCE);
        }
    }

    /// With the view equal to the full range, offsets hit 0 and 1 at the
    /// range ends and round-trip through `value_at`.
    #[test]
    fn offset_round_trips_inside_the_view(value in RANGE.0..=RANGE.1) {
        let axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();

        prop_assert_eq!(axis.offset_of(&RANGE.0).unwrap(), 0.0);
        prop_assert_eq!(axis.offset_of(&RANGE.1).unwrap(), 1.0);

        let offset = axis.offset_of(&value).unwrap();
        prop_assert!((axis.value_at(offset) - value).abs() < TOLERANCE);
    }

    /// Round-tripping still holds after the view has moved.
    #[test]
    fn offset_round_trips_after_mutations(
        ops in prop::collection::vec(op_strategy(), 0..16),
        fraction in 0.0f64..=1.0,
    ) {
        let mut axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();
        for op in &ops {
            apply(&mut axis, op);
        }

        let (start, end) = axis.view_range();
        let value = start + fraction * (end - start);
        let offset = axis.offset_of(&value).unwrap();
        prop_assert!((axis.value_at(offset) - value).abs() < TOLERANCE);
    }

    /// A zoom factor of exactly 1 never changes the view.
    #[test]
    fn zoom_factor_one_is_identity(pivot in 0.0f64..=1.0) {
        let mut axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();
        axis.set_view_range(10.0, 60.0).unwrap();
        let before = axis.view_range();

        axis.zoom(1.0, pivot).unwrap();
        prop_assert_eq!(axis.view_range(), before);
    }

    /// Zooming in and back out by the reciprocal factor restores the view
    /// (within tolerance) as long as neither step hits a clamp.
    #[test]
    fn zoom_is_reversible_away_from_clamps(factor in 1.0f64..2.0) {
        let mut axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();
        axis.set_view_range(30.0, 70.0).unwrap();

        axis.zoom(factor, 0.5).unwrap();
        axis.zoom(1.0 / factor, 0.5).unwrap();

        let (start, end) = axis.view_range();
        prop_assert!((start - 30.0).abs() < 1e-6);
        prop_assert!((end - 70.0).abs() < 1e-6);
    }

    /// `pan` returns true exactly when the view moved.
    #[test]
    fn pan_reports_whether_the_view_moved(amount in -1.5f64..1.5) {
        let mut axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();
        axis.set_view_range(25.0, 75.0).unwrap();
        let before = axis.view_range();

        let changed = axis.pan(amount);
        prop_assert_eq!(changed, axis.view_range() != before);
    }

    /// Panning preserves the view width.
    #[test]
    fn pan_preserves_view_width(amount in -3.0f64..3.0) {
        let mut axis = LinearAxis::<f64>::new(RANGE.0, RANGE.1).unwrap();
        axis.set_view_range(20.0, 60.0).unwrap();

        axis.pan(amount);
        let (start, end) = axis.view_range();
        prop_assert!(((end - start) - 40.0).abs() < TOLERANCE);
    }

    /// Major ticks are strictly ascending with no duplicates, for any view.
    #[test]
    fn major_ticks_strictly_ascending(
        start in -1000.0f64..1000.0,
        width in 1.0f64..500.0,
        axis_px in 1.0f64..2000.0,
    ) {
        let axis = LinearAxis::<f64>::new(start, start + width).unwrap();
        let ticks = axis.tick_values(axis_px);

        for pair in ticks.major.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
        for pair in ticks.minor.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    /// Every generated tick lies inside the current view (within tolerance
    /// of the spacing-relative inclusion epsilon).
    #[test]
    fn ticks_stay_inside_the_view(
        start in -1000.0f64..1000.0,
        width in 1.0f64..500.0,
        axis_px in 1.0f64..2000.0,
    ) {
        let axis = LinearAxis::<f64>::new(start, start + width).unwrap();
        let ticks = axis.tick_values(axis_px);
        let slack = width * 1e-6;

        for tick in ticks.major.iter().chain(&ticks.minor) {
            prop_assert!(*tick >= start - slack, "tick {} below view start {}", tick, start);
            prop_assert!(*tick <= start + width + slack, "tick {} above view end {}", tick, start + width);
        }
    }
}
