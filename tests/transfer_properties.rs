use proptest::prelude::*;
use stair_dsp::dsp::{staircase, Staircase, ThresholdTable};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn reference_points_on_default_table() {
    let table = ThresholdTable::default();
    let expected = [
        (0.62, 0.60),
        (-0.62, -0.60),
        (0.9, 0.80),
        (0.1, 0.1),
        (0.25, 0.25),
        (0.0, 0.0),
    ];
    for (x, y) in expected {
        let out = staircase(x, &table);
        assert!(close(out, y), "staircase({}) = {}, expected {}", x, out, y);
    }
}

#[test]
fn every_output_level_is_a_threshold_or_below_floor() {
    let shaper = Staircase::default();
    let table = shaper.table();
    for (_, y) in shaper.transfer_curve(2000) {
        let m = y.abs();
        assert!(m < table.floor() || table.as_slice().contains(&m), "unexpected level {}", y);
    }
}

#[test]
fn custom_table_lengths_are_supported() {
    let table = ThresholdTable::new(vec![0.9, 0.5, 0.1]).unwrap();
    assert_eq!(staircase(0.7, &table), 0.5);
    assert_eq!(staircase(-0.95, &table), -0.9);
    assert_eq!(staircase(0.05, &table), 0.05);
}

proptest! {
    #[test]
    fn odd_symmetry(x in -2.0f32..2.0) {
        let table = ThresholdTable::default();
        prop_assert_eq!(staircase(x, &table), -staircase(-x, &table));
    }

    #[test]
    fn clamps_above_ceiling(x in 0.8001f32..100.0) {
        let table = ThresholdTable::default();
        prop_assert_eq!(staircase(x, &table), table.ceiling());
        prop_assert_eq!(staircase(-x, &table), -table.ceiling());
    }

    #[test]
    fn passes_through_below_floor(x in -0.2499f32..0.2499) {
        let table = ThresholdTable::default();
        prop_assert_eq!(staircase(x, &table), x);
    }

    #[test]
    fn idempotent(x in -2.0f32..2.0) {
        let table = ThresholdTable::default();
        let once = staircase(x, &table);
        prop_assert_eq!(staircase(once, &table), once);
    }

    #[test]
    fn never_increases_magnitude(x in -2.0f32..2.0) {
        let table = ThresholdTable::default();
        prop_assert!(staircase(x, &table).abs() <= x.abs());
    }

    #[test]
    fn valid_linear_tables_keep_invariants(
        ceiling in 0.3f32..1.0,
        steps in 1usize..20,
        x in -1.5f32..1.5,
    ) {
        let step = ceiling / (steps as f32 + 1.0);
        let table = ThresholdTable::linear(ceiling, step, steps).unwrap();
        let y = staircase(x, &table);
        prop_assert!(y.abs() <= table.ceiling().max(x.abs()));
        prop_assert_eq!(staircase(y, &table), y);
        prop_assert_eq!(y, -staircase(-x, &table));
    }
}
