use approx::assert_relative_eq;
use axis_align::core::{
    AlignmentCase, AlignmentOptions, AxisRange, align_axes, align_axes_batch, align_axes_with,
};

fn pivot_positions(left: AxisRange, right: AxisRange, level: f64) -> (f64, f64) {
    (
        left.normalized_position(level).expect("left span"),
        right.normalized_position(level).expect("right span"),
    )
}

#[test]
fn one_side_snap_pins_both_axes_to_zero() {
    let out = align_axes_with(
        AxisRange::new(2.0, 10.0),
        AxisRange::new(0.0, 8.0),
        0.0,
        AlignmentOptions::default(),
    );
    assert_eq!(out.case, AlignmentCase::SnapToPivot);
    assert_eq!(out.left, AxisRange::new(0.0, 10.0));
    assert_eq!(out.right, AxisRange::new(0.0, 8.0));
    assert_eq!(out.rate, None);
}

#[test]
fn opposite_ranges_are_mirrored() {
    let out = align_axes_with(
        AxisRange::new(-10.0, 0.0),
        AxisRange::new(0.0, 20.0),
        0.0,
        AlignmentOptions::default(),
    );
    assert_eq!(out.case, AlignmentCase::Mirrored);
    assert_eq!(out.left.max, -out.left.min);
    assert_eq!(out.right.min, -out.right.max);
    assert_eq!(out.left, AxisRange::new(-10.0, 10.0));
    assert_eq!(out.right, AxisRange::new(-20.0, 20.0));
}

#[test]
fn flat_axis_against_zero_anchored_axis_stays_finite() {
    let out = align_axes_with(
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 0.0),
        0.0,
        AlignmentOptions::default(),
    );
    assert_eq!(out.case, AlignmentCase::TwoCrossScaled);
    assert!(out.left.is_finite());
    assert!(out.right.is_finite());
    assert_relative_eq!(out.left.min, -10.0);
    assert_relative_eq!(out.left.max, 10.0);
    assert_relative_eq!(out.right.min, -0.25);
    assert_relative_eq!(out.right.max, 0.25);
}

#[test]
fn flat_axes_are_widened_before_alignment() {
    let (left, right) = align_axes(AxisRange::new(5.0, 5.0), AxisRange::new(5.0, 5.0), 5.0);
    assert_relative_eq!(left.min, 4.75);
    assert_relative_eq!(left.max, 5.25);
    assert_relative_eq!(right.min, 4.75);
    assert_relative_eq!(right.max, 5.25);
}

#[test]
fn nonzero_level_lines_up_on_both_axes() {
    let level = 50.0;
    let out = align_axes_with(
        AxisRange::new(40.0, 100.0),
        AxisRange::new(0.0, 60.0),
        level,
        AlignmentOptions::default(),
    );
    assert_eq!(out.case, AlignmentCase::TwoCrossScaled);
    let (left_pos, right_pos) = pivot_positions(out.left, out.right, level);
    assert_relative_eq!(left_pos, right_pos, epsilon = 1e-12);
}

#[test]
fn shifted_alignment_matches_zero_level_alignment() {
    let left = AxisRange::new(12.0, 30.0);
    let right = AxisRange::new(-4.0, 18.0);
    let level = 7.5;

    let direct = align_axes(left, right, level);
    let (l0, r0) = align_axes(left.shifted(-level), right.shifted(-level), 0.0);
    assert_eq!(direct, (l0.shifted(level), r0.shifted(level)));
}

#[test]
fn nan_level_returns_inputs_untouched() {
    let left = AxisRange::new(-3.0, 9.0);
    let right = AxisRange::new(1.0, 2.0);
    assert_eq!(align_axes(left, right, f64::NAN), (left, right));
}

#[test]
fn batch_alignment_preserves_order() {
    let pairs = vec![
        (AxisRange::new(2.0, 10.0), AxisRange::new(0.0, 8.0)),
        (AxisRange::new(-10.0, 0.0), AxisRange::new(0.0, 20.0)),
        (AxisRange::new(1.0, 5.0), AxisRange::new(-2.0, 3.0)),
    ];
    let out = align_axes_batch(&pairs, 0.0, AlignmentOptions::default());
    let cases: Vec<AlignmentCase> = out.iter().map(|alignment| alignment.case).collect();
    assert_eq!(
        cases,
        vec![
            AlignmentCase::SnapToPivot,
            AlignmentCase::Mirrored,
            AlignmentCase::MixedScaled,
        ]
    );
    for (alignment, &(left, right)) in out.iter().zip(&pairs) {
        assert_eq!(*alignment, align_axes_with(left, right, 0.0, AlignmentOptions::default()));
    }
}
