use approx::assert_relative_eq;
use axis_align::api::{
    AxisAlignmentBehavior, AxisBoundsOverride, DUAL_AXIS_CONFIG_JSON_SCHEMA_V1, DualAxisConfig,
    DualAxisScales, ResolvedAxes,
};
use axis_align::core::{AlignmentCase, AxisRange, AxisSide, DataPoint};

fn sample_config() -> DualAxisConfig {
    DualAxisConfig::new()
        .with_bounds(AxisSide::Left, AxisBoundsOverride::new(Some(-5.0), None))
        .with_alignment(AxisAlignmentBehavior::at_level(2.5))
        .with_zero_tolerance(1e-9)
}

#[test]
fn config_contract_v1_round_trips() {
    let config = sample_config();
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {DUAL_AXIS_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = DualAxisConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_json_uses_defaults_for_missing_fields() {
    let parsed = DualAxisConfig::from_json_compat_str(r#"{"alignment": {"enabled": true}}"#)
        .expect("parse bare config");
    assert!(parsed.alignment.enabled);
    assert_eq!(parsed.alignment.level, 0.0);
    assert!(parsed.left_bounds.is_empty());
    assert!(parsed.right_bounds.is_empty());
    assert_eq!(parsed.zero_tolerance, 0.0);
}

#[test]
fn config_with_unknown_schema_version_is_rejected() {
    let err = DualAxisConfig::from_json_compat_str(r#"{"schema_version": 2, "config": {}}"#)
        .expect_err("schema v2 must fail");
    assert!(format!("{err}").contains("unsupported dual axis config schema version: 2"));
}

#[test]
fn config_json_is_validated_after_parsing() {
    let err = DualAxisConfig::from_json_compat_str(
        r#"{"right_bounds": {"min": 10.0, "max": 1.0}}"#,
    )
    .expect_err("reversed override must fail");
    assert!(format!("{err}").contains("right axis bound override"));

    let err = DualAxisConfig::from_json_compat_str(r#"{"zero_tolerance": -1.0}"#)
        .expect_err("negative tolerance must fail");
    assert!(format!("{err}").contains("zero tolerance"));
}

#[test]
fn malformed_config_json_reports_parse_error() {
    let err = DualAxisConfig::from_json_compat_str("{not json").expect_err("must fail");
    assert!(format!("{err}").contains("failed to parse dual axis config json"));
}

#[test]
fn resolved_axes_contract_round_trips() {
    let mut scales = DualAxisScales::new(sample_config()).expect("scales init");
    scales.set_series(AxisSide::Left, vec![DataPoint::new(0.0, 4.0), DataPoint::new(1.0, 9.0)]);
    scales.set_series(AxisSide::Right, vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 6.0)]);
    let resolved = scales.resolve().expect("resolve");

    let json = resolved.to_json_contract_v1_pretty().expect("serialize");
    let parsed = ResolvedAxes::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.case, Some(AlignmentCase::TwoCrossScaled));
    assert_eq!(parsed.case, resolved.case);
    assert_relative_eq!(parsed.left.min, resolved.left.min, max_relative = 1e-12);
    assert_relative_eq!(parsed.left.max, resolved.left.max, max_relative = 1e-12);
    assert_relative_eq!(parsed.right.min, resolved.right.min, max_relative = 1e-12);
    assert_relative_eq!(parsed.right.max, resolved.right.max, max_relative = 1e-12);
}

#[test]
fn bare_resolved_axes_json_is_accepted() {
    let parsed = ResolvedAxes::from_json_compat_str(
        r#"{"left": {"min": -1.0, "max": 1.0}, "right": {"min": 0.0, "max": 8.0}, "case": "mirrored"}"#,
    )
    .expect("parse bare axes");
    assert_eq!(parsed.left, AxisRange::new(-1.0, 1.0));
    assert_eq!(parsed.right, AxisRange::new(0.0, 8.0));
    assert_eq!(parsed.case, Some(AlignmentCase::Mirrored));
}
