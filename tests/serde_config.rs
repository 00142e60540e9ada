#![cfg(feature = "serde")]

use quadfilter::{Coefficients, FilterSpec, FilterType, QuadFilter};

#[test]
fn test_spec_from_toml_with_loose_type_name() {
    let spec: FilterSpec = toml::from_str(
        r#"
        sample_rate_hz = 48000.0
        filter_type = "Low-Shelf"
        cutoff_hz = 250.0
        q = 0.707
        gain_db = 4.0
        "#,
    )
    .unwrap();

    assert_eq!(spec.filter_type, FilterType::LowShelf);
    assert_eq!(spec.cutoff_hz, 250.0);
    assert!(QuadFilter::from_spec(spec).is_ok());
}

#[test]
fn test_spec_defaults_when_fields_missing() {
    let spec: FilterSpec = toml::from_str(
        r#"
        sample_rate_hz = 44100.0
        filter_type = "notch"
        "#,
    )
    .unwrap();

    assert_eq!(spec, FilterSpec::new(44100.0, FilterType::Notch));
}

#[test]
fn test_unknown_type_is_rejected() {
    let result: Result<FilterSpec, _> = toml::from_str(
        r#"
        sample_rate_hz = 44100.0
        filter_type = "bandstop"
        "#,
    );
    let err = result.unwrap_err().to_string();
    assert!(err.contains("bandstop"), "{}", err);
}

#[test]
fn test_type_serializes_to_canonical_name() {
    let spec = FilterSpec::new(48000.0, FilterType::HighPass);
    let text = toml::to_string(&spec).unwrap();
    assert!(text.contains("filter_type = \"highpass\""), "{}", text);
}

#[test]
fn test_coefficients_serialize() {
    let coeffs = Coefficients::identity();
    let text = toml::to_string(&coeffs).unwrap();
    let back: Coefficients = toml::from_str(&text).unwrap();
    assert_eq!(back, coeffs);
}

#[test]
fn test_coefficients_load_normalized() {
    let coeffs: Coefficients = toml::from_str(
        r#"
        b = [2.0, 0.0, 0.0]
        a = [2.0, 0.0, 0.0]
        "#,
    )
    .unwrap();

    assert_eq!(coeffs.a()[0], 1.0);
    assert_eq!(coeffs.b(), [1.0, 0.0, 0.0]);

    let output = quadfilter::filters::filter_offline(&coeffs, &[vec![1.0, 1.0]]);
    assert_eq!(output, vec![vec![1.0, 1.0]]);
}

#[test]
fn test_coefficients_with_zero_a0_are_rejected() {
    let result: Result<Coefficients, _> = toml::from_str(
        r#"
        b = [1.0, 0.0, 0.0]
        a = [0.0, 1.0, 0.0]
        "#,
    );
    let err = result.unwrap_err().to_string();
    assert!(err.contains("a[0]"), "{}", err);
}
