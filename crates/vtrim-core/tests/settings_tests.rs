use vtrim_core::settings::TrimSettings;

#[test]
fn test_defaults_are_zero() {
    let settings = TrimSettings::default();
    assert_eq!(settings.start_seconds, 0.0);
    assert_eq!(settings.end_seconds, 0.0);
}

#[test]
fn test_empty_object_is_valid_no_trim_config() {
    let settings = TrimSettings::from_json("{}").unwrap();
    assert_eq!(settings, TrimSettings::default());
}

#[test]
fn test_partial_object_fills_missing_field() {
    let settings = TrimSettings::from_json(r#"{"start_seconds": 5.5}"#).unwrap();
    assert_eq!(settings.start_seconds, 5.5);
    assert_eq!(settings.end_seconds, 0.0);
}

#[test]
fn test_json_round_trip() {
    let settings = TrimSettings::new(10.0, 2.5);
    let json = settings.to_json().unwrap();
    let restored = TrimSettings::from_json(&json).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(TrimSettings::from_json("not json").is_err());
}

#[test]
fn test_form_labels() {
    assert_eq!(
        TrimSettings::START_LABEL,
        "Seconds to trim off the start of the files"
    );
    assert_eq!(
        TrimSettings::END_LABEL,
        "Seconds to trim off the end of the files"
    );
}
