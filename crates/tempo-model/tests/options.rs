//! Tests for tempo-model configuration and serialization.

use tempo_model::{
    CalendarDateTime, EpochUnit, NormalizerOptions, SubMillisRounding, TemporalInput,
    TimezoneRule,
};

#[test]
fn default_options_pin_utc_and_half_even() {
    let options = NormalizerOptions::default();
    assert_eq!(options.timezone, TimezoneRule::Utc);
    assert_eq!(options.sub_millis_rounding, SubMillisRounding::HalfEven);
}

#[test]
fn builder_overrides_fields() {
    let options = NormalizerOptions::new()
        .with_timezone(TimezoneRule::fixed_offset_hours(-5))
        .with_sub_millis_rounding(SubMillisRounding::Truncate);
    assert_eq!(
        options.timezone,
        TimezoneRule::FixedOffset {
            seconds_east: -18_000
        }
    );
    assert_eq!(options.sub_millis_rounding, SubMillisRounding::Truncate);
}

#[test]
fn options_deserialize_from_json() {
    let json = r#"{
        "timezone": { "rule": "fixed_offset", "seconds_east": 3600 },
        "sub_millis_rounding": "floor"
    }"#;
    let options: NormalizerOptions = serde_json::from_str(json).expect("deserialize options");
    assert_eq!(
        options.timezone,
        TimezoneRule::FixedOffset { seconds_east: 3600 }
    );
    assert_eq!(options.sub_millis_rounding, SubMillisRounding::Floor);
}

#[test]
fn partial_options_fall_back_to_defaults() {
    let options: NormalizerOptions =
        serde_json::from_str(r#"{ "timezone": { "rule": "local" } }"#).expect("deserialize");
    assert_eq!(options.timezone, TimezoneRule::Local);
    assert_eq!(options.sub_millis_rounding, SubMillisRounding::HalfEven);

    let empty: NormalizerOptions = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(empty, NormalizerOptions::default());
}

#[test]
fn input_serializes_with_kind_tag() {
    let input = TemporalInput::period(TemporalInput::typed(19_000, EpochUnit::Day));
    let json = serde_json::to_string(&input).expect("serialize input");
    assert_eq!(
        json,
        r#"{"kind":"period","start":{"kind":"typed_epoch","value":19000,"unit":"day"}}"#
    );
    let round: TemporalInput = serde_json::from_str(&json).expect("deserialize input");
    assert_eq!(round, input);
}

#[test]
fn calendar_datetime_input_deserializes() {
    let json = r#"{"kind":"calendar_date_time","year":2023,"month":11,"day":5,
        "hour":13,"minute":45,"second":0,"microsecond":0}"#;
    let input: TemporalInput = serde_json::from_str(json).expect("deserialize input");
    assert_eq!(
        input,
        TemporalInput::CalendarDateTime(CalendarDateTime::new(2023, 11, 5, 13, 45, 0, 0))
    );
}

#[test]
fn missing_round_trips() {
    let json = serde_json::to_string(&TemporalInput::Missing).expect("serialize");
    assert_eq!(json, r#"{"kind":"missing"}"#);
}
