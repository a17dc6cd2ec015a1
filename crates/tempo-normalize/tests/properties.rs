//! Property tests: determinism, idempotence and decomposition consistency.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use tempo_normalize::{
    CalendarDate, CanonicalMillis, DateParts, EpochUnit, TemporalInput, TemporalKind,
    classify_string, decompose_to_date_parts, infer_column_kind, normalize_to_millis,
};

/// First and last whole seconds whose UTC wall clock lies in years 1..=9999.
const FIRST_SECOND: i64 = -62_135_596_800;
const LAST_SECOND: i64 = 253_402_300_799;

/// Largest integer an f64 represents exactly.
const F64_EXACT: i64 = 9_007_199_254_740_992;

fn any_unit() -> impl Strategy<Value = EpochUnit> {
    prop_oneof![
        Just(EpochUnit::Nanosecond),
        Just(EpochUnit::Microsecond),
        Just(EpochUnit::Millisecond),
        Just(EpochUnit::Second),
        Just(EpochUnit::Minute),
        Just(EpochUnit::Hour),
        Just(EpochUnit::Day),
        Just(EpochUnit::Week),
        Just(EpochUnit::Month),
        Just(EpochUnit::Year),
    ]
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // Day numbers covering years 1 through 9999.
    (1..=3_652_059_i32).prop_map(|days| {
        NaiveDate::from_num_days_from_ce_opt(days).expect("day number within chrono range")
    })
}

proptest! {
    #[test]
    fn raw_numbers_are_deterministic(value in any::<f64>()) {
        let input = TemporalInput::raw(value);
        prop_assert_eq!(normalize_to_millis(&input), normalize_to_millis(&input));
        prop_assert_eq!(decompose_to_date_parts(&input), decompose_to_date_parts(&input));
    }

    #[test]
    fn typed_epochs_are_deterministic(value in any::<i64>(), unit in any_unit()) {
        let input = TemporalInput::typed(value, unit);
        prop_assert_eq!(normalize_to_millis(&input), normalize_to_millis(&input));
        prop_assert_eq!(decompose_to_date_parts(&input), decompose_to_date_parts(&input));
    }

    #[test]
    fn in_range_seconds_scale_by_one_thousand(seconds in FIRST_SECOND..=LAST_SECOND) {
        prop_assert_eq!(
            normalize_to_millis(&TemporalInput::raw(seconds as f64)),
            Some(CanonicalMillis::new(seconds * 1_000))
        );
    }

    #[test]
    fn out_of_range_seconds_pass_through_as_millis(value in (LAST_SECOND + 1)..F64_EXACT) {
        prop_assert_eq!(
            normalize_to_millis(&TemporalInput::raw(value as f64)),
            Some(CanonicalMillis::new(value))
        );
    }

    #[test]
    fn canonical_millis_are_a_fixed_point(value in (i64::MIN + 1)..=i64::MAX) {
        let once = normalize_to_millis(&TemporalInput::typed(value, EpochUnit::Millisecond));
        prop_assert_eq!(once, Some(CanonicalMillis::new(value)));

        let twice = once.and_then(|m| {
            normalize_to_millis(&TemporalInput::typed(m.get(), EpochUnit::Millisecond))
        });
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn calendar_dates_decompose_to_their_fields(date in any_date()) {
        let input = TemporalInput::CalendarDate(CalendarDate::from(date));
        prop_assert_eq!(
            decompose_to_date_parts(&input),
            Some(DateParts::new(date.year(), date.month(), date.day()))
        );
    }

    #[test]
    fn calendar_midnight_decomposes_back_to_the_date(date in any_date()) {
        let canonical = normalize_to_millis(&TemporalInput::from(date))
            .expect("every date in range has a UTC midnight");
        prop_assert_eq!(
            decompose_to_date_parts(&TemporalInput::typed(canonical.get(), EpochUnit::Millisecond)),
            Some(DateParts::from(date))
        );
    }

    #[test]
    fn day_epochs_match_calendar_dates(days in -719_162_i64..=2_932_896) {
        let from_days = normalize_to_millis(&TemporalInput::typed(days, EpochUnit::Day));
        let date = NaiveDate::default() + chrono::TimeDelta::days(days);
        prop_assert_eq!(from_days, normalize_to_millis(&TemporalInput::from(date)));
    }

    #[test]
    fn periods_are_transparent(value in any::<i64>(), unit in any_unit()) {
        let start = TemporalInput::typed(value, unit);
        let period = TemporalInput::period(start.clone());
        prop_assert_eq!(normalize_to_millis(&period), normalize_to_millis(&start));
        prop_assert_eq!(decompose_to_date_parts(&period), decompose_to_date_parts(&start));
    }

    #[test]
    fn text_without_separators_is_opaque(text in "[^/. -]*") {
        prop_assert_eq!(classify_string(&text), TemporalKind::Opaque);
    }

    #[test]
    fn classification_is_deterministic(text in "\\PC{0,24}") {
        prop_assert_eq!(classify_string(&text), classify_string(&text));
    }

    #[test]
    fn column_inference_ignores_order(
        samples in prop::collection::vec(
            prop::sample::select(vec![
                "2023-11-05",
                "11/05/2023",
                "2023-11-05 13:45:00",
                "1:45 PM",
                "not a date!!",
                "",
                "20231105",
            ]),
            0..8,
        )
    ) {
        let forward = infer_column_kind(samples.iter().copied());
        let backward = infer_column_kind(samples.iter().rev().copied());
        prop_assert_eq!(forward, backward);
    }
}
