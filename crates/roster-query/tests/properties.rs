//! Property tests for filtering and faceting.

use proptest::prelude::*;
use roster_model::{CellValue, FilterField, FilterSet, Record};
use roster_query::{distinct_values, filter_records, search};

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "Paris", "paris", "London", "Jo", "JOANNA", "john doe", " Lyon ",
        ])
            .prop_map(CellValue::text),
        1 => (2015u16..2025).prop_map(|year| CellValue::Number(f64::from(year))),
        1 => Just(CellValue::Missing),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    (cell(), cell(), cell(), cell()).prop_map(|(name, city, class, title)| {
        Record::from_iter([
            ("Name", name),
            ("City", city),
            ("Class", class),
            ("Title", title),
        ])
    })
}

fn criterion() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec![
        "jo", "Paris", "paris", "2019", "lon", " ", "",
    ]))
}

fn criteria() -> impl Strategy<Value = FilterSet> {
    (criterion(), criterion(), criterion(), criterion()).prop_map(|(name, city, class, title)| {
        FilterSet::from_optional([
            (FilterField::Name, name),
            (FilterField::City, city),
            (FilterField::Class, class),
            (FilterField::Title, title),
        ])
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn filtering_is_idempotent(
        records in prop::collection::vec(record(), 0..24),
        criteria in criteria(),
    ) {
        let once = filter_records(&records, &criteria);
        let twice = filter_records(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_criteria_is_identity(records in prop::collection::vec(record(), 0..24)) {
        prop_assert_eq!(filter_records(&records, &FilterSet::new()), records);
    }

    #[test]
    fn filtered_count_never_exceeds_total(
        records in prop::collection::vec(record(), 0..24),
        criteria in criteria(),
    ) {
        let outcome = search(&records, &criteria);
        prop_assert_eq!(outcome.total_count, records.len());
        prop_assert_eq!(outcome.filtered_count, outcome.members.len());
        prop_assert!(outcome.total_count >= outcome.filtered_count);
    }

    #[test]
    fn facet_values_are_sorted_distinct_and_non_empty(
        records in prop::collection::vec(record(), 0..24),
    ) {
        let values = distinct_values(&records, "City");
        prop_assert!(values.iter().all(|value| !value.is_empty()));
        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
