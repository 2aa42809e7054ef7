//! Filter evaluator tests.

use chargescope_storage::Dataset;
use chargescope_types::{ChargerType, FilterSelection};

use super::fixtures::{day, session, station, three_station_dataset};
use crate::filter_sessions;

fn full_span() -> FilterSelection {
    FilterSelection::span(day(2024, 3, 1), day(2024, 3, 5))
}

#[test]
fn test_full_span_matches_everything() {
    let dataset = three_station_dataset();
    let subset = filter_sessions(&dataset, &full_span());
    assert_eq!(subset.len(), dataset.sessions.len());
}

#[test]
fn test_result_is_subset_of_dataset() {
    let dataset = three_station_dataset();
    let selection = full_span().with_charger(ChargerType::V2);
    let subset = filter_sessions(&dataset, &selection);

    for matched in &subset {
        assert!(dataset.sessions.iter().any(|s| s.session_id == matched.session_id));
    }
    assert!(subset.len() <= dataset.sessions.len());
}

#[test]
fn test_same_selection_twice_is_identical() {
    let dataset = three_station_dataset();
    let selection = full_span()
        .with_charger(ChargerType::V3)
        .with_regions(["West".to_string(), "South".to_string()]);

    let first = filter_sessions(&dataset, &selection);
    let second = filter_sessions(&dataset, &selection);
    assert_eq!(first, second);
}

#[test]
fn test_date_range_is_inclusive_on_both_ends() {
    let dataset = three_station_dataset();

    let single_day = FilterSelection::span(day(2024, 3, 1), day(2024, 3, 1));
    let subset = filter_sessions(&dataset, &single_day);
    let ids: Vec<&str> = subset.iter().map(|s| s.session_id.as_str()).collect();
    assert_eq!(ids, vec!["s-01", "s-02", "s-07"]);

    let last_day = FilterSelection::span(day(2024, 3, 5), day(2024, 3, 5));
    assert_eq!(filter_sessions(&dataset, &last_day).len(), 2);
}

#[test]
fn test_charger_type_predicate() {
    let dataset = three_station_dataset();
    let selection = full_span().with_charger(ChargerType::V2);
    let subset = filter_sessions(&dataset, &selection);

    assert_eq!(subset.len(), 4);
    assert!(subset.iter().all(|s| s.charger_type == ChargerType::V2));
}

#[test]
fn test_region_predicate_joins_through_station() {
    let dataset = three_station_dataset();

    let west = full_span().with_regions(["West".to_string()]);
    assert_eq!(filter_sessions(&dataset, &west).len(), 6);

    let east = full_span().with_regions(["East".to_string()]);
    assert_eq!(filter_sessions(&dataset, &east).len(), 3);

    let west_south = full_span().with_regions(["West".to_string(), "South".to_string()]);
    assert_eq!(filter_sessions(&dataset, &west_south).len(), 7);
}

#[test]
fn test_all_predicates_are_conjoined() {
    let dataset = three_station_dataset();
    let selection = FilterSelection::span(day(2024, 3, 1), day(2024, 3, 3))
        .with_charger(ChargerType::V3)
        .with_regions(["West".to_string()]);

    let ids: Vec<&str> = filter_sessions(&dataset, &selection)
        .iter()
        .map(|s| s.session_id.as_str())
        .collect();
    assert_eq!(ids, vec!["s-01", "s-02", "s-04"]);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let dataset = three_station_dataset();
    let selection = FilterSelection::span(day(2030, 1, 1), day(2030, 12, 31));
    assert!(filter_sessions(&dataset, &selection).is_empty());
}

#[test]
fn test_unknown_station_never_matches_region_restriction() {
    let dataset = Dataset::new(
        vec![session("s-01", "SC_99", "2024-03-01 08:00", 5.0)],
        vec![station("SC_01", "Harris Ranch", 36.25, -120.5, "West")],
        vec![],
    );

    let unrestricted = FilterSelection::span(day(2024, 3, 1), day(2024, 3, 1));
    assert_eq!(filter_sessions(&dataset, &unrestricted).len(), 1);

    let restricted = unrestricted.with_regions(["West".to_string()]);
    assert!(filter_sessions(&dataset, &restricted).is_empty());
}
