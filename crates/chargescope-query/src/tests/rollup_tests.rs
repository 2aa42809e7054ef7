//! Utilization, revenue-vs-cost, and distribution rollup tests.

use chargescope_storage::Dataset;
use chargescope_types::FilterSelection;

use super::fixtures::{day, session, three_station_dataset};
use crate::aggregate::{queue_capacity, revenue_vs_cost, utilization_rollup, Distribution};
use crate::{filter_sessions, summarize};

fn full_span() -> FilterSelection {
    FilterSelection::span(day(2024, 3, 1), day(2024, 3, 5))
}

#[test]
fn test_utilization_groups_and_joins_coordinates() {
    let dataset = three_station_dataset();
    let subset = filter_sessions(&dataset, &full_span());
    let rollup = utilization_rollup(&dataset, &subset);

    assert_eq!(rollup.len(), 3);
    let ids: Vec<&str> = rollup.iter().map(|r| r.station_id.as_str()).collect();
    assert_eq!(ids, vec!["SC_01", "SC_02", "SC_03"]);

    let sc01 = &rollup[0];
    assert_eq!(sc01.station_name, "Harris Ranch");
    assert_eq!(sc01.lat, 36.25);
    assert_eq!(sc01.lon, -120.5);
    assert_eq!(sc01.sessions, 6);
    // (4 + 6 + 5 + 3 + 7 + 5) / 6
    assert_eq!(sc01.mean_wait, 5.0);

    let sc02 = &rollup[1];
    assert_eq!(sc02.sessions, 3);
    assert_eq!(sc02.mean_wait, 8.0);
}

#[test]
fn test_utilization_omits_stations_outside_subset() {
    let dataset = three_station_dataset();
    let selection = full_span().with_regions(["West".to_string()]);
    let rollup = utilization_rollup(&dataset, &filter_sessions(&dataset, &selection));

    assert_eq!(rollup.len(), 1);
    assert_eq!(rollup[0].station_id, "SC_01");
}

#[test]
fn test_revenue_vs_cost_totals() {
    let dataset = three_station_dataset();
    let subset = filter_sessions(&dataset, &full_span());
    let rows = revenue_vs_cost(&dataset, &subset);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].station_id, "SC_01");
    assert_eq!(rows[0].revenue, 61.0);
    assert_eq!(rows[0].cost, 13.0);
    assert_eq!(rows[1].revenue, 22.0);
    assert_eq!(rows[1].cost, 4.0);
    assert_eq!(rows[2].revenue, 13.0);
    assert_eq!(rows[2].cost, 3.0);
}

#[test]
fn test_revenue_vs_cost_keeps_every_station_zero_filled() {
    let dataset = three_station_dataset();
    // Only SC_03 has sessions on 2024-03-02 16:00 in the South region.
    let selection = full_span().with_regions(["South".to_string()]);
    let rows = revenue_vs_cost(&dataset, &filter_sessions(&dataset, &selection));

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].station_id, "SC_01");
    assert_eq!((rows[0].revenue, rows[0].cost), (0.0, 0.0));
    assert_eq!((rows[1].revenue, rows[1].cost), (0.0, 0.0));
    assert_eq!((rows[2].revenue, rows[2].cost), (13.0, 3.0));
}

#[test]
fn test_summary_revenue_matches_revenue_vs_cost_column_total() {
    let dataset = three_station_dataset();
    for selection in [
        full_span(),
        full_span().with_regions(["West".to_string(), "East".to_string()]),
        FilterSelection::span(day(2024, 3, 2), day(2024, 3, 4)),
    ] {
        let subset = filter_sessions(&dataset, &selection);
        let summary = summarize(&subset);
        let column_total: f64 =
            revenue_vs_cost(&dataset, &subset).iter().map(|r| r.revenue).sum();
        assert_eq!(summary.total_revenue, column_total);
    }
}

#[test]
fn test_summary_over_full_dataset() {
    let dataset = three_station_dataset();
    let subset = filter_sessions(&dataset, &full_span());
    let summary = summarize(&subset);

    assert_eq!(summary.sessions, 10);
    assert_eq!(summary.mean_wait, 5.6);
    assert_eq!(summary.total_revenue, 96.0);
    assert_eq!(summary.mean_satisfaction, 21.0);
}

#[test]
fn test_distribution_five_number_summary() {
    let dist = Distribution::from_values(vec![3.0, 5.0, 4.0]).unwrap();
    assert_eq!(dist.min, 3.0);
    assert_eq!(dist.q1, 3.5);
    assert_eq!(dist.median, 4.0);
    assert_eq!(dist.q3, 4.5);
    assert_eq!(dist.max, 5.0);
    assert!(dist.outliers.is_empty());
}

#[test]
fn test_distribution_flags_iqr_outliers() {
    // q1=2, q3=4, iqr=2: anything outside [-1, 7] is an outlier.
    let dist = Distribution::from_values(vec![1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    assert_eq!(dist.q1, 2.0);
    assert_eq!(dist.median, 3.0);
    assert_eq!(dist.q3, 4.0);
    assert_eq!(dist.outliers, vec![100.0]);
    assert_eq!(dist.max, 100.0);
}

#[test]
fn test_distribution_empty_is_none() {
    assert_eq!(Distribution::from_values(vec![]), None);
}

#[test]
fn test_queue_capacity_groups_both_metrics() {
    let dataset = three_station_dataset();
    let subset = filter_sessions(&dataset, &full_span());
    let rows = queue_capacity(&dataset, &subset);

    assert_eq!(rows.len(), 3);
    let sc02 = rows.iter().find(|r| r.station_id == "SC_02").unwrap();
    // Queue lengths 4, 5, 3; idle ports 0, 0, 1.
    assert_eq!(sc02.queue_length.min, 3.0);
    assert_eq!(sc02.queue_length.median, 4.0);
    assert_eq!(sc02.queue_length.max, 5.0);
    assert_eq!(sc02.idle_ports.min, 0.0);
    assert_eq!(sc02.idle_ports.median, 0.0);
    assert_eq!(sc02.idle_ports.max, 1.0);
}

#[test]
fn test_queue_capacity_outlier_session() {
    let mut spike = session("s-99", "SC_01", "2024-03-01 08:00", 5.0);
    spike.queue_length = 40;
    let mut sessions = vec![spike];
    for i in 0..6 {
        let mut s = session(&format!("s-{:02}", i), "SC_01", "2024-03-01 09:00", 5.0);
        s.queue_length = i % 3;
        sessions.push(s);
    }
    let dataset = Dataset::new(
        sessions,
        vec![super::fixtures::station("SC_01", "Harris Ranch", 36.25, -120.5, "West")],
        vec![],
    );

    let subset = filter_sessions(&dataset, &FilterSelection::span(day(2024, 3, 1), day(2024, 3, 1)));
    let rows = queue_capacity(&dataset, &subset);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].queue_length.outliers, vec![40.0]);
}
