use std::collections::{BTreeMap, BTreeSet};

use chargescope_types::{EventMarker, Session, Station};
use chrono::NaiveDate;

/// The loaded dataset: the session fact table plus the station and event
/// side tables. Shared read-only by every query; never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub sessions: Vec<Session>,
    pub stations: BTreeMap<String, Station>,
    pub events: Vec<EventMarker>,
}

impl Dataset {
    pub fn new(sessions: Vec<Session>, stations: Vec<Station>, events: Vec<EventMarker>) -> Self {
        let stations =
            stations.into_iter().map(|s| (s.station_id.clone(), s)).collect::<BTreeMap<_, _>>();
        Dataset { sessions, stations, events }
    }

    /// Look up the station a session belongs to.
    pub fn station(&self, station_id: &str) -> Option<&Station> {
        self.stations.get(station_id)
    }

    /// Distinct region labels across the network.
    pub fn regions(&self) -> BTreeSet<String> {
        self.stations.values().map(|s| s.region.clone()).collect()
    }

    /// First and last calendar day with any session, or `None` for an
    /// empty dataset.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut days = self.sessions.iter().map(Session::day);
        let first = days.next()?;
        let (min, max) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargescope_types::ChargerType;
    use chrono::NaiveDateTime;

    fn session(id: &str, station: &str, ts: &str) -> Session {
        Session {
            session_id: id.to_string(),
            station_id: station.to_string(),
            start_time: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            charger_type: ChargerType::V3,
            wait_minutes: 5.0,
            energy_kwh: 40.0,
            revenue: 12.0,
            cost: 3.0,
            queue_length: 1,
            idle_ports: 2,
            satisfaction: 30.0,
        }
    }

    fn station(id: &str, region: &str) -> Station {
        Station {
            station_id: id.to_string(),
            name: id.to_string(),
            lat: 0.0,
            lon: 0.0,
            region: region.to_string(),
        }
    }

    #[test]
    fn test_date_span_covers_min_and_max_day() {
        let dataset = Dataset::new(
            vec![
                session("a", "SC_01", "2024-03-05 10:00:00"),
                session("b", "SC_01", "2024-03-01 08:00:00"),
                session("c", "SC_02", "2024-03-09 23:59:00"),
            ],
            vec![station("SC_01", "West"), station("SC_02", "East")],
            vec![],
        );
        let (start, end) = dataset.date_span().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_date_span_empty_dataset() {
        assert_eq!(Dataset::default().date_span(), None);
    }

    #[test]
    fn test_regions_are_deduplicated() {
        let dataset = Dataset::new(
            vec![],
            vec![station("SC_01", "West"), station("SC_02", "West"), station("SC_03", "East")],
            vec![],
        );
        let regions: Vec<String> = dataset.regions().into_iter().collect();
        assert_eq!(regions, vec!["East".to_string(), "West".to_string()]);
    }
}
