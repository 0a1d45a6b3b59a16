//! The station catalog.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{Station, StationCode};

/// All stations known to the session, in load order.
///
/// Loaded once and read-only afterwards. Route queries borrow from it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    by_code: HashMap<StationCode, usize>,
}

impl Network {
    /// Create a network from stations in load order.
    ///
    /// If a code appears twice, `find_by_code` returns the first record.
    pub fn new(stations: Vec<Station>) -> Self {
        let mut by_code = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            by_code.entry(station.code().clone()).or_insert(idx);
        }
        Self { stations, by_code }
    }

    /// All stations, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Look up a station by exact code.
    pub fn find_by_code(&self, code: &str) -> Option<&Station> {
        let code = StationCode::parse(code).ok()?;
        self.by_code.get(&code).map(|&idx| &self.stations[idx])
    }

    /// Stations open at `at`, in load order.
    pub fn open_stations(&self, at: NaiveDateTime) -> Vec<&Station> {
        self.stations.iter().filter(|s| s.is_open_at(at)).collect()
    }
}

impl FromIterator<Station> for Network {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
