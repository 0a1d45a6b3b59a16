//! Free-text station lookup.
//!
//! Users type either a station code or an approximate station name. The
//! route query itself only deals in exact names, so a resolver turns the
//! user's text into a concrete station first.

use crate::domain::Station;

use super::catalog::Network;

/// Resolves a free-text query to a single station.
pub trait StationResolver {
    /// Resolve `query` to the best matching station, if any.
    fn resolve(&self, query: &str) -> Option<&Station>;
}

/// Resolver that tries an exact code match, then the nearest name.
///
/// Name matching uses Levenshtein distance against uppercased station
/// names. Ties go to the station that appears first in the catalog.
///
/// # Examples
///
/// ```
/// use mrt_router::domain::{Station, StationCode};
/// use mrt_router::stations::{FuzzyResolver, Network, StationResolver};
/// use chrono::NaiveDate;
///
/// let opened = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
/// let network = Network::new(vec![
///     Station::new(StationCode::parse("NS1").unwrap(), "Jurong East", opened),
///     Station::new(StationCode::parse("NS2").unwrap(), "Bukit Batok", opened),
/// ]);
/// let resolver = FuzzyResolver::new(&network);
///
/// assert_eq!(resolver.resolve("ns2").unwrap().name(), "Bukit Batok");
/// assert_eq!(resolver.resolve("jurong est").unwrap().name(), "Jurong East");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FuzzyResolver<'a> {
    network: &'a Network,
}

impl<'a> FuzzyResolver<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    fn nearest_by_name(&self, query: &str) -> Option<&'a Station> {
        let mut best: Option<(usize, &'a Station)> = None;
        for station in self.network.stations() {
            let distance = strsim::levenshtein(query, &station.name().to_uppercase());
            if best.is_none_or(|(min, _)| distance < min) {
                best = Some((distance, station));
            }
        }
        best.map(|(_, station)| station)
    }
}

impl StationResolver for FuzzyResolver<'_> {
    fn resolve(&self, query: &str) -> Option<&Station> {
        let query = query.trim().to_uppercase();
        self.network
            .find_by_code(&query)
            .or_else(|| self.nearest_by_name(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationCode;
    use chrono::NaiveDate;

    fn network() -> Network {
        let opened = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let s = |code: &str, name: &str| {
            Station::new(StationCode::parse(code).unwrap(), name, opened)
        };
        Network::new(vec![
            s("NS1", "Jurong East"),
            s("NS2", "Bukit Batok"),
            s("NS3", "Bukit Gombak"),
            s("EW24", "Jurong East"),
            s("EW13", "City Hall"),
        ])
    }

    #[test]
    fn exact_code_wins() {
        let net = network();
        let resolver = FuzzyResolver::new(&net);
        let code = |query: &str| resolver.resolve(query).unwrap().code().as_str();
        assert_eq!(code("EW24"), "EW24");
        assert_eq!(code("  ew24 "), "EW24");
    }

    #[test]
    fn exact_name_matches() {
        let net = network();
        let resolver = FuzzyResolver::new(&net);
        assert_eq!(resolver.resolve("City Hall").unwrap().name(), "City Hall");
    }

    #[test]
    fn misspelt_name_matches_nearest() {
        let net = network();
        let resolver = FuzzyResolver::new(&net);
        assert_eq!(
            resolver.resolve("bukit gombok").unwrap().name(),
            "Bukit Gombak"
        );
        assert_eq!(resolver.resolve("citi hal").unwrap().name(), "City Hall");
    }

    #[test]
    fn ties_go_to_first_in_catalog() {
        let net = network();
        let resolver = FuzzyResolver::new(&net);
        // Both Jurong East records are equally close; NS1 comes first.
        assert_eq!(
            resolver.resolve("jurong east").unwrap().code().as_str(),
            "NS1"
        );
    }

    #[test]
    fn empty_network_resolves_nothing() {
        let net = Network::default();
        let resolver = FuzzyResolver::new(&net);
        assert!(resolver.resolve("anything").is_none());
    }
}
