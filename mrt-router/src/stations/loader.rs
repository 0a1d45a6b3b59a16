//! Station file loading.
//!
//! The station file is comma-separated with one header row and three
//! columns: station code, station name and opening date. Columns are read
//! by position; header names are not significant.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Station, StationCode, parse_open_date};

use super::catalog::Network;
use super::error::LoadError;

/// One raw record of the station file.
#[derive(Debug, Deserialize)]
struct StationRow(String, String, String);

/// Load the station file at `path` into a network.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let network = read_stations(file)?;
    debug!(path = %path.display(), stations = network.len(), "loaded station file");
    Ok(network)
}

/// Read stations from any source of station-file data.
pub fn read_stations<R: Read>(reader: R) -> Result<Network, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut stations = Vec::new();

    for (idx, row) in rdr.deserialize::<StationRow>().enumerate() {
        let record = idx + 1;
        let StationRow(code, name, open_date) = row?;

        if code.is_empty() {
            continue;
        }

        let code =
            StationCode::parse(&code).map_err(|source| LoadError::InvalidCode { record, source })?;
        let open_date = parse_open_date(&open_date).map_err(|source| LoadError::InvalidDate {
            record,
            value: open_date.clone(),
            source,
        })?;

        stations.push(Station::new(code, name, open_date));
    }

    Ok(Network::new(stations))
}
