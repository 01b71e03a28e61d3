use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading the launch-records CSV.
///
/// The dashboard makes no attempt to recover: any of these aborts startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening CSV file: {0}")]
    Open(#[source] csv::Error),

    #[error("CSV row {row}: {source}")]
    Row {
        row: u64,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One raw CSV row. Header names follow the source file exactly.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl From<RawRecord> for LaunchRecord {
    fn from(raw: RawRecord) -> Self {
        LaunchRecord {
            site: raw.launch_site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome: raw.class,
            booster_category: raw.booster_version_category,
        }
    }
}

/// Load the launch dataset from a CSV file.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    let reader = csv::Reader::from_path(path).map_err(LoadError::Open)?;
    let records = read_records(reader)?;
    Ok(LaunchDataset::from_records(records))
}

/// Parse launch records from any CSV reader.
///
/// Extra columns (e.g. `Flight Number`) are ignored; the four columns the
/// dashboard uses must be present in every row.
pub fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<LaunchRecord>, LoadError> {
    let mut records = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        let raw = result.map_err(|e| LoadError::Row {
            row: e.position().map_or(0, csv::Position::record),
            source: e,
        })?;
        records.push(raw.into());
    }
    Ok(records)
}
