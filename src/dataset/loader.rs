use crate::domain::SafetyLocation;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{info, instrument, warn};

/// Loads the safety locations from a CSV file. Never fails: a missing or unreadable file results in an empty
/// dataset so the service can still start.
#[instrument]
pub async fn load_locations_from(path: &str) -> Vec<SafetyLocation> {
    info!("📁 Loading safety locations...");
    match read_locations(path).await {
        Ok(locations) => {
            info!("📁 Loading safety locations... OK, {} loaded", locations.len());
            locations
        }
        Err(err) => {
            warn!("⚠️ Failed to load safety locations: {}, using an empty dataset", err);
            Vec::new()
        }
    }
}

async fn read_locations(path: &str) -> Result<Vec<SafetyLocation>, DatasetError> {
    let content = fs::read(path).await.map_err(|e| DatasetError::Io {
        source: e,
        path: PathBuf::from(path),
    })?;
    task::spawn_blocking(move || parse_locations(content.as_slice())).await?
}

/// Parses CSV content with a header row. Header names are matched case-insensitively, rows that do not fit the
/// schema are skipped.
fn parse_locations<R: io::Read>(reader: R) -> Result<Vec<SafetyLocation>, DatasetError> {
    let mut reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).flexible(true).from_reader(reader);
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut locations = Vec::new();
    let mut skipped = 0;
    for (index, result) in reader.records().enumerate() {
        // Header is line 1
        let line = index + 2;
        match result.map_err(RowError::from).and_then(|record| columns.to_location(&record)) {
            Ok(location) => locations.push(location),
            Err(err) => {
                warn!(line, "⚠️ Skipping row {}: {}", line, err);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("⚠️ Skipped {} malformed row(s)", skipped);
    }
    Ok(locations)
}

#[derive(Debug, PartialEq)]
struct Columns {
    name: usize,
    latitude: usize,
    longitude: usize,
    address: Option<usize>,
    kind: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let position = |column: &str| headers.iter().position(|header| header.eq_ignore_ascii_case(column));
        let required = |column: &'static str| position(column).ok_or(DatasetError::MissingColumn(column));

        Ok(Columns {
            name: required("name")?,
            latitude: required("latitude")?,
            longitude: required("longitude")?,
            address: position("address"),
            kind: position("type"),
        })
    }

    fn to_location(&self, record: &StringRecord) -> Result<SafetyLocation, RowError> {
        let name = record.get(self.name).filter(|name| !name.is_empty()).ok_or(RowError::MissingField("name"))?;
        let optional = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or_default().to_string();

        Ok(SafetyLocation {
            name: name.to_string(),
            address: optional(self.address),
            kind: optional(self.kind),
            latitude: number(record, self.latitude, "latitude")?,
            longitude: number(record, self.longitude, "longitude")?,
        })
    }
}

fn number(record: &StringRecord, index: usize, field: &'static str) -> Result<f64, RowError> {
    let value = record.get(index).filter(|value| !value.is_empty()).ok_or(RowError::MissingField(field))?;
    value.parse::<f64>().ok().filter(|n| n.is_finite()).ok_or_else(|| RowError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[derive(Error, Debug)]
enum RowError {
    #[error("missing value for '{0}'")]
    MissingField(&'static str),
    #[error("invalid number '{value}' for '{field}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_log::test;

    fn location(name: &str, address: &str, kind: &str, latitude: f64, longitude: f64) -> SafetyLocation {
        SafetyLocation {
            name: name.to_string(),
            address: address.to_string(),
            kind: kind.to_string(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn parse_locations_reads_all_columns() -> Result<(), DatasetError> {
        let csv = "Name,Latitude,Longitude,Address,Type\n\
                   King George Hospital,17.7231,83.3060,Maharanipeta,hospital\n\
                   One Town Police Station,17.6971,83.2966,Main Road,police\n";

        let locations = parse_locations(csv.as_bytes())?;

        assert_eq!(
            locations,
            vec![
                location("King George Hospital", "Maharanipeta", "hospital", 17.7231, 83.3060),
                location("One Town Police Station", "Main Road", "police", 17.6971, 83.2966),
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_locations_matches_headers_case_insensitively() -> Result<(), DatasetError> {
        let csv = "type,LONGITUDE,name,latitude\nhospital,83.3,City Clinic,17.7\n";

        let locations = parse_locations(csv.as_bytes())?;

        assert_eq!(locations, vec![location("City Clinic", "", "hospital", 17.7, 83.3)]);
        Ok(())
    }

    #[test]
    fn parse_locations_skips_malformed_rows() -> Result<(), DatasetError> {
        let csv = "Name,Latitude,Longitude,Address,Type\n\
                   ,17.1,83.1,No name,hospital\n\
                   Bad Latitude,north,83.2,,hospital\n\
                   Missing Longitude,17.3,,,police\n\
                   Short Row,17.4\n\
                   Good,17.5,83.5,,police\n";

        let locations = parse_locations(csv.as_bytes())?;

        assert_eq!(locations, vec![location("Good", "", "police", 17.5, 83.5)]);
        Ok(())
    }

    #[test]
    fn parse_locations_fails_without_a_required_column() {
        let csv = "Name,Latitude,Address\nSomewhere,17.0,Street\n";

        let result = parse_locations(csv.as_bytes());

        assert!(matches!(result, Err(DatasetError::MissingColumn("longitude"))));
    }

    #[test(tokio::test)]
    async fn load_locations_from_reads_a_file() -> io::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "Name,Latitude,Longitude,Address,Type")?;
        writeln!(file, "\"Care Hospital, Ramnagar\",17.72,83.31,\"Waltair Main Rd, Ramnagar\",hospital")?;

        let locations = load_locations_from(file.path().to_string_lossy().as_ref()).await;

        assert_eq!(
            locations,
            vec![location("Care Hospital, Ramnagar", "Waltair Main Rd, Ramnagar", "hospital", 17.72, 83.31)]
        );
        Ok(())
    }

    #[test(tokio::test)]
    async fn load_locations_from_returns_an_empty_dataset_for_a_missing_file() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing.csv");

        let locations = load_locations_from(path.to_string_lossy().as_ref()).await;

        assert!(locations.is_empty());
        Ok(())
    }
}
