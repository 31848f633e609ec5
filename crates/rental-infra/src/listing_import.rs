//! Listing import from JSON and CSV files
//!
//! Rows are parsed one by one; a bad row is reported in the [`ImportReport`]
//! instead of failing the whole file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use rental_domain::model::NewListing;
use rental_types::{Error, Result, VehicleListing};

/// A row that could not be turned into a listing
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based data row, header excluded
    pub row: usize,
    pub reason: String,
}

/// A parsed listing and the row it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedListing {
    pub row: usize,
    pub listing: VehicleListing,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub listings: Vec<ImportedListing>,
    pub rejected: Vec<RejectedRow>,
}

impl ImportReport {
    fn accept(&mut self, row: usize, parsed: Result<NewListing>) {
        match parsed.and_then(|raw| raw.into_listing(new_listing_id)) {
            Ok(listing) => self.listings.push(ImportedListing { row, listing }),
            Err(e) => {
                tracing::warn!(row, error = %e, "skipping listing row");
                self.rejected.push(RejectedRow {
                    row,
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Generate an id for a listing that arrived without one
pub fn new_listing_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Import listings, choosing the parser by file extension
pub fn import_listings(path: &Path) -> Result<ImportReport> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let report = match extension.as_str() {
        "json" => parse_json(reader)?,
        "csv" => parse_csv(reader)?,
        _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };

    tracing::info!(
        path = %path.display(),
        imported = report.listings.len(),
        rejected = report.rejected.len(),
        "parsed listing import"
    );
    Ok(report)
}

/// CSV with a header row; `type` is accepted for the category column
pub fn parse_csv<R: Read>(reader: R) -> Result<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = ImportReport::default();
    for (index, row) in csv_reader.deserialize::<NewListing>().enumerate() {
        report.accept(index + 1, row.map_err(Error::from));
    }
    Ok(report)
}

/// JSON array of objects. Numbers are accepted wherever text is expected.
pub fn parse_json<R: Read>(reader: R) -> Result<ImportReport> {
    let rows: Vec<Value> = serde_json::from_reader(reader)?;

    let mut report = ImportReport::default();
    for (index, row) in rows.iter().enumerate() {
        let parsed = match row {
            Value::Object(map) => Ok(listing_from_object(map)),
            other => Err(Error::MalformedRecord(format!("expected an object, found {}", json_kind(other)))),
        };
        report.accept(index + 1, parsed);
    }
    Ok(report)
}

fn listing_from_object(map: &Map<String, Value>) -> NewListing {
    NewListing {
        id: text(map, &["id"]),
        name: text(map, &["name"]).unwrap_or_default(),
        category: text(map, &["category", "type"]).unwrap_or_default(),
        location: text(map, &["location"]).unwrap_or_default(),
        price: text(map, &["price"]).unwrap_or_default(),
        rating: text(map, &["rating"]),
        status: text(map, &["status"]),
        description: text(map, &["description"]),
    }
}

/// First present key rendered as text
fn text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
