//! CSV export of search results

use std::io::Write;
use std::path::Path;

use rental_types::{Result, VehicleListing};

const HEADER: [&str; 7] = ["id", "name", "type", "location", "price", "rating", "status"];

/// Export listings to a CSV file, returning the number of rows written
pub fn export_to_csv(listings: &[VehicleListing], output_path: &Path) -> Result<usize> {
    let file = std::fs::File::create(output_path)?;
    let rows = write_csv(listings, file)?;
    tracing::info!(path = %output_path.display(), rows, "exported listings");
    Ok(rows)
}

/// Same columns as the import format, so an export can be re-imported
pub fn write_csv<W: Write>(listings: &[VehicleListing], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for listing in listings {
        let price = listing.price.to_string();
        let rating = format!("{:.1}", listing.rating);
        csv_writer.write_record([
            listing.id.as_str(),
            listing.name.as_str(),
            listing.category.as_str(),
            listing.location.as_str(),
            price.as_str(),
            rating.as_str(),
            listing.status.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(listings.len())
}
