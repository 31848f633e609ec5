//! Owner-side listing management

use std::path::Path;

use rental_domain::model::NewListing;
use rental_domain::repository::ListingRepository;
use rental_infra::listing_import::{import_listings, new_listing_id, ImportedListing, RejectedRow};
use rental_types::{Error, Result, VehicleListing, VehicleStatus};

/// Rating given to a vehicle added without one
pub const NEW_LISTING_RATING: f64 = 4.5;

/// Outcome of importing a listing file
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub added: Vec<VehicleListing>,
    pub rejected: Vec<RejectedRow>,
}

pub struct ListingService<R> {
    listings: R,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(listings: R) -> Self {
        Self { listings }
    }

    pub fn list(&self) -> Result<Vec<VehicleListing>> {
        self.listings.find_all()
    }

    /// Add a vehicle from the owner form. It starts out available.
    pub fn add(&mut self, new: NewListing) -> Result<VehicleListing> {
        let rated = new.rating.as_deref().is_some_and(|r| !r.trim().is_empty());
        let mut listing = new.into_listing(new_listing_id)?;
        listing.status = VehicleStatus::Available;
        if !rated {
            listing.rating = NEW_LISTING_RATING;
        }

        self.listings.insert(listing.clone())?;
        tracing::info!(id = %listing.id, name = %listing.name, "listing added");
        Ok(listing)
    }

    /// Import a JSON or CSV file. Rows with an id already in the store are
    /// rejected alongside rows that failed to parse.
    ///
    /// Rows are stored one at a time. If a write fails, the rows stored before
    /// it stay in the store and the error is returned.
    pub fn import(&mut self, path: &Path) -> Result<ImportSummary> {
        let report = import_listings(path)?;

        let mut summary = ImportSummary {
            added: Vec::with_capacity(report.listings.len()),
            rejected: report.rejected,
        };
        for ImportedListing { row, listing } in report.listings {
            match self.listings.insert(listing.clone()) {
                Ok(_) => summary.added.push(listing),
                Err(Error::Conflict(reason)) => {
                    tracing::warn!(row, id = %listing.id, "skipping duplicate listing");
                    summary.rejected.push(RejectedRow { row, reason });
                }
                Err(e) => {
                    tracing::error!(row, stored = summary.added.len(), "import stopped: {}", e);
                    return Err(e);
                }
            }
        }
        summary.rejected.sort_by_key(|r| r.row);
        Ok(summary)
    }

    pub fn set_status(&mut self, id: &str, status: VehicleStatus) -> Result<VehicleListing> {
        if !self.listings.set_status(id, status)? {
            return Err(Error::NotFound(format!("Vehicle {}", id)));
        }
        self.listings
            .find_by_id(id)?
            .ok_or_else(|| Error::NotFound(format!("Vehicle {}", id)))
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        if !self.listings.remove(id)? {
            return Err(Error::NotFound(format!("Vehicle {}", id)));
        }
        tracing::info!(id, "listing removed");
        Ok(())
    }
}
