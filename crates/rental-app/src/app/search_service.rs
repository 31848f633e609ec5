//! Listing search over a repository

use rental_domain::model::FilterSpec;
use rental_domain::repository::ListingRepository;
use rental_domain::service::filter_and_sort;
use rental_types::{Result, VehicleListing};

pub struct SearchService<R> {
    listings: R,
}

impl<R: ListingRepository> SearchService<R> {
    pub fn new(listings: R) -> Self {
        Self { listings }
    }

    /// Listings matching `spec`, in the order it asks for
    pub fn search(&self, spec: &FilterSpec) -> Result<Vec<VehicleListing>> {
        let all = self.listings.find_all()?;
        let found = filter_and_sort(&all, spec);
        tracing::debug!(total = all.len(), matched = found.len(), "search finished");
        Ok(found)
    }
}
