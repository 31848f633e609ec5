//! In-memory listing repository

use rental_domain::repository::ListingRepository;
use rental_types::{Error, VehicleListing, VehicleStatus};

use crate::seed::sample_listings;

/// Listings kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryListingRepository {
    listings: Vec<VehicleListing>,
}

impl MemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            listings: sample_listings(),
        }
    }

    /// Build from stored listings. Every listing is validated and a repeated
    /// id is a conflict, so nothing is dropped on the next save.
    pub fn from_listings(listings: Vec<VehicleListing>) -> Result<Self, Error> {
        let mut repo = Self::new();
        for listing in listings {
            repo.insert(listing)?;
        }
        Ok(repo)
    }

    pub fn listings(&self) -> &[VehicleListing] {
        &self.listings
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.listings.iter().position(|l| l.id == id)
    }
}

impl ListingRepository for MemoryListingRepository {
    fn insert(&mut self, listing: VehicleListing) -> Result<String, Error> {
        listing.validate()?;
        if self.position(&listing.id).is_some() {
            return Err(Error::Conflict(format!(
                "Listing with id {} already exists",
                listing.id
            )));
        }
        let id = listing.id.clone();
        tracing::debug!(id = %id, name = %listing.name, "listing inserted");
        self.listings.push(listing);
        Ok(id)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<VehicleListing>, Error> {
        Ok(self.listings.iter().find(|l| l.id == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<VehicleListing>, Error> {
        Ok(self.listings.clone())
    }

    fn update(&mut self, listing: VehicleListing) -> Result<bool, Error> {
        listing.validate()?;
        match self.position(&listing.id) {
            Some(index) => {
                self.listings[index] = listing;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn set_status(&mut self, id: &str, status: VehicleStatus) -> Result<bool, Error> {
        match self.listings.iter_mut().find(|l| l.id == id) {
            Some(listing) => {
                listing.status = status;
                tracing::debug!(id, status = %status, "listing status changed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&mut self, id: &str) -> Result<bool, Error> {
        match self.position(id) {
            Some(index) => {
                self.listings.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> usize {
        self.listings.len()
    }
}
