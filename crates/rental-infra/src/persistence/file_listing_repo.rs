//! File-based implementation of ListingRepository

use std::path::{Path, PathBuf};

use rental_domain::repository::ListingRepository;
use rental_store::MemoryListingRepository;
use rental_types::{Error, Result, VehicleListing, VehicleStatus};

use super::json_file;

/// Listings stored as a JSON array in `listings.json`
pub struct FileListingRepository {
    store_path: PathBuf,
    inner: MemoryListingRepository,
}

impl FileListingRepository {
    /// Open or create the store. A missing file is seeded with the sample
    /// listings when `seed` is set. Stored listings are validated on load.
    pub fn open(store_dir: &Path, seed: bool) -> Result<Self> {
        let store_path = json_file::store_file(store_dir, "listings.json")?;

        let (inner, fresh) = match json_file::load::<Vec<VehicleListing>>(&store_path)? {
            Some(listings) => (MemoryListingRepository::from_listings(listings)?, false),
            None if seed => (MemoryListingRepository::seeded(), true),
            None => (MemoryListingRepository::new(), true),
        };

        let repo = Self { store_path, inner };
        if fresh {
            tracing::info!(path = %repo.store_path.display(), count = repo.inner.count(), "created listing store");
            json_file::save(&repo.store_path, repo.inner.listings())?;
        }
        Ok(repo)
    }

    /// Run `change` on a copy and keep it only once the file is written
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryListingRepository) -> std::result::Result<T, Error>,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        if changed(&out) {
            json_file::save(&self.store_path, next.listings())?;
            self.inner = next;
        }
        Ok(out)
    }
}

impl ListingRepository for FileListingRepository {
    fn insert(&mut self, listing: VehicleListing) -> std::result::Result<String, Error> {
        self.commit(|repo| repo.insert(listing), |_| true)
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<VehicleListing>, Error> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self) -> std::result::Result<Vec<VehicleListing>, Error> {
        self.inner.find_all()
    }

    fn update(&mut self, listing: VehicleListing) -> std::result::Result<bool, Error> {
        self.commit(|repo| repo.update(listing), |updated| *updated)
    }

    fn set_status(&mut self, id: &str, status: VehicleStatus) -> std::result::Result<bool, Error> {
        self.commit(|repo| repo.set_status(id, status), |changed| *changed)
    }

    fn remove(&mut self, id: &str) -> std::result::Result<bool, Error> {
        self.commit(|repo| repo.remove(id), |removed| *removed)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }
}
