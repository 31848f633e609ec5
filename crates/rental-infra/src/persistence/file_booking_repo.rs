//! File-based implementation of BookingRepository

use std::path::{Path, PathBuf};

use rental_domain::clock::SharedClock;
use rental_domain::model::{Booking, BookingStatus, NewBooking};
use rental_domain::repository::BookingRepository;
use rental_store::{MemoryBookingRepository, Table};
use rental_types::{Error, Result};

use super::json_file;

pub struct FileBookingRepository {
    store_path: PathBuf,
    inner: MemoryBookingRepository,
}

impl FileBookingRepository {
    /// Bookings are never seeded
    pub fn open(store_dir: &Path, clock: SharedClock) -> Result<Self> {
        let store_path = json_file::store_file(store_dir, "bookings.json")?;
        let table = json_file::load::<Table<Booking>>(&store_path)?.unwrap_or_default();
        Ok(Self {
            store_path,
            inner: MemoryBookingRepository::from_table(table, clock)?,
        })
    }

    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryBookingRepository) -> std::result::Result<T, Error>,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        if changed(&out) {
            json_file::save(&self.store_path, next.table())?;
            self.inner = next;
        }
        Ok(out)
    }
}

impl BookingRepository for FileBookingRepository {
    fn create(&mut self, booking: NewBooking) -> std::result::Result<Booking, Error> {
        self.commit(|repo| repo.create(booking), |_| true)
    }

    fn find_by_id(&self, id: u64) -> std::result::Result<Option<Booking>, Error> {
        self.inner.find_by_id(id)
    }

    fn find_by_vehicle(&self, vehicle_id: &str) -> std::result::Result<Vec<Booking>, Error> {
        self.inner.find_by_vehicle(vehicle_id)
    }

    fn find_by_customer(&self, email: &str) -> std::result::Result<Vec<Booking>, Error> {
        self.inner.find_by_customer(email)
    }

    fn find_all(&self) -> std::result::Result<Vec<Booking>, Error> {
        self.inner.find_all()
    }

    fn set_status(&mut self, id: u64, status: BookingStatus) -> std::result::Result<Option<Booking>, Error> {
        self.commit(|repo| repo.set_status(id, status), Option::is_some)
    }
}
