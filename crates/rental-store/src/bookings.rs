//! In-memory booking repository

use rental_domain::clock::{Clock, SharedClock};
use rental_domain::model::{Booking, BookingStatus, NewBooking};
use rental_domain::repository::BookingRepository;
use rental_types::Error;

use crate::table::Table;

#[derive(Clone)]
pub struct MemoryBookingRepository {
    table: Table<Booking>,
    clock: SharedClock,
}

impl MemoryBookingRepository {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            table: Table::new(),
            clock,
        }
    }

    /// Wrap a loaded table. Fails when its ids leave no room for new ones.
    pub fn from_table(table: Table<Booking>, clock: SharedClock) -> Result<Self, Error> {
        Ok(Self {
            table: table.normalized()?,
            clock,
        })
    }

    pub fn table(&self) -> &Table<Booking> {
        &self.table
    }
}

fn newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

impl BookingRepository for MemoryBookingRepository {
    fn create(&mut self, booking: NewBooking) -> Result<Booking, Error> {
        let id = self.table.allocate_id()?;
        let booking = Booking::from_new(id, booking, self.clock.now());
        self.table.insert(id, booking.clone())?;
        tracing::debug!(id, vehicle = %booking.vehicle_id, "booking created");
        Ok(booking)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Booking>, Error> {
        Ok(self.table.get(id).cloned())
    }

    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<Booking>, Error> {
        let mut bookings: Vec<Booking> = self
            .table
            .values()
            .filter(|b| b.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        newest_first(&mut bookings);
        Ok(bookings)
    }

    fn find_by_customer(&self, email: &str) -> Result<Vec<Booking>, Error> {
        let email = email.trim();
        let mut bookings: Vec<Booking> = self
            .table
            .values()
            .filter(|b| b.customer.email.eq_ignore_ascii_case(email))
            .cloned()
            .collect();
        newest_first(&mut bookings);
        Ok(bookings)
    }

    fn find_all(&self) -> Result<Vec<Booking>, Error> {
        let mut bookings: Vec<Booking> = self.table.values().cloned().collect();
        newest_first(&mut bookings);
        Ok(bookings)
    }

    fn set_status(&mut self, id: u64, status: BookingStatus) -> Result<Option<Booking>, Error> {
        let Some(booking) = self.table.get_mut(id) else {
            return Ok(None);
        };
        booking.status = booking.status.transition_to(status)?;
        tracing::debug!(id, status = %status, "booking status changed");
        Ok(Some(booking.clone()))
    }
}
