//! Repository trait definitions for record storage
//!
//! Integer ids are assigned by the repository from a monotonic counter and
//! are never reused, even after a delete.

use crate::model::{Booking, BookingStatus, NewBooking, NewTodo, NewUser, TodoPatch, TodoQuery, UserPatch};
use rental_types::Error;
use rental_types::{Todo, User, VehicleListing, VehicleStatus};

/// Repository for vehicle listings, keyed by opaque string id
pub trait ListingRepository {
    /// Insert a new listing; an existing id is a conflict
    fn insert(&mut self, listing: VehicleListing) -> Result<String, Error>;

    fn find_by_id(&self, id: &str) -> Result<Option<VehicleListing>, Error>;

    /// All listings in insertion order
    fn find_all(&self) -> Result<Vec<VehicleListing>, Error>;

    /// Replace a listing; `false` when the id is unknown
    fn update(&mut self, listing: VehicleListing) -> Result<bool, Error>;

    fn set_status(&mut self, id: &str, status: VehicleStatus) -> Result<bool, Error>;

    fn remove(&mut self, id: &str) -> Result<bool, Error>;

    fn count(&self) -> usize;
}

/// Repository for todos
pub trait TodoRepository {
    fn create(&mut self, todo: NewTodo) -> Result<Todo, Error>;

    fn find_by_id(&self, id: u64) -> Result<Option<Todo>, Error>;

    /// Todos matching the query, ordered by id
    fn find_all(&self, query: &TodoQuery) -> Result<Vec<Todo>, Error>;

    fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Option<Todo>, Error>;

    /// Flip the completed flag
    fn toggle(&mut self, id: u64) -> Result<Option<Todo>, Error>;

    /// Remove and return the todo
    fn delete(&mut self, id: u64) -> Result<Option<Todo>, Error>;

    fn count(&self) -> usize;
}

/// Repository for users; email addresses are unique
pub trait UserRepository {
    fn create(&mut self, user: NewUser) -> Result<User, Error>;

    fn find_by_id(&self, id: u64) -> Result<Option<User>, Error>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    fn find_all(&self) -> Result<Vec<User>, Error>;

    fn update(&mut self, id: u64, patch: UserPatch) -> Result<Option<User>, Error>;

    fn delete(&mut self, id: u64) -> Result<Option<User>, Error>;

    fn count(&self) -> usize;
}

/// Repository for booking requests
pub trait BookingRepository {
    /// Store a booking in `Pending` state
    fn create(&mut self, booking: NewBooking) -> Result<Booking, Error>;

    fn find_by_id(&self, id: u64) -> Result<Option<Booking>, Error>;

    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<Booking>, Error>;

    /// Bookings whose contact email matches, ignoring case, newest first
    fn find_by_customer(&self, email: &str) -> Result<Vec<Booking>, Error>;

    /// All bookings, newest first
    fn find_all(&self) -> Result<Vec<Booking>, Error>;

    /// Move a booking through its lifecycle
    fn set_status(&mut self, id: u64, status: BookingStatus) -> Result<Option<Booking>, Error>;
}
