//! Domain model types

pub mod booking;
pub mod filter_spec;
pub mod listing;
pub mod todo;
pub mod user;

pub use booking::{
    Booking, BookingCost, BookingQuery, BookingRange, BookingStatus, CustomerContact, NewBooking,
};
pub use filter_spec::{CategoryFilter, FilterSpec, PriceBand, SortKey};
pub use listing::NewListing;
pub use todo::{NewTodo, TodoPatch, TodoQuery};
pub use user::{NewUser, UserPatch};
