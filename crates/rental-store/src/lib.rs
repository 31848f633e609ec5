//! In-memory repositories
//!
//! Each repository owns its records and a monotonic id counter. The file-backed
//! repositories in `rental-infra` wrap these and persist a snapshot after every
//! mutation.

pub mod bookings;
pub mod listings;
pub mod seed;
pub mod table;
pub mod todos;
pub mod users;

pub use bookings::MemoryBookingRepository;
pub use listings::MemoryListingRepository;
pub use table::Table;
pub use todos::MemoryTodoRepository;
pub use users::MemoryUserRepository;
