//! Persistence implementations
//!
//! JSON-file implementations of the repository traits. Each one wraps the
//! matching in-memory repository and rewrites its file after every mutation.

mod file_booking_repo;
mod file_listing_repo;
mod file_todo_repo;
mod file_user_repo;
mod json_file;

pub use file_booking_repo::FileBookingRepository;
pub use file_listing_repo::FileListingRepository;
pub use file_todo_repo::FileTodoRepository;
pub use file_user_repo::FileUserRepository;
