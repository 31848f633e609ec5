//! Use cases over the repositories

mod booking_service;
mod listing_service;
mod search_service;
mod todo_service;
mod user_service;

pub use booking_service::{BookingQuote, BookingRequest, BookingService};
pub use listing_service::{ImportSummary, ListingService, NEW_LISTING_RATING};
pub use search_service::SearchService;
pub use todo_service::{TodoList, TodoService};
pub use user_service::UserService;
