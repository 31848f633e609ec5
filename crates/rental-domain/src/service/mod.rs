//! Domain services

pub mod booking_cost;
pub mod listing_filter;

pub use booking_cost::compute_cost;
pub use listing_filter::filter_and_sort;
